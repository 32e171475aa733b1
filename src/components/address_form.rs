use leptos::*;

use prosper_core::{
    gateways::AutocompleteOptions,
    resolver::{self, Binding},
};
use prosper_entities::address::AddressSelection;

use crate::maps::GoogleAutocomplete;

/// An address input with Google Places suggestions.
///
/// Must only be rendered once the Google Maps API is ready.
#[component]
pub fn AddressForm(
    options: AutocompleteOptions,
    #[prop(into)] on_select: Callback<AddressSelection>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let binding = store_value(None::<Binding<GoogleAutocomplete>>);

    input_ref.on_load(move |input| {
        let autocomplete = match GoogleAutocomplete::attach(&input, &options) {
            Ok(autocomplete) => autocomplete,
            Err(err) => {
                log::error!("Unable to attach address autocomplete: {err}");
                return;
            }
        };
        log::debug!("Address autocomplete attached");
        let bound = resolver::bind(autocomplete, move |selection| {
            // Selecting an address unmounts this component,
            // so leave the event handler of the widget first.
            request_animation_frame(move || on_select.call(selection));
        });
        binding.set_value(Some(bound));
    });

    on_cleanup(move || {
        binding.try_update_value(|binding| {
            if let Some(mut binding) = binding.take() {
                binding.dispose();
            }
        });
    });

    view! {
      <div class="w-full max-w-md mx-auto relative">
        <input
          node_ref = input_ref
          type = "text"
          placeholder = "Enter your address"
          class="w-full p-3 border border-gray-300 rounded-lg shadow-sm focus:border-blue-500 focus:ring-1 focus:ring-blue-500 text-gray-900 bg-white"
        />
      </div>
    }
}
