use leptos::*;

use prosper_core::{
    gateways::AutocompleteOptions,
    wizard::{Step, Wizard},
};
use prosper_entities::{address::AddressSelection, home::HomeDetailsField, plan::PlanKind};

use crate::components::*;

/// Address → home details → savings plans.
#[component]
pub fn Home(autocomplete: AutocompleteOptions) -> impl IntoView {
    // -- signals -- //

    let wizard = RwSignal::new(Wizard::new());
    let step = Signal::derive(move || wizard.with(Wizard::step));
    let home_details = Signal::derive(move || wizard.with(|w| w.home_details().clone()));

    // -- callbacks -- //

    let on_address_select = move |selection: AddressSelection| {
        wizard.update(|w| {
            if let Err(err) = w.select_address(selection) {
                log::warn!("Unable to select address: {err}");
            }
        });
    };

    let on_home_details_change = move |(field, value): (HomeDetailsField, String)| {
        wizard.update(|w| {
            if let Err(err) = w.update_home_details(field, &value) {
                log::warn!("Unable to update home details: {err}");
            }
        });
    };

    let on_home_details_submit = move |()| {
        wizard.update(|w| {
            if let Err(err) = w.submit_home_details() {
                log::warn!("Unable to submit home details: {err}");
            }
        });
    };

    let on_plan_toggle = move |kind: PlanKind| {
        wizard.update(|w| {
            if let Err(err) = w.toggle_plan(kind) {
                log::warn!("Unable to toggle plan {kind}: {err}");
            }
        });
    };

    move || match step.get() {
        Step::Address => view! {
          <div>
            <h2 class="text-2xl font-semibold mb-6 text-white">"Enter Your Address"</h2>
            <AddressForm options = autocomplete.clone() on_select = on_address_select />
          </div>
        }
        .into_view(),
        Step::HomeDetails => view! {
          <div class="space-y-6 max-w-md mx-auto">
            <h2 class="text-2xl font-semibold mb-6 text-white">"Home Details"</h2>
            <HomeDetailsForm
              details = home_details
              on_change = on_home_details_change
              on_submit = on_home_details_submit
            />
          </div>
        }
        .into_view(),
        Step::Plans => view! {
          <div class="max-w-2xl mx-auto">
            <h2 class="text-2xl font-semibold mb-6 text-white">"Bill Impact"</h2>
            <div class="space-y-4">
              <For
                each = move || wizard.with(|w| w.plans().to_vec())
                key = |plan| plan.kind
                let:plan
              >
                <PlanCard
                  plan
                  expanded = Signal::derive(move || wizard.with(|w| w.is_expanded(plan.kind)))
                  on_toggle = on_plan_toggle
                />
              </For>
            </div>
          </div>
        }
        .into_view(),
    }
}
