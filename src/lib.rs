use leptos::*;

use prosper_core::loader::LoadState;

pub mod cfg;
mod components;
mod maps;
mod pages;

pub use self::cfg::Cfg;

use self::{components::*, maps::MapsLoader, pages::*};

#[component]
#[must_use]
pub fn App(cfg: Cfg) -> impl IntoView {
    let Cfg {
        google_maps_api_key,
        autocomplete,
        ..
    } = cfg;
    let has_api_key = google_maps_api_key.is_some();

    // -- signals -- //

    let load_state = RwSignal::new(LoadState::NotStarted);

    // -- init Google Maps -- //

    let loader = MapsLoader::new();
    loader.subscribe(move |state| {
        log::debug!("Google Maps API load state changed: {state:?}");
        load_state.set(state.clone());
    });
    let state = loader.load(google_maps_api_key.as_deref());
    if !state.is_settled() {
        load_state.set(state);
    }

    on_cleanup(move || loader.teardown());

    view! {
      <main class="flex min-h-screen flex-col items-center justify-start p-24">
        <div class="z-10 max-w-5xl w-full items-center justify-between text-center">
          <h1 class="text-4xl font-bold mb-4">"Prosper Homes"</h1>
          <div class="mt-8">
            { move || match load_state.get() {
                LoadState::Ready => view! {
                  <Home autocomplete = autocomplete.clone() />
                }
                .into_view(),
                LoadState::Failed(error) => view! {
                  <LoadFailure error has_api_key />
                }
                .into_view(),
                LoadState::NotStarted | LoadState::Loading => view! { <Spinner /> }.into_view(),
              }
            }
          </div>
        </div>
      </main>
    }
}
