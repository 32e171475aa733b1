use leptos::*;

use prosper_core::loader::LoadError;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
      <div class="w-full h-12 flex items-center justify-center">
        <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-blue-600"></div>
      </div>
    }
}

/// Shows why the Google Maps API is not available.
#[component]
pub fn LoadFailure(error: LoadError, has_api_key: bool) -> impl IntoView {
    view! {
      <div class="text-red-600 p-4 bg-red-50 rounded-md">
        <p>{ error.to_string() }</p>
        <p class="mt-2 text-sm text-left">
          "API key configured: "
          <span class="font-bold">{ if has_api_key { "yes" } else { "no" } }</span>
        </p>
      </div>
    }
}
