use anyhow::anyhow;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::HtmlInputElement;

use prosper_core::gateways::{Autocomplete, AutocompleteOptions, Place};
use prosper_entities::geo::MapPoint;

use super::{bindings, js_error};

const PLACE_CHANGED: &str = "place_changed";

/// A `google.maps.places.Autocomplete` widget attached to an input field.
pub struct GoogleAutocomplete {
    inner: bindings::Autocomplete,
}

impl GoogleAutocomplete {
    pub fn attach(input: &HtmlInputElement, options: &AutocompleteOptions) -> anyhow::Result<Self> {
        if !bindings::places_available() {
            return Err(anyhow!("Google Places is not loaded"));
        }
        let opts = bindings::autocomplete_options(options).map_err(js_error)?;
        let inner = bindings::Autocomplete::new(input, &opts).map_err(js_error)?;
        Ok(Self { inner })
    }
}

pub struct PlaceChangedListener {
    handle: bindings::MapsEventListener,
    _handler: Closure<dyn FnMut()>,
}

impl Drop for PlaceChangedListener {
    fn drop(&mut self) {
        self.handle.remove();
    }
}

impl Autocomplete for GoogleAutocomplete {
    type Listener = PlaceChangedListener;

    fn on_place_changed(&self, handler: Box<dyn FnMut()>) -> Self::Listener {
        let handler = Closure::wrap(handler);
        let handle = self
            .inner
            .add_listener(PLACE_CHANGED, handler.as_ref().unchecked_ref());
        PlaceChangedListener {
            handle,
            _handler: handler,
        }
    }

    fn selected_place(&self) -> Option<Place> {
        let place = self.inner.get_place()?;
        let location = place
            .geometry()
            .and_then(|geometry| geometry.location())
            .map(|location| MapPoint::from_lat_lng_deg(location.lat(), location.lng()));
        Some(Place {
            formatted_address: place.formatted_address(),
            location,
        })
    }

    fn clear_listeners(&self) {
        bindings::clear_instance_listeners(&self.inner);
    }
}
