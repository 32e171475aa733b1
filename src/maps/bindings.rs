//! Minimal bindings of the Google Maps JavaScript API.

use js_sys::{Array, Function, Object, Reflect};
use leptos::window;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use prosper_core::gateways::AutocompleteOptions;

#[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
extern "C" {
    pub type Autocomplete;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(input: &HtmlInputElement, opts: &Object) -> Result<Autocomplete, JsValue>;

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(
        this: &Autocomplete,
        event_name: &str,
        handler: &Function,
    ) -> MapsEventListener;

    #[wasm_bindgen(method, js_name = getPlace)]
    pub fn get_place(this: &Autocomplete) -> Option<PlaceResult>;
}

#[wasm_bindgen(js_namespace = ["google", "maps", "event"])]
extern "C" {
    #[wasm_bindgen(js_name = clearInstanceListeners)]
    pub fn clear_instance_listeners(instance: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    pub type MapsEventListener;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapsEventListener);

    pub type PlaceResult;

    #[wasm_bindgen(method, getter)]
    pub fn formatted_address(this: &PlaceResult) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    pub fn geometry(this: &PlaceResult) -> Option<PlaceGeometry>;

    pub type PlaceGeometry;

    #[wasm_bindgen(method, getter)]
    pub fn location(this: &PlaceGeometry) -> Option<LatLng>;

    pub type LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;
}

/// Checks for `window.google.maps.places`.
pub fn places_available() -> bool {
    ["google", "maps", "places"]
        .into_iter()
        .try_fold(JsValue::from(window()), |parent, key| {
            let value = Reflect::get(&parent, &JsValue::from_str(key)).ok()?;
            (!value.is_undefined() && !value.is_null()).then_some(value)
        })
        .is_some()
}

pub fn autocomplete_options(options: &AutocompleteOptions) -> Result<Object, JsValue> {
    let AutocompleteOptions { types, country } = options;
    let opts = Object::new();
    let types: Array = types.iter().map(|t| JsValue::from_str(t)).collect();
    Reflect::set(&opts, &"types".into(), &types)?;
    if let Some(country) = country {
        let restrictions = Object::new();
        Reflect::set(&restrictions, &"country".into(), &JsValue::from_str(country))?;
        Reflect::set(&opts, &"componentRestrictions".into(), &restrictions)?;
    }
    Ok(opts)
}
