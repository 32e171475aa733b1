use prosper_entities::geo::MapPoint;

/// A place as reported by the autocomplete widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Place {
    pub formatted_address: Option<String>,
    pub location: Option<MapPoint>,
}

/// Options for creating an autocomplete instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOptions {
    pub types: Vec<String>,
    pub country: Option<String>,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            types: vec!["address".to_string()],
            country: Some("us".to_string()),
        }
    }
}

/// A live autocomplete instance bound to one input field.
pub trait Autocomplete {
    /// Keeps the registered listener alive.
    type Listener;

    fn on_place_changed(&self, handler: Box<dyn FnMut()>) -> Self::Listener;

    fn selected_place(&self) -> Option<Place>;

    /// Detach all listeners of this instance.
    fn clear_listeners(&self);
}
