//! Turns place selections of an autocomplete widget into [`AddressSelection`]s.

use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use prosper_entities::address::AddressSelection;

use crate::gateways::{Autocomplete, Place};

/// Normalize a selected place.
///
/// Places without a formatted address or without valid
/// coordinates are partial selections and yield `None`.
pub fn resolve(place: &Place) -> Option<AddressSelection> {
    let pos = place.location?;
    let formatted_address = place.formatted_address.as_deref()?;
    AddressSelection::try_new(formatted_address, pos)
}

/// Attach a selection listener to the autocomplete instance.
///
/// The returned [`Binding`] is the dispose handle. Dropping it
/// detaches the listeners as well.
pub fn bind<A, F>(autocomplete: A, on_select: F) -> Binding<A>
where
    A: Autocomplete + 'static,
    F: Fn(AddressSelection) + 'static,
{
    let bound = Rc::new(Bound {
        autocomplete,
        on_select: Box::new(on_select),
        disposed: Cell::new(false),
    });
    let weak: Weak<Bound<A>> = Rc::downgrade(&bound);
    let listener = bound.autocomplete.on_place_changed(Box::new(move || {
        if let Some(bound) = weak.upgrade() {
            bound.place_changed();
        }
    }));
    Binding {
        bound,
        listener: Some(listener),
    }
}

struct Bound<A> {
    autocomplete: A,
    on_select: Box<dyn Fn(AddressSelection)>,
    disposed: Cell<bool>,
}

impl<A> Bound<A>
where
    A: Autocomplete,
{
    fn place_changed(&self) {
        if self.disposed.get() {
            log::debug!("Ignore place selection of disposed binding");
            return;
        }
        let Some(place) = self.autocomplete.selected_place() else {
            log::debug!("No place selected");
            return;
        };
        match resolve(&place) {
            Some(selection) => {
                log::debug!("Selected address: {}", selection.formatted_address);
                (self.on_select)(selection);
            }
            None => {
                log::debug!("Ignore incomplete place selection: {place:?}");
            }
        }
    }
}

/// Associates one input field with one live autocomplete instance.
pub struct Binding<A>
where
    A: Autocomplete,
{
    bound: Rc<Bound<A>>,
    listener: Option<A::Listener>,
}

impl<A> std::fmt::Debug for Binding<A>
where
    A: Autocomplete,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

impl<A> Binding<A>
where
    A: Autocomplete,
{
    pub fn autocomplete(&self) -> &A {
        &self.bound.autocomplete
    }

    pub fn is_disposed(&self) -> bool {
        self.bound.disposed.get()
    }

    /// Detach all listeners; calling it more than once has no effect.
    pub fn dispose(&mut self) {
        if self.bound.disposed.replace(true) {
            return;
        }
        self.bound.autocomplete.clear_listeners();
        drop(self.listener.take());
    }
}

impl<A> Drop for Binding<A>
where
    A: Autocomplete,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
