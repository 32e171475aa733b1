//! Google Maps integration of the browser app.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};

use prosper_core::loader::{LoadState, ScriptLoader, SubscriptionId};

mod autocomplete;
mod bindings;
mod script;

pub use self::{autocomplete::*, script::*};

type SharedLoader = RefCell<ScriptLoader<DomScriptGateway>>;

/// The script loader of the current page.
///
/// Script events only hold a weak reference,
/// so dropping the last clone releases everything.
#[derive(Clone)]
pub struct MapsLoader(Rc<SharedLoader>);

impl MapsLoader {
    #[must_use]
    pub fn new() -> Self {
        let loader = Rc::new_cyclic(|weak: &Weak<SharedLoader>| {
            let weak = weak.clone();
            let gateway = DomScriptGateway::new(move |event| {
                let Some(shared) = weak.upgrade() else {
                    log::debug!("Script loader has been dropped: ignore {event:?}");
                    return;
                };
                let Ok(mut loader) = shared.try_borrow_mut() else {
                    log::warn!("Script loader is busy: ignore {event:?}");
                    return;
                };
                loader.settle(event);
            });
            RefCell::new(ScriptLoader::new(gateway))
        });
        Self(loader)
    }

    pub fn load(&self, api_key: Option<&str>) -> LoadState {
        self.0.borrow_mut().load(api_key).clone()
    }

    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: FnOnce(&LoadState) + 'static,
    {
        self.0.borrow_mut().subscribe(subscriber)
    }

    pub fn teardown(&self) {
        self.0.borrow_mut().teardown();
    }
}

impl Default for MapsLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(err: JsValue) -> anyhow::Error {
    if let Some(msg) = err.as_string() {
        return anyhow!(msg);
    }
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return anyhow!(String::from(err.message()));
    }
    anyhow!("unknown JS error")
}
