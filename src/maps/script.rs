use std::rc::Rc;

use anyhow::anyhow;
use gloo_events::EventListener;
use leptos::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, HtmlScriptElement};

use prosper_core::{gateways::ScriptGateway, loader::ScriptEvent};

use super::{bindings, js_error};

// Prefix of errors the Maps API reports through `window.onerror`.
const MAPS_API_ERROR: &str = "Google Maps JavaScript API error";

/// Injects the script into the `<head>` of the current document.
pub struct DomScriptGateway {
    on_event: Rc<dyn Fn(ScriptEvent)>,
    injected: Option<InjectedScript>,
}

struct InjectedScript {
    element: HtmlScriptElement,
    _listeners: [EventListener; 3],
}

impl DomScriptGateway {
    pub fn new<F>(on_event: F) -> Self
    where
        F: Fn(ScriptEvent) + 'static,
    {
        Self {
            on_event: Rc::new(on_event),
            injected: None,
        }
    }

    fn listen_to(&self, element: &HtmlScriptElement) -> [EventListener; 3] {
        let on_load = {
            let on_event = Rc::clone(&self.on_event);
            EventListener::once(element, "load", move |_| on_event(ScriptEvent::Loaded))
        };
        let on_error = {
            let on_event = Rc::clone(&self.on_event);
            EventListener::once(element, "error", move |_| {
                on_event(ScriptEvent::Failed(
                    "Error loading Google Places script".to_string(),
                ));
            })
        };
        let on_api_error = {
            let on_event = Rc::clone(&self.on_event);
            EventListener::new(&window(), "error", move |event| {
                let Some(event) = event.dyn_ref::<ErrorEvent>() else {
                    return;
                };
                let message = event.message();
                if message.contains(MAPS_API_ERROR) {
                    on_event(ScriptEvent::Failed(message));
                }
            })
        };
        [on_load, on_error, on_api_error]
    }
}

impl ScriptGateway for DomScriptGateway {
    fn capability_available(&self) -> bool {
        bindings::places_available()
    }

    fn inject(&mut self, src: &str) -> anyhow::Result<()> {
        debug_assert!(self.injected.is_none());
        let element: HtmlScriptElement = document()
            .create_element("script")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| anyhow!("Unexpected script element type"))?;
        element.set_src(src);
        element.set_async(true);
        element.set_defer(true);
        let listeners = self.listen_to(&element);
        let head = document()
            .head()
            .ok_or_else(|| anyhow!("The document has no head"))?;
        head.append_child(&element).map_err(js_error)?;
        self.injected = Some(InjectedScript {
            element,
            _listeners: listeners,
        });
        Ok(())
    }

    fn remove(&mut self) {
        if let Some(InjectedScript { element, .. }) = self.injected.take() {
            element.remove();
        }
    }
}
