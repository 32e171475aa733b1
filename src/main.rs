use leptos::*;
use wasm_bindgen::JsCast;

use prosper_homes::{App, Cfg};

fn main() {
    let cfg = Cfg::from_env_or_default();
    _ = console_log::init_with_level(cfg.log_level);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    let app_container = document()
        .get_element_by_id("app")
        .expect("app container element")
        .dyn_into()
        .expect("HtmlElement");
    mount_to(app_container, move || view! { <App cfg /> });
}
