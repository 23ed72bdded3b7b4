pub mod app;
pub mod config;
pub mod shared;

use contracts::config::UiConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

use crate::app::App;
use crate::shared::registry::define_components;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = config::load_config();

    // initializes logging using the `log` crate
    let level = config.as_ref().map(UiConfig::level).unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|err| {
        log::warn!("{}, falling back to defaults", err);
        UiConfig::default()
    });

    // A tag collision is a host error and goes back to the caller
    define_components(&config).map_err(|err| JsValue::from_str(&err.to_string()))?;

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
    Ok(())
}
