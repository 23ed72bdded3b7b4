//! Loading of `UiConfig` from localStorage.

use contracts::config::{ConfigError, UiConfig};
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "tab-ui-config";

/// Missing entry gives the defaults; a malformed one is an error.
pub fn load_config() -> Result<UiConfig, ConfigError> {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => UiConfig::from_json(&json),
        None => Ok(UiConfig::default()),
    }
}
