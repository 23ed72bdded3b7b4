//! Runtime settings of the component library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::TAB_TAG;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tag the tab component is registered under
    pub tag: String,
    /// How long a released ripple wave takes to fade out
    pub ripple_duration_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tag: TAB_TAG.to_string(),
            ripple_duration_ms: 400,
            log_level: "debug".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}
