//! Process-wide registry of component tags.

use contracts::config::UiConfig;
use contracts::registry::{ComponentRegistry, RegistryError};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

static REGISTRY: Lazy<Mutex<ComponentRegistry>> = Lazy::new(|| Mutex::new(ComponentRegistry::new()));

/// Defines the tab under the configured tag. A second definition under the
/// same tag fails with `RegistryError::AlreadyDefined`.
pub fn define_components(config: &UiConfig) -> Result<(), RegistryError> {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .define(&config.tag)
}

pub fn is_defined(tag: &str) -> bool {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .is_defined(tag)
}
