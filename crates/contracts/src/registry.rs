use std::collections::HashSet;
use thiserror::Error;

/// Tag the tab is registered under
pub const TAB_TAG: &str = "ui-tab";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("component tag '{0}' is already defined")]
    AlreadyDefined(String),
}

/// Set of component tags defined in this process
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    tags: HashSet<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, tag: &str) -> Result<(), RegistryError> {
        if !self.tags.insert(tag.to_string()) {
            return Err(RegistryError::AlreadyDefined(tag.to_string()));
        }
        log::debug!("component '{}' defined", tag);
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
