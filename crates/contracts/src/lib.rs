//! Platform-independent model of the tab component.

pub mod config;
pub mod enums;
pub mod registry;
pub mod tab;
