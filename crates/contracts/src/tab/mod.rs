//! Model of a single navigation tab
//!
//! - `attributes`: reflected attributes
//! - `converter`: boolean attributes in markup
//! - `slots`: named content areas and the presence check
//! - `parts`: hooks for external styling
//! - `layout`: choice of the rendered structure
//! - `key`: per-instance identity

pub mod attributes;
pub mod converter;
pub mod key;
pub mod layout;
pub mod parts;
pub mod slots;

pub use attributes::TabAttributes;
pub use key::TabKey;
pub use layout::{BadgeSlot, IconContent, TabLayout};
pub use parts::Part;
pub use slots::{ContentPresence, Slot};
