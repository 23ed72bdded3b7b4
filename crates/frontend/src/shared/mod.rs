pub mod capabilities;
pub mod components;
pub mod icons;
pub mod registry;
