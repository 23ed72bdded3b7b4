pub mod tab_variant;

pub use tab_variant::TabVariant;
