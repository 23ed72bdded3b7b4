pub mod icon;
pub mod ripple;
pub mod tab;

pub use icon::Icon;
pub use ripple::Ripple;
pub use tab::{Tab, TabBadge, TabCustom, TabIcon};
