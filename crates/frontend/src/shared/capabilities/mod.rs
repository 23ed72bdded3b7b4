//! Capabilities the tab delegates to: ripple feedback, focus handling and
//! slot presence. Each is scoped to a single component instance.

pub mod focus;
pub mod ripple;
pub mod slot_presence;

pub use focus::{use_focusable, FocusHost, Focusable};
pub use ripple::{wave_geometry, RippleController, RippleHost, Wave, WaveGeometry};
pub use slot_presence::SlotPresence;
