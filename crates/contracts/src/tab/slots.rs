/// Named content areas a tab accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Label text
    Default,
    Icon,
    Badge,
    /// Replaces the whole icon/label structure
    Custom,
}

impl Slot {
    /// Markup name; also the class of the area's wrapper
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Default => "",
            Slot::Icon => "icon",
            Slot::Badge => "badge",
            Slot::Custom => "custom",
        }
    }
}

/// Answers whether at least one content node is assigned to a slot.
/// Implementations only check existence, never the content itself.
pub trait ContentPresence {
    fn has(&self, slot: Slot) -> bool;
}
