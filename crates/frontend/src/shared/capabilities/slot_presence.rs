use contracts::tab::{ContentPresence, Slot};

/// Presence of projected content, captured once from the component's
/// optional slot props and queried on every layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotPresence {
    label: bool,
    icon: bool,
    badge: bool,
    custom: bool,
}

impl SlotPresence {
    pub fn new(label: bool, icon: bool, badge: bool, custom: bool) -> Self {
        Self {
            label,
            icon,
            badge,
            custom,
        }
    }
}

impl ContentPresence for SlotPresence {
    fn has(&self, slot: Slot) -> bool {
        match slot {
            Slot::Default => self.label,
            Slot::Icon => self.icon,
            Slot::Badge => self.badge,
            Slot::Custom => self.custom,
        }
    }
}
