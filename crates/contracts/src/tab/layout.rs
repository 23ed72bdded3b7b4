//! Choice of the tab's inner structure.
//!
//! | custom slot | icon slot or `icon` | layout                                       |
//! |-------------|---------------------|----------------------------------------------|
//! | yes         | any                 | custom content only                          |
//! | no          | yes                 | badge + icon in icon container, bare label   |
//! | no          | no                  | empty icon container, label with badge       |
//!
//! The badge is rendered in exactly one container of a preset layout.

use super::attributes::TabAttributes;
use super::slots::{ContentPresence, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconContent {
    /// Content projected into the `icon` slot
    Slotted,
    /// Generated glyph named by the `icon` attribute
    Named(String),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSlot {
    IconContainer,
    LabelContainer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabLayout {
    /// Only the `custom` slot is rendered
    Custom,
    /// Built-in icon/label structure
    Preset { icon: IconContent, badge: BadgeSlot },
}

impl TabLayout {
    pub fn resolve(attrs: &TabAttributes, presence: &impl ContentPresence) -> Self {
        if presence.has(Slot::Custom) {
            return TabLayout::Custom;
        }

        let has_icon_slot = presence.has(Slot::Icon);
        let icon = if has_icon_slot {
            IconContent::Slotted
        } else if attrs.shows_icon() {
            IconContent::Named(attrs.icon.clone().unwrap_or_default())
        } else {
            IconContent::Empty
        };

        let badge = if has_icon_slot || attrs.shows_icon() {
            BadgeSlot::IconContainer
        } else {
            BadgeSlot::LabelContainer
        };

        TabLayout::Preset { icon, badge }
    }

    pub fn is_preset(&self) -> bool {
        matches!(self, TabLayout::Preset { .. })
    }

    /// Class list of the `container` part; `preset` marks the built-in layout
    pub fn container_class(&self) -> &'static str {
        if self.is_preset() {
            "container preset"
        } else {
            "container"
        }
    }

    pub fn badge_slot(&self) -> Option<BadgeSlot> {
        match self {
            TabLayout::Preset { badge, .. } => Some(*badge),
            TabLayout::Custom => None,
        }
    }

    pub fn icon_content(&self) -> Option<&IconContent> {
        match self {
            TabLayout::Preset { icon, .. } => Some(icon),
            TabLayout::Custom => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slots holding content
    struct Filled(&'static [Slot]);

    impl ContentPresence for Filled {
        fn has(&self, slot: Slot) -> bool {
            self.0.contains(&slot)
        }
    }

    fn with_icon(icon: &str) -> TabAttributes {
        TabAttributes {
            icon: Some(icon.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_slot_suppresses_everything() {
        let layout = TabLayout::resolve(&with_icon("star"), &Filled(&[Slot::Custom, Slot::Icon]));
        assert_eq!(layout, TabLayout::Custom);
        assert_eq!(layout.container_class(), "container");
        assert_eq!(layout.badge_slot(), None);
        assert_eq!(layout.icon_content(), None);
    }

    #[test]
    fn test_named_icon_without_slots() {
        let layout = TabLayout::resolve(&with_icon("star"), &Filled(&[]));
        assert_eq!(
            layout,
            TabLayout::Preset {
                icon: IconContent::Named("star".to_string()),
                badge: BadgeSlot::IconContainer,
            }
        );
        assert_eq!(layout.container_class(), "container preset");
    }

    #[test]
    fn test_slotted_icon_wins_over_named() {
        let layout = TabLayout::resolve(&with_icon("star"), &Filled(&[Slot::Icon]));
        assert_eq!(layout.icon_content(), Some(&IconContent::Slotted));
        assert_eq!(layout.badge_slot(), Some(BadgeSlot::IconContainer));
    }

    #[test]
    fn test_no_icon_puts_badge_on_label() {
        let layout = TabLayout::resolve(&TabAttributes::default(), &Filled(&[Slot::Default]));
        assert_eq!(
            layout,
            TabLayout::Preset {
                icon: IconContent::Empty,
                badge: BadgeSlot::LabelContainer,
            }
        );
    }

    #[test]
    fn test_empty_icon_name_counts_as_unset() {
        let layout = TabLayout::resolve(&with_icon(""), &Filled(&[]));
        assert_eq!(layout.badge_slot(), Some(BadgeSlot::LabelContainer));
        assert_eq!(layout.icon_content(), Some(&IconContent::Empty));
    }

    #[test]
    fn test_badge_placement_for_every_combination() {
        let cases: [(Option<&str>, &'static [Slot], Option<BadgeSlot>); 6] = [
            (None, &[], Some(BadgeSlot::LabelContainer)),
            (Some("star"), &[], Some(BadgeSlot::IconContainer)),
            (None, &[Slot::Icon], Some(BadgeSlot::IconContainer)),
            (Some("star"), &[Slot::Icon], Some(BadgeSlot::IconContainer)),
            (None, &[Slot::Custom], None),
            (Some("star"), &[Slot::Icon, Slot::Custom], None),
        ];
        for (icon, slots, expected) in cases {
            let attrs = TabAttributes {
                icon: icon.map(str::to_string),
                ..Default::default()
            };
            let layout = TabLayout::resolve(&attrs, &Filled(slots));
            assert_eq!(layout.badge_slot(), expected, "icon={:?} slots={:?}", icon, slots);
            assert_eq!(layout.is_preset(), expected.is_some());
        }
    }

    #[test]
    fn test_resolve_does_not_touch_container_attributes() {
        let attrs = TabAttributes {
            icon: Some("star".to_string()),
            active: true,
            variant: crate::enums::TabVariant::Secondary,
            ..Default::default()
        };
        let before = attrs.clone();
        let _ = TabLayout::resolve(&attrs, &Filled(&[Slot::Custom]));
        let _ = TabLayout::resolve(&attrs, &Filled(&[]));
        assert_eq!(attrs, before);
    }
}
