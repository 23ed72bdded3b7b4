//! Reflected attributes of a tab.
//!
//! Every field is mirrored onto the rendered root element so external style
//! rules and selectors can observe it. `active` and `variant` belong to the
//! enclosing tabs container.

use serde::{Deserialize, Serialize};

use super::converter::bool_to_attribute;
use crate::enums::TabVariant;

/// Snapshot of the tab's attributes. Compared against the previous snapshot
/// to decide whether a new layout pass is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabAttributes {
    pub value: Option<String>,
    pub icon: Option<String>,
    pub inline: bool,
    pub active: bool,
    pub variant: TabVariant,
}

impl TabAttributes {
    /// Markup value of a reflected attribute, `None` when it is absent.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "value" => self.value.clone(),
            "icon" => self.icon.clone(),
            "inline" => bool_to_attribute(self.inline),
            "active" => bool_to_attribute(self.active),
            "variant" => Some(self.variant.code().to_string()),
            _ => None,
        }
    }

    /// An icon name is set (empty text counts as unset)
    pub fn shows_icon(&self) -> bool {
        self.icon.as_deref().is_some_and(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = TabAttributes::default();
        assert_eq!(attrs.value, None);
        assert_eq!(attrs.icon, None);
        assert!(!attrs.inline);
        assert!(!attrs.active);
        assert_eq!(attrs.variant, TabVariant::Primary);
    }

    #[test]
    fn test_default_markup() {
        let attrs = TabAttributes::default();
        let markup: Vec<_> = ["value", "icon", "inline", "active", "variant"]
            .iter()
            .map(|name| attrs.attribute(name))
            .collect();
        assert_eq!(
            markup,
            vec![None, None, None, None, Some("primary".to_string())]
        );
    }

    #[test]
    fn test_boolean_attributes_are_present_or_absent() {
        let mut attrs = TabAttributes {
            inline: true,
            ..Default::default()
        };
        assert_eq!(attrs.attribute("inline"), Some(String::new()));
        attrs.inline = false;
        assert_eq!(attrs.attribute("inline"), None);
    }

    #[test]
    fn test_text_attributes() {
        let attrs = TabAttributes {
            value: Some("inbox".to_string()),
            icon: Some("star".to_string()),
            variant: TabVariant::Secondary,
            ..Default::default()
        };
        assert_eq!(attrs.attribute("value").as_deref(), Some("inbox"));
        assert_eq!(attrs.attribute("icon").as_deref(), Some("star"));
        assert_eq!(attrs.attribute("variant").as_deref(), Some("secondary"));
        assert_eq!(attrs.attribute("unknown"), None);
    }

    #[test]
    fn test_shows_icon() {
        let with_icon = |icon: &str| TabAttributes {
            icon: Some(icon.to_string()),
            ..Default::default()
        };
        assert!(!TabAttributes::default().shows_icon());
        assert!(!with_icon("").shows_icon());
        assert!(with_icon("star").shows_icon());
    }
}
