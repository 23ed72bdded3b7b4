use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a tab. Set by the tabs container, never by the tab itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabVariant {
    #[default]
    Primary,
    Secondary,
}

impl TabVariant {
    /// Markup value
    pub fn code(&self) -> &'static str {
        match self {
            TabVariant::Primary => "primary",
            TabVariant::Secondary => "secondary",
        }
    }
}

impl fmt::Display for TabVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(TabVariant::default().code(), "primary");
        assert_eq!(TabVariant::Secondary.to_string(), "secondary");
    }

    #[test]
    fn test_serde_uses_markup_names() {
        let json = serde_json::to_string(&TabVariant::Secondary).unwrap();
        assert_eq!(json, "\"secondary\"");
        let parsed: TabVariant = serde_json::from_str("\"primary\"").unwrap();
        assert_eq!(parsed, TabVariant::Primary);
    }
}
