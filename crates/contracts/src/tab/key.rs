use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a tab instance, generated once when the instance is created.
/// The tabs container uses it to track the instance across re-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabKey(Uuid);

impl TabKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let keys: HashSet<TabKey> = (0..1000).map(|_| TabKey::generate()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_key_is_stable_once_created() {
        let key = TabKey::generate();
        let copy = key;
        assert_eq!(key.to_string(), copy.to_string());
        assert_eq!(key.to_string().len(), 36);
    }
}
