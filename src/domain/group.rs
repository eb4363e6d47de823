//! Shopping Group Entities
//!
//! A shopping group is a named, uniquely-identified list of persisted items.
//! Its durable identifier is the composite `"<name> ::: <suffix>"` key; the
//! name and the creation-time suffix are modeled as an explicit value type
//! with a single serialize/parse boundary instead of ad hoc string splitting.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::shopping_item::ShoppingItem;

/// Separator between display name and uniqueness suffix in the wire form
const KEY_SEPARATOR: &str = " ::: ";

/// Durable composite identifier for a shopping group.
///
/// The suffix is the millisecond timestamp minted at creation, which keeps
/// keys collision-free even when two groups share a display name. Renaming
/// replaces the name and preserves the suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub name: String,
    pub suffix: i64,
}

/// Last minted suffix; bumped when two mints land in the same millisecond
static LAST_SUFFIX: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(0);

impl GroupKey {
    /// Mint a new key for a group created now.
    ///
    /// The suffix is the current millisecond timestamp, nudged forward when
    /// a previous mint already used it, so keys stay collision-free even
    /// for back-to-back creations within one millisecond.
    pub fn mint(name: impl Into<String>) -> Self {
        use std::sync::atomic::Ordering;

        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = LAST_SUFFIX.load(Ordering::Relaxed);
        let suffix = loop {
            let next = if now > prev { now } else { prev + 1 };
            match LAST_SUFFIX.compare_exchange(prev, next, Ordering::SeqCst, Ordering::Relaxed) {
                Ok(_) => break next,
                Err(actual) => prev = actual,
            }
        };

        Self {
            name: name.into(),
            suffix,
        }
    }

    pub fn new(name: impl Into<String>, suffix: i64) -> Self {
        Self {
            name: name.into(),
            suffix,
        }
    }

    /// Re-derive the key for a rename, preserving the uniqueness suffix
    pub fn renamed(&self, new_name: impl Into<String>) -> Self {
        Self {
            name: new_name.into(),
            suffix: self.suffix,
        }
    }

    /// Serialize to the stored wire form `"<name> ::: <suffix>"`
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.name, KEY_SEPARATOR, self.suffix)
    }

    /// Parse the stored wire form back into a key.
    ///
    /// Splits on the last separator occurrence so display names that contain
    /// the separator themselves still round-trip.
    pub fn decode(raw: &str) -> Option<Self> {
        let at = raw.rfind(KEY_SEPARATOR)?;
        let name = &raw[..at];
        let suffix = raw[at + KEY_SEPARATOR.len()..].parse::<i64>().ok()?;
        Some(Self {
            name: name.to_string(),
            suffix,
        })
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

/// Lifecycle state of a shopping group
///
/// `Draft` exists only in the creating client context; it becomes `Active`
/// on the first successful item insert. `Concluded` is terminal, read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupState {
    Draft,
    Active,
    Concluded,
}

/// Target for appending a manual item: an existing persisted group, or a
/// not-yet-persisted draft addressed by display name
#[derive(Debug, Clone, PartialEq)]
pub enum GroupTarget {
    Draft(String),
    Active(GroupKey),
}

/// Read model of a persisted shopping group, assembled from its item rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingGroup {
    pub key: GroupKey,
    pub items: Vec<ShoppingItem>,
    pub concluded: bool,
    /// Creation timestamp in epoch milliseconds (the key suffix)
    pub created_at: i64,
}

impl ShoppingGroup {
    pub fn new(key: GroupKey, items: Vec<ShoppingItem>) -> Self {
        let concluded = !items.is_empty() && items.iter().all(|i| i.concluded);
        let created_at = key.suffix;
        Self {
            key,
            items,
            concluded,
            created_at,
        }
    }

    pub fn state(&self) -> GroupState {
        if self.concluded {
            GroupState::Concluded
        } else {
            GroupState::Active
        }
    }

    /// True when every item has been marked purchased
    pub fn all_purchased(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.purchased)
    }
}

impl Entity for ShoppingGroup {
    type Id = GroupKey;

    fn id(&self) -> Self::Id {
        self.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let key = GroupKey::new("Feira", 1700000000000);
        assert_eq!(key.encode(), "Feira ::: 1700000000000");
        assert_eq!(GroupKey::decode(&key.encode()), Some(key));
    }

    #[test]
    fn test_decode_name_containing_separator() {
        let key = GroupKey::new("Feira ::: especial", 42);
        let decoded = GroupKey::decode(&key.encode()).unwrap();
        assert_eq!(decoded.name, "Feira ::: especial");
        assert_eq!(decoded.suffix, 42);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(GroupKey::decode("no separator here"), None);
        assert_eq!(GroupKey::decode("Feira ::: not-a-number"), None);
    }

    #[test]
    fn test_rename_preserves_suffix() {
        let key = GroupKey::new("Feira", 1700000000000);
        let renamed = key.renamed("Mercado");
        assert_eq!(renamed.name, "Mercado");
        assert_eq!(renamed.suffix, 1700000000000);
    }

    #[test]
    fn test_minted_keys_carry_current_timestamp() {
        let before = chrono::Utc::now().timestamp_millis();
        let key = GroupKey::mint("Feira");
        assert!(key.suffix >= before);
    }

    #[test]
    fn test_same_millisecond_mints_stay_distinct() {
        let a = GroupKey::mint("Feira");
        let b = GroupKey::mint("Feira");
        assert_ne!(a.suffix, b.suffix);
    }

    #[test]
    fn test_group_state_follows_items() {
        use crate::domain::ShoppingItem;

        let key = GroupKey::new("Feira", 1);
        let mut item = ShoppingItem::new(key.clone(), "Leite".to_string(), 1.0, "L".to_string());

        let group = ShoppingGroup::new(key.clone(), vec![item.clone()]);
        assert_eq!(group.state(), GroupState::Active);
        assert!(!group.all_purchased());

        item.purchased = true;
        let group = ShoppingGroup::new(key.clone(), vec![item.clone()]);
        assert!(group.all_purchased());
        assert_eq!(group.state(), GroupState::Active);

        item.concluded = true;
        let group = ShoppingGroup::new(key, vec![item]);
        assert_eq!(group.state(), GroupState::Concluded);
    }

    #[test]
    fn test_group_key_serde_round_trip() {
        let key = GroupKey::new("Feira", 1700000000000);
        let json = serde_json::to_string(&key).expect("serialize");
        let back: GroupKey = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, key);
    }
}
