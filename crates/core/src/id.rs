//! Item identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item.
///
/// Plain integers, assigned by whoever builds the catalog. Uniqueness is
/// enforced by the catalog at insertion time, not by this type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_plain_number() {
        assert_eq!(ItemId::new(42).to_string(), "42");
        assert_eq!(ItemId::from(42).get(), 42);
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&ItemId::new(7)).unwrap(), "7");
        let id: ItemId = serde_json::from_str("3").unwrap();
        assert_eq!(id, ItemId::new(3));
    }
}
