//! Modifier provenance module.
//!
//! Every modifier carries a [`SourceId`] naming the game effect that granted
//! it (a buff instance or an equipment slot). The engine compares
//! sources for equality when retracting modifiers and never interprets them
//! otherwise.

use serde::{Deserialize, Serialize};

/// Opaque identity for the origin of a modifier.
///
/// Issued by the host from its own id space (a buff instance counter, an
/// entity id). All modifiers granted by one effect share one `SourceId`, so
/// the effect's entire contribution - across every attribute it touched -
/// can be retracted with a single
/// [`remove_modifiers_by_source`](crate::AttributeStore::remove_modifiers_by_source)
/// call.
///
/// The engine does not own whatever the id refers to; it only stores the
/// identity.
///
/// # Examples
///
/// ```rust
/// use attrmod::SourceId;
///
/// let buff = SourceId::new(7);
/// let same_buff = SourceId::new(7);
/// let other_buff = SourceId::new(8);
///
/// assert_eq!(buff, same_buff);
/// assert_ne!(buff, other_buff);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(u64);

impl SourceId {
    /// Create a `SourceId` from a host-issued raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id back.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SourceId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_equality() {
        let a = SourceId::new(1);
        let b = SourceId::new(1);
        let c = SourceId::new(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_source_id_from_u64() {
        let id: SourceId = 42.into();
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn test_source_id_display() {
        assert_eq!(SourceId::new(9).to_string(), "source#9");
    }
}
