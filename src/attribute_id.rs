//! Attribute identifier module.
//!
//! Attributes are keyed by a host-supplied identifier type, typically a
//! small `Copy` enum (`MaxHealth`, `MoveSpeed`, ...). The engine never
//! interprets identifiers - they are identity only, used to key the store
//! and to tell observers which attribute changed.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for attribute identifier types.
///
/// Implemented automatically for every `Copy + Eq + Hash + Debug` type, so
/// a host defines its attribute set as a plain enum and uses it directly:
///
/// # Examples
///
/// ```rust
/// use attrmod::AttributeStore;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Attr {
///     MaxHealth,
///     MoveSpeed,
/// }
///
/// let mut store = AttributeStore::new();
/// store.set_base_value(Attr::MaxHealth, 100.0);
/// assert_eq!(store.get_value(Attr::MaxHealth), 100.0);
/// assert_eq!(store.get_value(Attr::MoveSpeed), 0.0);
/// ```
pub trait AttributeId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> AttributeId for T {}
