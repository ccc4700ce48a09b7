//! # attrmod - Deterministic Attribute Modifier Engine
//!
//! A cache-aware computation engine for game attributes that provides:
//! - **Deterministic** evaluation (same mutations → same value, always)
//! - **Hardcode-free** design (attributes are keyed by the host's own enum)
//! - **Lazy recompute** (mutations mark dirty; reads pay the pipeline once)
//! - **Source-scoped** modifier lifecycle (retract a buff everywhere at once)
//!
//! ## Core Concepts
//!
//! ### Value Pipeline
//!
//! Each attribute's value flows through a fixed formula:
//!
//! ```text
//! base → [+ Flat ...] → [× (1 + Σ PercentAdd)] → [× (1 + PercentMult) ...] → final
//! ```
//!
//! 1. **Flat** magnitudes add directly to the base
//! 2. **PercentAdd** magnitudes pool into a single `(1 + sum)` factor
//! 3. **PercentMult** magnitudes compound independently, one factor each
//!
//! ### Key Features
//!
//! - **Dirty-Flag Caching**: a mutated attribute recomputes on its next
//!   read, then serves O(1) until the next mutation
//! - **Stable Ordering**: modifier lists stay sorted by priority with a
//!   stable sort, so equal priorities keep insertion order
//! - **Change Notification**: observers learn which attribute's inputs
//!   changed and pull the value back through the cache
//! - **Debug-Friendly**: full breakdown of any evaluation on demand
//!
//! ## Example
//!
//! ```rust
//! use attrmod::{AttributeStore, Modifier, ModifierKind, SourceId};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Attr {
//!     AttackDamage,
//! }
//!
//! let mut store = AttributeStore::new();
//! store.set_base_value(Attr::AttackDamage, 10.0);
//!
//! let rune = SourceId::new(1);
//! store.add_modifier(Attr::AttackDamage, Modifier::new(2.0, ModifierKind::Flat, rune));
//! store.add_modifier(Attr::AttackDamage, Modifier::new(0.5, ModifierKind::PercentAdd, rune));
//! store.add_modifier(Attr::AttackDamage, Modifier::new(0.25, ModifierKind::PercentAdd, rune));
//!
//! // (10 + 2) * (1 + 0.75) = 21
//! assert_eq!(store.get_value(Attr::AttackDamage), 21.0);
//!
//! // The rune expires; the host retracts everything it granted.
//! store.remove_modifiers_by_source(rune);
//! assert_eq!(store.get_value(Attr::AttackDamage), 10.0);
//! ```
//!
//! ## Modules
//!
//! - [`attribute_id`] - Attribute identifier bound
//! - [`source`] - Modifier provenance handles
//! - [`modifier`] - Modifier value objects
//! - [`pipeline`] - The pure value formula
//! - [`store`] - The attribute store (caching, dirty flags)
//! - [`observer`] - Change notification
//! - [`breakdown`] - Evaluation breakdowns
//! - [`numeric`] - Value type and quantization

pub mod attribute_id;
pub mod breakdown;
pub mod modifier;
pub mod numeric;
pub mod observer;
pub mod pipeline;
pub mod source;
pub mod store;

// Re-export main types for convenience
pub use attribute_id::AttributeId;
pub use breakdown::ValueBreakdown;
pub use modifier::{Modifier, ModifierKind};
pub use numeric::{quantize, StatValue, VALUE_SCALE};
pub use observer::{ChangeCallback, SubscriptionId};
pub use source::SourceId;
pub use store::AttributeStore;
