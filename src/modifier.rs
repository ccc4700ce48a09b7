//! Modifier value objects.
//!
//! A [`Modifier`] is an immutable adjustment to one attribute: a magnitude,
//! a [`ModifierKind`] deciding how the magnitude enters the formula, a
//! priority deciding evaluation order, and a [`SourceId`] for retraction.
//! Retracting a buff means removing its modifiers from the store, never
//! mutating them.

use crate::numeric::StatValue;
use crate::source::SourceId;
use serde::{Deserialize, Serialize};

/// How a modifier's magnitude enters the value formula.
///
/// The set is closed and the pipeline matches it exhaustively, so evaluation
/// order cannot silently drift if a kind is ever added: the compiler forces
/// the pipeline to say where the new kind applies.
///
/// Kinds apply in a fixed order: `Flat` → pooled `PercentAdd` →
/// `PercentMult`, matching the standard layered RPG damage formula.
///
/// # Examples
///
/// ```rust
/// use attrmod::ModifierKind;
///
/// // Default priorities keep the kinds in formula order.
/// assert!(ModifierKind::Flat.default_priority() < ModifierKind::PercentAdd.default_priority());
/// assert!(ModifierKind::PercentAdd.default_priority() < ModifierKind::PercentMult.default_priority());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Added directly to the base value (e.g. `+10` damage).
    Flat,
    /// Summed with every other additive percentage on the attribute, then
    /// applied once as `1 + sum` (+10% and +20% make +30%, not ×1.1×1.2).
    PercentAdd,
    /// Applied on its own as `1 + magnitude`, compounding with other
    /// multiplicative modifiers (e.g. a ×2.0 final-damage rune).
    PercentMult,
}

impl ModifierKind {
    /// Default priority for modifiers of this kind.
    ///
    /// `Flat` = 100, `PercentAdd` = 200, `PercentMult` = 300. The gaps leave
    /// room for hosts to slot explicit priorities between kinds.
    pub fn default_priority(self) -> i32 {
        match self {
            ModifierKind::Flat => 100,
            ModifierKind::PercentAdd => 200,
            ModifierKind::PercentMult => 300,
        }
    }
}

/// An immutable modification to one attribute.
///
/// Fields never change after construction. Duplicate modifiers from the same
/// source are legal and stack per the formula - two `+10%` instances of the
/// same buff contribute `+20%`.
///
/// # Examples
///
/// ```rust
/// use attrmod::{Modifier, ModifierKind, SourceId};
///
/// let rune = SourceId::new(3);
/// let flat = Modifier::new(10.0, ModifierKind::Flat, rune);
///
/// assert_eq!(flat.magnitude(), 10.0);
/// assert_eq!(flat.priority(), 100); // kind default
///
/// let early = Modifier::with_priority(0.5, ModifierKind::PercentMult, 10, rune);
/// assert_eq!(early.priority(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    magnitude: StatValue,
    kind: ModifierKind,
    priority: i32,
    source: SourceId,
}

impl Modifier {
    /// Create a modifier with its kind's default priority.
    pub fn new(magnitude: StatValue, kind: ModifierKind, source: SourceId) -> Self {
        Self {
            magnitude,
            kind,
            priority: kind.default_priority(),
            source,
        }
    }

    /// Create a modifier with an explicit priority.
    ///
    /// Lower priorities evaluate first; equal priorities keep insertion
    /// order.
    pub fn with_priority(
        magnitude: StatValue,
        kind: ModifierKind,
        priority: i32,
        source: SourceId,
    ) -> Self {
        Self {
            magnitude,
            kind,
            priority,
            source,
        }
    }

    /// The magnitude fed into the formula.
    pub fn magnitude(&self) -> StatValue {
        self.magnitude
    }

    /// How the magnitude enters the formula.
    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    /// Evaluation priority (ascending).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The effect that granted this modifier.
    pub fn source(&self) -> SourceId {
        self.source
    }
}
