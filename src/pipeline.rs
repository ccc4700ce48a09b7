//! Modifier pipeline module.
//!
//! The pipeline is a pure function from a base value and a sorted modifier
//! list to a final value. The store keeps each list sorted by priority
//! (stable, so equal priorities keep insertion order); the pipeline trusts
//! that order and applies the fixed formula:
//!
//! ```text
//! final = (base + Σ flat) × (1 + Σ percent_add) × Π (1 + percent_mult)
//! ```
//!
//! Additive percentages pool: +10% and +20% make +30%, not ×1.1×1.2.
//! Multiplicative percentages compound independently, after all additive
//! terms. The result is quantized to [`VALUE_SCALE`](crate::VALUE_SCALE)
//! decimal digits.

use crate::breakdown::ValueBreakdown;
use crate::modifier::{Modifier, ModifierKind};
use crate::numeric::{quantize, StatValue};

/// Evaluate the modifier formula over a base value.
///
/// `modifiers` must already be sorted by priority ascending. Never fails:
/// division is not used, and non-finite bases or magnitudes propagate under
/// standard floating-point rules instead of being rejected.
///
/// # Examples
///
/// ```rust
/// use attrmod::{pipeline, Modifier, ModifierKind, SourceId};
///
/// let rune = SourceId::new(1);
/// let modifiers = [
///     Modifier::new(2.0, ModifierKind::Flat, rune),
///     Modifier::new(0.5, ModifierKind::PercentAdd, rune),
///     Modifier::new(0.25, ModifierKind::PercentAdd, rune),
/// ];
///
/// // (10 + 2) * (1 + 0.75) = 21
/// assert_eq!(pipeline::compute(10.0, &modifiers), 21.0);
/// ```
pub fn compute(base: StatValue, modifiers: &[Modifier]) -> StatValue {
    let mut result = base;
    let mut percent_add_sum = 0.0;

    for modifier in modifiers {
        match modifier.kind() {
            ModifierKind::Flat => result += modifier.magnitude(),
            ModifierKind::PercentAdd => percent_add_sum += modifier.magnitude(),
            // Applied after the pooled additive pass below.
            ModifierKind::PercentMult => {}
        }
    }

    result *= 1.0 + percent_add_sum;

    for modifier in modifiers {
        if modifier.kind() == ModifierKind::PercentMult {
            result *= 1.0 + modifier.magnitude();
        }
    }

    quantize(result)
}

/// Evaluate the formula and record how the value was reached.
///
/// Performs the same traversal as [`compute`], in the same order, so the
/// returned [`ValueBreakdown::value`] is identical to what [`compute`]
/// returns for the same inputs.
pub fn compute_breakdown(base: StatValue, modifiers: &[Modifier]) -> ValueBreakdown {
    let mut result = base;
    let mut flat_total = 0.0;
    let mut percent_add_sum = 0.0;
    let mut multipliers = Vec::new();

    for modifier in modifiers {
        match modifier.kind() {
            ModifierKind::Flat => {
                result += modifier.magnitude();
                flat_total += modifier.magnitude();
            }
            ModifierKind::PercentAdd => percent_add_sum += modifier.magnitude(),
            ModifierKind::PercentMult => multipliers.push(1.0 + modifier.magnitude()),
        }
    }

    result *= 1.0 + percent_add_sum;

    for factor in &multipliers {
        result *= factor;
    }

    ValueBreakdown {
        base,
        flat_total,
        percent_add_sum,
        multipliers,
        value: quantize(result),
    }
}
