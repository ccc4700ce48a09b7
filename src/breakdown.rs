//! Evaluation breakdown module.
//!
//! [`ValueBreakdown`] records how one pipeline evaluation reached its final
//! value. It is read-only copy-out data - safe to hand to a tooltip or a
//! debug overlay without holding any reference into the store.

use crate::numeric::StatValue;
use serde::{Deserialize, Serialize};

/// Record of one pipeline evaluation.
///
/// Produced by [`pipeline::compute_breakdown`](crate::pipeline::compute_breakdown)
/// and [`AttributeStore::breakdown`](crate::AttributeStore::breakdown). The
/// `value` field always equals what
/// [`pipeline::compute`](crate::pipeline::compute) returns for the same
/// inputs.
///
/// # Examples
///
/// ```rust
/// use attrmod::{pipeline, Modifier, ModifierKind, SourceId};
///
/// let rune = SourceId::new(1);
/// let modifiers = [
///     Modifier::new(2.0, ModifierKind::Flat, rune),
///     Modifier::new(0.75, ModifierKind::PercentAdd, rune),
/// ];
///
/// let breakdown = pipeline::compute_breakdown(10.0, &modifiers);
/// assert_eq!(breakdown.flat_total, 2.0);
/// assert_eq!(breakdown.percent_add_sum, 0.75);
/// assert_eq!(breakdown.value, 21.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueBreakdown {
    /// Base value the evaluation started from.
    pub base: StatValue,
    /// Sum of all flat magnitudes, accumulated in evaluation order.
    pub flat_total: StatValue,
    /// Pooled additive percentage, applied once as `1 + sum`.
    pub percent_add_sum: StatValue,
    /// Each multiplicative factor (`1 + magnitude`), in evaluation order.
    pub multipliers: Vec<StatValue>,
    /// Final quantized value, as a read would return it.
    pub value: StatValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_serializes_to_json() {
        let breakdown = ValueBreakdown {
            base: 10.0,
            flat_total: 2.0,
            percent_add_sum: 0.75,
            multipliers: vec![2.0],
            value: 42.0,
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        let back: ValueBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, breakdown);
    }
}
