//! Merge-by-key quantity accumulator.
//!
//! The merge contract lives here and nowhere else: contributions
//! accumulate unrounded in a map keyed by `(material, unit)`, and rounding
//! to 2 decimals happens once, when the accumulator is drained into line
//! items.

use std::collections::BTreeMap;

use crate::units::{round2, LineItem, Unit};

/// Running totals for an estimation pass, keyed by `(material, unit)`.
#[derive(Debug, Default)]
pub struct QuantityAccumulator {
    totals: BTreeMap<(String, Unit), f64>,
}

impl QuantityAccumulator {
    pub fn new() -> Self {
        QuantityAccumulator::default()
    }

    /// Add a contribution to the running total for `(material, unit)`.
    ///
    /// Non-finite contributions are dropped; negative ones are kept (the
    /// negative-net-area passthrough is decided upstream, not here).
    pub fn add(&mut self, material: impl Into<String>, unit: Unit, quantity: f64) {
        if !quantity.is_finite() {
            return;
        }
        *self.totals.entry((material.into(), unit)).or_insert(0.0) += quantity;
    }

    /// Current unrounded total for a key, if any contribution was made.
    pub fn get(&self, material: &str, unit: Unit) -> Option<f64> {
        self.totals.get(&(material.to_string(), unit)).copied()
    }

    /// Number of distinct `(material, unit)` keys
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Drain into line items, rounding each quantity to 2 decimals.
    ///
    /// Order follows the key ordering of the underlying map; callers must
    /// not rely on any particular ordering.
    pub fn into_items(self) -> Vec<LineItem> {
        self.totals
            .into_iter()
            .map(|((material, unit), quantity)| LineItem::new(material, round2(quantity), unit))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_additive() {
        let mut acc = QuantityAccumulator::new();
        acc.add("mineral", Unit::M2, 11.5);
        acc.add("mineral", Unit::M2, 8.25);
        assert_eq!(acc.len(), 1);
        assert_eq!(acc.get("mineral", Unit::M2), Some(19.75));
    }

    #[test]
    fn test_same_material_different_units_stay_separate() {
        let mut acc = QuantityAccumulator::new();
        acc.add("brick", Unit::Pcs, 1475.0);
        acc.add("brick", Unit::M3, 0.5);
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn test_rounding_applied_once_on_drain() {
        let mut acc = QuantityAccumulator::new();
        // Three thirds accumulate unrounded, then round as one total
        acc.add("mortar", Unit::M3, 1.0 / 3.0);
        acc.add("mortar", Unit::M3, 1.0 / 3.0);
        acc.add("mortar", Unit::M3, 1.0 / 3.0);
        let items = acc.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1.0);
    }

    #[test]
    fn test_non_finite_contributions_dropped() {
        let mut acc = QuantityAccumulator::new();
        acc.add("rebar", Unit::Kg, f64::NAN);
        acc.add("rebar", Unit::Kg, f64::INFINITY);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_negative_totals_pass_through() {
        let mut acc = QuantityAccumulator::new();
        acc.add("timber", Unit::M3, -0.45);
        let items = acc.into_items();
        assert_eq!(items[0].quantity, -0.45);
    }
}
