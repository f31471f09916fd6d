//! Roof estimation rule.
//!
//! The structural type is a pure selection. The covering material, when
//! chosen, produces one area line item; the projected area is length ×
//! width with no pitch correction.

use crate::building::Roof;
use crate::units::Unit;

use super::accumulator::QuantityAccumulator;
use super::sanitize_dimension;

pub(crate) fn estimate_roof(roof: &Roof, acc: &mut QuantityAccumulator) {
    if let Some(material) = &roof.material {
        let area_m2 = sanitize_dimension(roof.length) * sanitize_dimension(roof.width);
        acc.add(material.code(), Unit::M2, area_m2);
    }
}
