//! # Units and Line Items
//!
//! The unit of measure vocabulary and the `LineItem` result row.
//!
//! ## Design Philosophy
//!
//! Only the four real units of measure exist. Categorical choices (which
//! foundation type, which roof covering) are not quantities and live in
//! [`crate::estimate::Selections`] instead, so a `Unit` is always a
//! measurable quantity and results never need filtering.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::units::{LineItem, Unit};
//!
//! let item = LineItem::new("concrete-mixture", 288000.0, Unit::Kg);
//! assert_eq!(serde_json::to_string(&item.unit).unwrap(), "\"kg\"");
//! ```

use serde::{Deserialize, Serialize};

/// Unit of measure for a material quantity.
///
/// Serializes to the short wire strings the web client displays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Unit {
    /// Square meters (areas: insulation, finishing, roofing)
    #[serde(rename = "m2")]
    M2,
    /// Cubic meters (volumes: mortar, wood, non-RC foundations)
    #[serde(rename = "m3")]
    M3,
    /// Pieces (bricks, blocks)
    #[serde(rename = "pcs")]
    Pcs,
    /// Kilograms (concrete mixture, rebar)
    #[serde(rename = "kg")]
    Kg,
}

impl Unit {
    /// All units in stable order
    pub const ALL: [Unit; 4] = [Unit::M2, Unit::M3, Unit::Pcs, Unit::Kg];

    /// Wire string for this unit ("m2", "m3", "pcs", "kg")
    pub fn code(&self) -> &'static str {
        match self {
            Unit::M2 => "m2",
            Unit::M3 => "m3",
            Unit::Pcs => "pcs",
            Unit::Kg => "kg",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of an estimation result: a material name, a quantity, and a unit.
///
/// Identity for merging is the `(material, unit)` pair; two contributions to
/// the same pair are summed, never duplicated.
///
/// ## JSON Example
///
/// ```json
/// { "material": "brick", "quantity": 1475.0, "unit": "pcs" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Material label as shown to the user (wire code, e.g. "concrete-mixture")
    pub material: String,

    /// Quantity in `unit`, rounded to 2 decimal places on emission
    pub quantity: f64,

    /// Unit of measure
    pub unit: Unit,
}

impl LineItem {
    /// Create a line item
    pub fn new(material: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        LineItem {
            material: material.into(),
            quantity,
            unit,
        }
    }
}

impl std::fmt::Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.material, self.quantity, self.unit)
    }
}

/// Round a quantity to 2 decimal places, the precision of emitted results.
///
/// Idempotent: `round2(round2(x)) == round2(x)`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
