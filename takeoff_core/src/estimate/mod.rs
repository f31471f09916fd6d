//! # Estimation Engine
//!
//! The pure function at the heart of Takeoff: structured building geometry
//! in, material line items out. Stateless, synchronous, no I/O; every
//! invocation is independent and the result depends only on its input.
//!
//! ## Contract
//!
//! - [`estimate`] - quantities only, default options.
//! - [`estimate_with`] - quantities plus the [`Selections`] record of
//!   categorical choices, with explicit [`EstimateOptions`].
//!
//! Malformed numbers never panic: NaN or negative input dimensions degrade
//! to zero contribution. A *derived* negative net wall area (openings
//! larger than their wall) passes through to the totals by default; see
//! [`EstimateOptions::clamp_net_area`].
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::building::CalculationRequest;
//! use takeoff_core::estimate::estimate;
//!
//! let body = r#"{
//!     "houseType": "brick",
//!     "foundation": {
//!         "width": 10.0, "depth": 1.5, "length": 8.0,
//!         "type": "reinforced-concrete",
//!         "hasBasement": false, "hasBasementFloor": false
//!     },
//!     "walls": [],
//!     "roof": { "type": "metalFrame", "material": "metal", "length": 12.0, "width": 8.0 }
//! }"#;
//! let request = CalculationRequest::from_json(body).unwrap();
//! let items = estimate(request.house_type, &request.spec);
//! assert!(items.iter().any(|i| i.material == "concrete-mixture"));
//! ```

mod accumulator;
mod foundation;
mod roof;
mod selections;
mod walls;

pub use accumulator::QuantityAccumulator;
pub use selections::{BasementSelections, Selections};

use serde::{Deserialize, Serialize};

use crate::building::BuildingSpec;
use crate::materials::HouseType;
use crate::units::LineItem;

/// Knobs for behavior that is deliberately configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOptions {
    /// Clamp each wall's net area at zero instead of letting an oversized
    /// opening drive quantities negative. Off by default.
    #[serde(default)]
    pub clamp_net_area: bool,
}

/// Full result of an estimation pass: the quantity line items plus the
/// categorical selections recorded along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub items: Vec<LineItem>,
    pub selections: Selections,
}

/// Estimate material quantities with default options, returning line items
/// only. This is the signature the calculation endpoint calls.
pub fn estimate(house_type: HouseType, spec: &BuildingSpec) -> Vec<LineItem> {
    estimate_with(house_type, spec, &EstimateOptions::default()).items
}

/// Estimate material quantities, returning quantities and selections.
pub fn estimate_with(
    house_type: HouseType,
    spec: &BuildingSpec,
    options: &EstimateOptions,
) -> Estimate {
    let mut acc = QuantityAccumulator::new();

    foundation::estimate_foundation(&spec.foundation, &mut acc);
    let basement = foundation::estimate_basement(&spec.foundation, &mut acc);
    walls::estimate_walls(&spec.walls, options, &mut acc);
    roof::estimate_roof(&spec.roof, &mut acc);

    Estimate {
        items: acc.into_items(),
        selections: Selections {
            house_type,
            foundation_type: spec.foundation.foundation_type.clone(),
            basement,
            roof_type: spec.roof.roof_type.clone(),
            roof_material: spec.roof.material.clone(),
        },
    }
}

/// Raw input dimensions must be finite and non-negative to contribute;
/// anything else counts as zero.
pub(crate) fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::{Foundation, Opening, OpeningKind, Roof, Wall};
    use crate::materials::{
        BasementWallMaterial, Finishing, FoundationType, Insulation, RoofMaterial, RoofType,
        WallMaterial,
    };
    use crate::units::Unit;

    fn quantity(items: &[LineItem], material: &str, unit: Unit) -> Option<f64> {
        items
            .iter()
            .find(|i| i.material == material && i.unit == unit)
            .map(|i| i.quantity)
    }

    fn base_spec() -> BuildingSpec {
        BuildingSpec {
            foundation: Foundation {
                width: 10.0,
                depth: 1.5,
                length: 8.0,
                foundation_type: FoundationType::ReinforcedConcrete,
                finishing: None,
                has_basement: false,
                has_basement_floor: false,
                floor_material: None,
                wall_material: None,
            },
            walls: vec![Wall {
                width: 1.0,
                length: 5.0,
                height: 2.5,
                material: WallMaterial::Brick,
                insulation: Some(Insulation::Mineral),
                finishing: None,
                openings: vec![Opening {
                    kind: OpeningKind::Window,
                    width: 1.0,
                    height: 1.0,
                }],
            }],
            roof: Roof {
                roof_type: RoofType::MetalFrame,
                material: Some(RoofMaterial::Metal),
                length: 12.0,
                width: 8.0,
            },
        }
    }

    #[test]
    fn test_scenario_a_reinforced_concrete_foundation() {
        let mut spec = base_spec();
        spec.walls.clear();
        spec.roof.material = None;
        let items = estimate(HouseType::Brick, &spec);

        assert_eq!(quantity(&items, "concrete-mixture", Unit::Kg), Some(288000.0));
        assert_eq!(quantity(&items, "rebar", Unit::Kg), Some(18000.0));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_scenario_b_brick_wall_with_window() {
        let spec = base_spec();
        let items = estimate(HouseType::Brick, &spec);

        assert_eq!(quantity(&items, "brick", Unit::Pcs), Some(1475.0));
        assert_eq!(quantity(&items, "mortar", Unit::M3), Some(0.3));
        assert_eq!(quantity(&items, "mineral", Unit::M2), Some(11.5));
    }

    #[test]
    fn test_scenario_c_roof_single_item() {
        let mut spec = base_spec();
        spec.walls.clear();
        spec.foundation.foundation_type = FoundationType::Other("none".to_string());
        spec.foundation.width = 0.0;
        let items = estimate(HouseType::Brick, &spec);

        assert_eq!(quantity(&items, "metal", Unit::M2), Some(96.0));
        // Exactly one surface item; the roof type/material selections
        // never appear as items
        assert_eq!(items.iter().filter(|i| i.unit == Unit::M2).count(), 1);
        assert!(!items.iter().any(|i| i.material == "metalFrame"));
    }

    #[test]
    fn test_scenario_d_gasblock_basement() {
        let mut spec = base_spec();
        spec.walls.clear();
        spec.roof.material = None;
        spec.foundation.width = 6.0;
        spec.foundation.length = 8.0;
        spec.foundation.foundation_type = FoundationType::Rubble;
        spec.foundation.has_basement = true;
        spec.foundation.wall_material = Some(BasementWallMaterial::Gasblock);
        let items = estimate(HouseType::Blocks, &spec);

        assert_eq!(quantity(&items, "basement-gasblock", Unit::Pcs), Some(374.0));
        assert_eq!(quantity(&items, "basement-mortar", Unit::M3), Some(0.19));
    }

    #[test]
    fn test_determinism() {
        let spec = base_spec();
        let first = estimate(HouseType::Brick, &spec);
        let second = estimate(HouseType::Brick, &spec);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_units_are_real_units() {
        let mut spec = base_spec();
        spec.foundation.has_basement = true;
        spec.foundation.has_basement_floor = true;
        spec.foundation.wall_material = Some(BasementWallMaterial::Brick);
        spec.foundation.floor_material = Some(crate::materials::FloorMaterial::Wood);
        let items = estimate(HouseType::Brick, &spec);

        assert!(!items.is_empty());
        for item in &items {
            assert!(Unit::ALL.contains(&item.unit), "unexpected unit on {}", item);
        }
    }

    #[test]
    fn test_insulation_merges_across_walls() {
        let mut spec = base_spec();
        let mut second = spec.walls[0].clone();
        second.length = 4.0;
        second.openings.clear();
        spec.walls.push(second);
        let items = estimate(HouseType::Brick, &spec);

        // 11.5 + 4*2.5 = 21.5 in one merged line
        assert_eq!(quantity(&items, "mineral", Unit::M2), Some(21.5));
        assert_eq!(
            items
                .iter()
                .filter(|i| i.material == "mineral")
                .count(),
            1
        );
    }

    #[test]
    fn test_finishing_insulation_asymmetry() {
        let mut spec = base_spec();
        spec.walls[0].finishing = Some(Finishing::Plaster);
        let items = estimate(HouseType::Brick, &spec);

        let insulation = quantity(&items, "mineral", Unit::M2).unwrap();
        let finishing = quantity(&items, "plaster", Unit::M2).unwrap();
        let opening_area = 1.0;
        assert_eq!(finishing - insulation, opening_area);
    }

    #[test]
    fn test_selections_recorded() {
        let mut spec = base_spec();
        spec.foundation.has_basement = true;
        spec.foundation.wall_material = Some(BasementWallMaterial::Wood);
        let result = estimate_with(HouseType::Brick, &spec, &EstimateOptions::default());

        assert_eq!(result.selections.house_type, HouseType::Brick);
        assert_eq!(
            result.selections.foundation_type,
            FoundationType::ReinforcedConcrete
        );
        assert_eq!(result.selections.roof_material, Some(RoofMaterial::Metal));
        let basement = result.selections.basement.unwrap();
        assert_eq!(basement.wall_material, Some(BasementWallMaterial::Wood));
    }

    #[test]
    fn test_quantities_rounded_to_two_decimals() {
        let items = estimate(HouseType::Brick, &base_spec());
        for item in &items {
            let rounded = (item.quantity * 100.0).round() / 100.0;
            assert_eq!(item.quantity, rounded, "unrounded quantity on {}", item);
        }
    }

    #[test]
    fn test_clamp_option_zeroes_oversized_openings() {
        let mut spec = base_spec();
        spec.walls[0].openings[0].width = 30.0;

        let passthrough = estimate_with(HouseType::Brick, &spec, &EstimateOptions::default());
        assert!(quantity(&passthrough.items, "mineral", Unit::M2).unwrap() < 0.0);

        let clamped = estimate_with(
            HouseType::Brick,
            &spec,
            &EstimateOptions {
                clamp_net_area: true,
            },
        );
        assert_eq!(quantity(&clamped.items, "mineral", Unit::M2), Some(0.0));
    }

    #[test]
    fn test_concrete_merges_across_sections() {
        // RC foundation + RC walls accumulate into single concrete/rebar lines
        let mut spec = base_spec();
        spec.walls = vec![Wall {
            width: 1.0,
            length: 10.0,
            height: 3.0,
            material: WallMaterial::ReinforcedConcrete,
            insulation: None,
            finishing: None,
            openings: vec![],
        }];
        spec.roof.material = None;
        let items = estimate(HouseType::Concrete, &spec);

        // Foundation 120 m³ * 2400 + walls 6 m³ * 2400
        assert_eq!(
            quantity(&items, "concrete-mixture", Unit::Kg),
            Some(288000.0 + 14400.0)
        );
        // Rebar ratios differ per section: 120*150 + 6*120
        assert_eq!(quantity(&items, "rebar", Unit::Kg), Some(18000.0 + 720.0));
        assert_eq!(items.len(), 2);
    }
}
