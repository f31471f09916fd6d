//! Foundation and basement estimation rules.
//!
//! The foundation contributes either a concrete-mixture/rebar pair (for
//! reinforced concrete) or a single `"<type>-foundation"` volume item. The
//! basement, when present, adds wall and floor materials on top, merging
//! its concrete and rebar into the foundation's totals.

use crate::building::Foundation;
use crate::catalog::CATALOG;
use crate::materials::{BasementWallMaterial, FloorMaterial, FoundationType};
use crate::units::Unit;

use super::accumulator::QuantityAccumulator;
use super::sanitize_dimension;
use super::selections::BasementSelections;

/// Material names shared between the foundation and basement rules.
pub(crate) const CONCRETE_MIXTURE: &str = "concrete-mixture";
pub(crate) const REBAR: &str = "rebar";

pub(crate) fn estimate_foundation(foundation: &Foundation, acc: &mut QuantityAccumulator) {
    let width = sanitize_dimension(foundation.width);
    let depth = sanitize_dimension(foundation.depth);
    let length = sanitize_dimension(foundation.length);
    let volume_m3 = width * depth * length;

    match &foundation.foundation_type {
        FoundationType::ReinforcedConcrete => {
            acc.add(
                CONCRETE_MIXTURE,
                Unit::Kg,
                volume_m3 * CATALOG.concrete_density_kg_m3,
            );
            acc.add(REBAR, Unit::Kg, volume_m3 * CATALOG.foundation_rebar_kg_m3);
        }
        other => {
            acc.add(format!("{}-foundation", other.code()), Unit::M3, volume_m3);
        }
    }
}

/// Basement walls and floor. Returns the selections record for the
/// basement, or `None` when the spec has no basement.
pub(crate) fn estimate_basement(
    foundation: &Foundation,
    acc: &mut QuantityAccumulator,
) -> Option<BasementSelections> {
    if !foundation.has_basement {
        return None;
    }

    let width = sanitize_dimension(foundation.width);
    let length = sanitize_dimension(foundation.length);

    if let Some(wall_material) = &foundation.wall_material {
        let perimeter_m = 2.0 * (width + length);
        let wall_area_m2 = perimeter_m * CATALOG.basement_wall_height_m;

        match wall_material {
            BasementWallMaterial::ReinforcedConcrete => {
                let wall_volume_m3 = wall_area_m2 * CATALOG.basement_wall_thickness_m;
                acc.add(
                    CONCRETE_MIXTURE,
                    Unit::Kg,
                    wall_volume_m3 * CATALOG.concrete_density_kg_m3,
                );
                acc.add(
                    REBAR,
                    Unit::Kg,
                    wall_volume_m3 * CATALOG.foundation_rebar_kg_m3,
                );
            }
            BasementWallMaterial::Brick => {
                let brick_count = CATALOG.bricks_for(wall_area_m2, 1.0);
                acc.add("basement-brick", Unit::Pcs, brick_count);
                acc.add(
                    "basement-mortar",
                    Unit::M3,
                    CATALOG.brick_mortar_m3(brick_count),
                );
            }
            BasementWallMaterial::Gasblock | BasementWallMaterial::Foamblock => {
                let block_count = CATALOG.blocks_for(wall_area_m2, 1.0);
                acc.add(
                    format!("basement-{}", wall_material.code()),
                    Unit::Pcs,
                    block_count,
                );
                acc.add(
                    "basement-mortar",
                    Unit::M3,
                    CATALOG.block_mortar_m3(block_count),
                );
            }
            BasementWallMaterial::Wood => {
                acc.add("basement-wood", Unit::M2, wall_area_m2);
            }
            // Selection is still recorded; no quantity rule exists
            BasementWallMaterial::Other(_) => {}
        }
    }

    let floor_material = if foundation.has_basement_floor {
        foundation.floor_material.clone()
    } else {
        None
    };

    if let Some(material) = &floor_material {
        let floor_area_m2 = width * length;
        match material {
            FloorMaterial::ReinforcedConcrete => {
                let floor_volume_m3 = floor_area_m2 * CATALOG.basement_floor_thickness_m;
                acc.add(
                    CONCRETE_MIXTURE,
                    Unit::Kg,
                    floor_volume_m3 * CATALOG.concrete_density_kg_m3,
                );
                acc.add(REBAR, Unit::Kg, floor_volume_m3 * CATALOG.floor_rebar_kg_m3);
            }
            other => {
                acc.add(
                    format!("basement-floor-{}", other.code()),
                    Unit::M2,
                    floor_area_m2,
                );
            }
        }
    }

    Some(BasementSelections {
        wall_material: foundation.wall_material.clone(),
        floor_material,
    })
}
