//! Wall estimation rules.
//!
//! Walls are processed in spec order; every contribution merges into the
//! running totals, so ten brick walls still produce one `brick` line.
//!
//! Area conventions:
//! - load-bearing material and insulation use the **net** area
//!   (length × height minus openings);
//! - finishing uses the **gross** area (openings not subtracted).
//!
//! A net area can go negative when openings are mis-specified larger than
//! their wall. By default that negative flows through to the totals;
//! [`EstimateOptions::clamp_net_area`](super::EstimateOptions) clamps it at
//! zero instead.

use crate::building::Wall;
use crate::catalog::CATALOG;
use crate::materials::WallFamily;
use crate::units::Unit;

use super::accumulator::QuantityAccumulator;
use super::foundation::{CONCRETE_MIXTURE, REBAR};
use super::{sanitize_dimension, EstimateOptions};

pub(crate) fn estimate_walls(
    walls: &[Wall],
    options: &EstimateOptions,
    acc: &mut QuantityAccumulator,
) {
    for wall in walls {
        estimate_wall(wall, options, acc);
    }
}

fn estimate_wall(wall: &Wall, options: &EstimateOptions, acc: &mut QuantityAccumulator) {
    let gross_area_m2 = wall.gross_area_m2();

    let mut net_area_m2 = gross_area_m2 - wall.openings_area_m2();
    if options.clamp_net_area {
        net_area_m2 = net_area_m2.max(0.0);
    }

    let width_multiplier = sanitize_dimension(wall.width);

    match wall.material.family() {
        WallFamily::Brick => {
            let brick_count = CATALOG.bricks_for(net_area_m2, width_multiplier);
            acc.add("brick", Unit::Pcs, brick_count);
            acc.add("mortar", Unit::M3, CATALOG.brick_mortar_m3(brick_count));
        }
        WallFamily::Wood => {
            let volume_m3 = net_area_m2 * CATALOG.wood_wall_thickness_m;
            acc.add(wall.material.code(), Unit::M3, volume_m3);
        }
        WallFamily::Concrete => {
            let volume_m3 = net_area_m2 * CATALOG.concrete_wall_thickness_m;
            acc.add(
                CONCRETE_MIXTURE,
                Unit::Kg,
                volume_m3 * CATALOG.concrete_density_kg_m3,
            );
            acc.add(REBAR, Unit::Kg, volume_m3 * CATALOG.wall_rebar_kg_m3);
        }
        WallFamily::Block => {
            let block_count = CATALOG.blocks_for(net_area_m2, width_multiplier);
            acc.add(wall.material.code(), Unit::Pcs, block_count);
            acc.add("mortar", Unit::M3, CATALOG.block_mortar_m3(block_count));
        }
        WallFamily::Unknown => {}
    }

    if let Some(insulation) = &wall.insulation {
        if !insulation.code().is_empty() {
            acc.add(insulation.code(), Unit::M2, net_area_m2);
        }
    }

    // Finishing covers the full face, openings included
    if let Some(finishing) = &wall.finishing {
        if !finishing.code().is_empty() {
            acc.add(finishing.code(), Unit::M2, gross_area_m2);
        }
    }
}
