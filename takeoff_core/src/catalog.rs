//! # Consumption Catalog
//!
//! Per-material consumption rates and standard element dimensions used by
//! the estimation rules. Values are industry averages for mid-range
//! residential construction.
//!
//! The catalog is exposed as a lazily initialized static ([`CATALOG`]) so
//! every estimation rule reads the same figures; tests that need to pin a
//! number construct [`MaterialCatalog::standard`] directly.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Nominal dimensions of one masonry unit (brick or block), in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasonryUnit {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

impl MasonryUnit {
    /// Volume of a single unit in cubic meters
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }
}

/// Consumption rates and standard dimensions for all estimation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    /// Density of concrete mixture (kg/m³)
    pub concrete_density_kg_m3: f64,

    /// Rebar per m³ of concrete in foundations and basement walls (kg/m³)
    pub foundation_rebar_kg_m3: f64,
    /// Rebar per m³ of concrete in above-ground walls (kg/m³)
    pub wall_rebar_kg_m3: f64,
    /// Rebar per m³ of concrete in basement floors (kg/m³), lower than walls
    pub floor_rebar_kg_m3: f64,

    /// Standard single brick (250×120×65 mm)
    pub brick: MasonryUnit,
    /// Standard wall block (600×200×300 mm)
    pub block: MasonryUnit,

    /// Laid thickness of a single-width brick wall (m)
    pub brick_wall_thickness_m: f64,
    /// Laid thickness of a single-width block wall (m)
    pub block_wall_thickness_m: f64,

    /// Mortar per 1000 bricks (m³)
    pub brick_mortar_m3_per_1000: f64,
    /// Mortar per 100 blocks (m³)
    pub block_mortar_m3_per_100: f64,

    /// Assumed thickness of solid wooden walls (m)
    pub wood_wall_thickness_m: f64,
    /// Assumed thickness of poured concrete walls (m)
    pub concrete_wall_thickness_m: f64,

    /// Standard basement wall height (m)
    pub basement_wall_height_m: f64,
    /// Basement wall thickness (m)
    pub basement_wall_thickness_m: f64,
    /// Basement floor slab thickness (m)
    pub basement_floor_thickness_m: f64,
}

impl MaterialCatalog {
    /// The standard catalog used by [`CATALOG`].
    pub fn standard() -> Self {
        MaterialCatalog {
            concrete_density_kg_m3: 2400.0,
            foundation_rebar_kg_m3: 150.0,
            wall_rebar_kg_m3: 120.0,
            floor_rebar_kg_m3: 100.0,
            brick: MasonryUnit {
                length_m: 0.25,
                width_m: 0.12,
                height_m: 0.065,
            },
            block: MasonryUnit {
                length_m: 0.6,
                width_m: 0.2,
                height_m: 0.3,
            },
            brick_wall_thickness_m: 0.25,
            block_wall_thickness_m: 0.2,
            brick_mortar_m3_per_1000: 0.2,
            block_mortar_m3_per_100: 0.05,
            wood_wall_thickness_m: 0.15,
            concrete_wall_thickness_m: 0.2,
            basement_wall_height_m: 2.4,
            basement_wall_thickness_m: 0.2,
            basement_floor_thickness_m: 0.1,
        }
    }

    /// Brick count for a wall face: ceil(area × laid thickness / unit volume
    /// × width multiplier).
    ///
    /// `width_multiplier` is the wall's `width` field, a thickness factor in
    /// brick widths, not a linear dimension. The result stays an f64 so that
    /// a negative net area (openings larger than the wall) passes through
    /// instead of wrapping.
    pub fn bricks_for(&self, area_m2: f64, width_multiplier: f64) -> f64 {
        (area_m2 * self.brick_wall_thickness_m / self.brick.volume_m3() * width_multiplier).ceil()
    }

    /// Block count for a wall face, same shape as [`Self::bricks_for`].
    pub fn blocks_for(&self, area_m2: f64, width_multiplier: f64) -> f64 {
        (area_m2 * self.block_wall_thickness_m / self.block.volume_m3() * width_multiplier).ceil()
    }

    /// Mortar volume for a number of bricks (m³)
    pub fn brick_mortar_m3(&self, brick_count: f64) -> f64 {
        brick_count / 1000.0 * self.brick_mortar_m3_per_1000
    }

    /// Mortar volume for a number of blocks (m³)
    pub fn block_mortar_m3(&self, block_count: f64) -> f64 {
        block_count / 100.0 * self.block_mortar_m3_per_100
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        MaterialCatalog::standard()
    }
}

/// The shared standard catalog.
pub static CATALOG: Lazy<MaterialCatalog> = Lazy::new(MaterialCatalog::standard);
