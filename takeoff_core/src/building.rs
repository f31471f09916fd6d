//! # Building Specification
//!
//! The engine's sole input: a [`BuildingSpec`] describing the foundation,
//! the walls with their openings, and the roof. Constructed fresh per
//! calculation request from form input and discarded after producing the
//! line items; the engine holds no state across calls.
//!
//! ## Wire Format
//!
//! Field names follow the web application's camelCase JSON, so a request
//! body stored by the persistence layer deserializes here unchanged:
//!
//! ```json
//! {
//!   "houseType": "brick",
//!   "foundation": {
//!     "width": 10.0, "depth": 1.5, "length": 8.0,
//!     "type": "reinforced-concrete",
//!     "hasBasement": false, "hasBasementFloor": false
//!   },
//!   "walls": [
//!     {
//!       "width": 1.0, "length": 5.0, "height": 2.5,
//!       "material": "brick", "insulation": "mineral",
//!       "openings": [{ "type": "window", "width": 1.0, "height": 1.0 }]
//!     }
//!   ],
//!   "roof": { "type": "metalFrame", "material": "metal", "length": 12.0, "width": 8.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};
use crate::estimate::sanitize_dimension;
use crate::materials::{
    BasementWallMaterial, Finishing, FloorMaterial, FoundationType, HouseType, Insulation,
    RoofMaterial, RoofType, WallMaterial,
};

/// Foundation section of a building spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Foundation {
    /// Foundation width in meters
    pub width: f64,
    /// Foundation depth in meters
    pub depth: f64,
    /// Foundation length in meters
    pub length: f64,

    /// Construction type
    #[serde(rename = "type")]
    pub foundation_type: FoundationType,

    /// Optional plinth finishing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishing: Option<Finishing>,

    /// Whether the house has a basement
    pub has_basement: bool,
    /// Whether the basement has a poured/laid floor
    pub has_basement_floor: bool,

    /// Basement floor material, when `has_basement_floor`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_material: Option<FloorMaterial>,

    /// Basement wall material, when `has_basement`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_material: Option<BasementWallMaterial>,
}

/// A door or window cut into a wall, reducing its net material-bearing area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Kind of opening
    #[serde(rename = "type")]
    pub kind: OpeningKind,
    /// Opening width in meters
    pub width: f64,
    /// Opening height in meters
    pub height: f64,
}

impl Opening {
    /// Area of this opening in m². Non-finite or negative dimensions count
    /// as zero.
    pub fn area_m2(&self) -> f64 {
        sanitize_dimension(self.width) * sanitize_dimension(self.height)
    }
}

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// One wall of the building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    /// Thickness multiplier in masonry-unit widths (e.g. 1.5 for a
    /// brick-and-a-half wall), not a linear dimension. Only the brick and
    /// block rules use it.
    pub width: f64,
    /// Wall length in meters
    pub length: f64,
    /// Wall height in meters
    pub height: f64,

    /// Load-bearing material
    pub material: WallMaterial,

    /// Insulation layer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation: Option<Insulation>,

    /// Facade finishing, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finishing: Option<Finishing>,

    /// Doors and windows in this wall
    #[serde(default)]
    pub openings: Vec<Opening>,
}

impl Wall {
    /// Gross face area (length × height), openings not subtracted.
    /// Non-finite or negative dimensions count as zero.
    pub fn gross_area_m2(&self) -> f64 {
        sanitize_dimension(self.length) * sanitize_dimension(self.height)
    }

    /// Combined area of all openings
    pub fn openings_area_m2(&self) -> f64 {
        self.openings.iter().map(Opening::area_m2).sum()
    }
}

/// Roof section of a building spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roof {
    /// Structural category
    #[serde(rename = "type")]
    pub roof_type: RoofType,

    /// Covering material; without it the roof contributes no quantities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<RoofMaterial>,

    /// Roof slope length in meters
    pub length: f64,
    /// Roof width in meters
    pub width: f64,
}

/// Complete geometry and material description of one house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub foundation: Foundation,
    pub walls: Vec<Wall>,
    pub roof: Roof,
}

impl BuildingSpec {
    /// Caller-side schema validation: every dimension must be finite and
    /// non-negative, and at least one wall must be present.
    ///
    /// The engine itself never panics on bad numbers (it degrades them to
    /// zero contribution) and will happily estimate a wall-less spec, so
    /// this check is for request handlers that want to reject malformed
    /// bodies with a 400 instead of returning a partially zeroed estimate.
    pub fn validate(&self) -> EstimateResult<()> {
        check_dimension("foundation.width", self.foundation.width)?;
        check_dimension("foundation.depth", self.foundation.depth)?;
        check_dimension("foundation.length", self.foundation.length)?;

        if self.walls.is_empty() {
            return Err(EstimateError::missing_field("walls"));
        }
        for (i, wall) in self.walls.iter().enumerate() {
            check_dimension(&format!("walls[{}].width", i), wall.width)?;
            check_dimension(&format!("walls[{}].length", i), wall.length)?;
            check_dimension(&format!("walls[{}].height", i), wall.height)?;
            for (j, opening) in wall.openings.iter().enumerate() {
                check_dimension(&format!("walls[{}].openings[{}].width", i, j), opening.width)?;
                check_dimension(
                    &format!("walls[{}].openings[{}].height", i, j),
                    opening.height,
                )?;
            }
        }

        check_dimension("roof.length", self.roof.length)?;
        check_dimension("roof.width", self.roof.width)?;
        Ok(())
    }
}

fn check_dimension(field: &str, value: f64) -> EstimateResult<()> {
    if !value.is_finite() {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Dimension must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            "Dimension cannot be negative",
        ));
    }
    Ok(())
}

/// The JSON body a calculation endpoint accepts: house archetype plus
/// building sections, flattened into one top-level object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub house_type: HouseType,
    #[serde(flatten)]
    pub spec: BuildingSpec,
}

impl CalculationRequest {
    /// Parse a request body. Structural problems (missing sections, wrong
    /// types) surface as [`EstimateError::InvalidSpec`].
    pub fn from_json(body: &str) -> EstimateResult<Self> {
        serde_json::from_str(body).map_err(|e| EstimateError::invalid_spec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_spec() -> BuildingSpec {
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
    fn test_wall_areas() {
        let spec = minimal_spec();
        let wall = &spec.walls[0];
        assert_eq!(wall.gross_area_m2(), 12.5);
        assert_eq!(wall.openings_area_m2(), 1.0);
    }

    #[test]
    fn test_validate_accepts_good_spec() {
        assert!(minimal_spec().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_dimension() {
        let mut spec = minimal_spec();
        spec.walls[0].height = -2.5;
        let err = spec.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_validate_rejects_empty_walls() {
        let mut spec = minimal_spec();
        spec.walls.clear();
        let err = spec.validate().unwrap_err();
        assert_eq!(err, EstimateError::missing_field("walls"));
    }

    #[test]
    fn test_wall_areas_treat_bad_dimensions_as_zero() {
        let mut spec = minimal_spec();
        spec.walls[0].length = f64::NAN;
        assert_eq!(spec.walls[0].gross_area_m2(), 0.0);
        spec.walls[0].openings[0].width = -1.0;
        assert_eq!(spec.walls[0].openings_area_m2(), 0.0);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut spec = minimal_spec();
        spec.foundation.depth = f64::NAN;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_wire_roundtrip_camel_case() {
        let spec = minimal_spec();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"hasBasement\":false"));
        assert!(json.contains("\"type\":\"reinforced-concrete\""));
        assert!(json.contains("\"type\":\"window\""));
        let roundtrip: BuildingSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }

    #[test]
    fn test_request_from_json() {
        let body = r#"{
            "houseType": "brick",
            "foundation": {
                "width": 6.0, "depth": 1.0, "length": 8.0,
                "type": "reinforced-concrete",
                "hasBasement": false, "hasBasementFloor": false
            },
            "walls": [],
            "roof": { "type": "truss", "material": "slate", "length": 7.0, "width": 9.0 }
        }"#;
        let request = CalculationRequest::from_json(body).unwrap();
        assert_eq!(request.house_type, HouseType::Brick);
        assert_eq!(request.spec.roof.material, Some(RoofMaterial::Slate));
    }

    #[test]
    fn test_request_missing_section_is_invalid_spec() {
        let body = r#"{ "houseType": "brick", "walls": [] }"#;
        let err = CalculationRequest::from_json(body).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SPEC");
    }

    #[test]
    fn test_openings_default_to_empty() {
        let json = r#"{
            "width": 1.0, "length": 4.0, "height": 2.5,
            "material": "timber", "insulation": "mineral"
        }"#;
        let wall: Wall = serde_json::from_str(json).unwrap();
        assert!(wall.openings.is_empty());
        assert_eq!(wall.material, WallMaterial::Timber);
    }
}
