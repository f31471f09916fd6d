//! Categorical selections recorded during an estimation pass.
//!
//! These are kept apart from the quantity line items: callers that only
//! want quantities ignore the record, callers that render a summary page
//! read it directly.

use serde::{Deserialize, Serialize};

use crate::materials::{
    BasementWallMaterial, FloorMaterial, FoundationType, HouseType, RoofMaterial, RoofType,
};

/// Which categorical choices a building spec made, as recorded by the
/// estimation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    /// House archetype the request was made for
    pub house_type: HouseType,

    /// Foundation construction type
    pub foundation_type: FoundationType,

    /// Present when the spec has a basement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basement: Option<BasementSelections>,

    /// Roof structural category
    pub roof_type: RoofType,

    /// Roof covering material, when chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_material: Option<RoofMaterial>,
}

/// Basement-specific selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasementSelections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_material: Option<BasementWallMaterial>,

    /// Set only when the spec asked for a basement floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_material: Option<FloorMaterial>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selections_serialization() {
        let selections = Selections {
            house_type: HouseType::Blocks,
            foundation_type: FoundationType::ReinforcedConcrete,
            basement: Some(BasementSelections {
                wall_material: Some(BasementWallMaterial::Gasblock),
                floor_material: None,
            }),
            roof_type: RoofType::Truss,
            roof_material: Some(RoofMaterial::MetalTile),
        };
        let json = serde_json::to_string(&selections).unwrap();
        assert!(json.contains("\"foundationType\":\"reinforced-concrete\""));
        assert!(json.contains("\"wallMaterial\":\"gasblock\""));
        let roundtrip: Selections = serde_json::from_str(&json).unwrap();
        assert_eq!(selections, roundtrip);
    }
}
