//! Roof vocabularies.
//!
//! The structural type is a pure selection (it never produces a quantity);
//! the covering material produces a single area line item.

use serde::{Deserialize, Serialize};

use super::impl_wire_enum;

/// Roof structural category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoofType {
    MetalFrame,
    Wooden,
    ReinforcedConcrete,
    Combined,
    Truss,
    Other(String),
}

impl RoofType {
    /// Wire string ("metalFrame", "truss", ...)
    pub fn code(&self) -> &str {
        match self {
            RoofType::MetalFrame => "metalFrame",
            RoofType::Wooden => "wooden",
            RoofType::ReinforcedConcrete => "reinforcedConcrete",
            RoofType::Combined => "combined",
            RoofType::Truss => "truss",
            RoofType::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "metalFrame" => RoofType::MetalFrame,
            "wooden" => RoofType::Wooden,
            "reinforcedConcrete" => RoofType::ReinforcedConcrete,
            "combined" => RoofType::Combined,
            "truss" => RoofType::Truss,
            other => RoofType::Other(other.to_string()),
        }
    }
}

impl_wire_enum!(RoofType);

/// Roof covering material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoofMaterial {
    Metal,
    Shingles,
    MetalTile,
    MetalSheets,
    CeramicTile,
    BitumenTile,
    CompositeShingles,
    Slate,
    WoodenShingles,
    GreenRoof,
    Polycarbonate,
    Other(String),
}

impl RoofMaterial {
    /// Wire string
    pub fn code(&self) -> &str {
        match self {
            RoofMaterial::Metal => "metal",
            RoofMaterial::Shingles => "shingles",
            RoofMaterial::MetalTile => "metalTile",
            RoofMaterial::MetalSheets => "metalSheets",
            RoofMaterial::CeramicTile => "ceramicTile",
            RoofMaterial::BitumenTile => "bitumenTile",
            RoofMaterial::CompositeShingles => "compositeShingles",
            RoofMaterial::Slate => "slate",
            RoofMaterial::WoodenShingles => "woodenShingles",
            RoofMaterial::GreenRoof => "greenRoof",
            RoofMaterial::Polycarbonate => "polycarbonate",
            RoofMaterial::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "metal" => RoofMaterial::Metal,
            "shingles" => RoofMaterial::Shingles,
            "metalTile" => RoofMaterial::MetalTile,
            "metalSheets" => RoofMaterial::MetalSheets,
            "ceramicTile" => RoofMaterial::CeramicTile,
            "bitumenTile" => RoofMaterial::BitumenTile,
            "compositeShingles" => RoofMaterial::CompositeShingles,
            "slate" => RoofMaterial::Slate,
            "woodenShingles" => RoofMaterial::WoodenShingles,
            "greenRoof" => RoofMaterial::GreenRoof,
            "polycarbonate" => RoofMaterial::Polycarbonate,
            other => RoofMaterial::Other(other.to_string()),
        }
    }
}

impl_wire_enum!(RoofMaterial);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roof_type_wire_roundtrip() {
        let parsed: RoofType = serde_json::from_str("\"metalFrame\"").unwrap();
        assert_eq!(parsed, RoofType::MetalFrame);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"metalFrame\"");
    }

    #[test]
    fn test_roof_material_fallback() {
        let odd = RoofMaterial::from("thatch");
        assert_eq!(odd, RoofMaterial::Other("thatch".to_string()));
        assert_eq!(odd.code(), "thatch");
    }
}
