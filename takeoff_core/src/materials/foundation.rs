//! Foundation and basement material vocabularies.
//!
//! Only reinforced concrete has a compound rule (concrete mixture plus
//! rebar); every other foundation type produces a single volume line item
//! labeled `"<code>-foundation"`.

use serde::{Deserialize, Serialize};

use super::impl_wire_enum;

/// Foundation construction type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FoundationType {
    /// Poured reinforced concrete, expands to concrete mixture + rebar
    ReinforcedConcrete,
    Gasblock,
    Foamblock,
    Rubble,
    /// Unrecognized wire value, kept verbatim for labeling
    Other(String),
}

impl FoundationType {
    /// Wire string ("reinforced-concrete", "gasblock", ...)
    pub fn code(&self) -> &str {
        match self {
            FoundationType::ReinforcedConcrete => "reinforced-concrete",
            FoundationType::Gasblock => "gasblock",
            FoundationType::Foamblock => "foamblock",
            FoundationType::Rubble => "rubble",
            FoundationType::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "reinforced-concrete" => FoundationType::ReinforcedConcrete,
            "gasblock" => FoundationType::Gasblock,
            "foamblock" => FoundationType::Foamblock,
            "rubble" => FoundationType::Rubble,
            other => FoundationType::Other(other.to_string()),
        }
    }

    /// Whether this value matched a known variant
    pub fn is_recognized(&self) -> bool {
        !matches!(self, FoundationType::Other(_))
    }
}

impl_wire_enum!(FoundationType);

/// Material of the basement walls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BasementWallMaterial {
    ReinforcedConcrete,
    Brick,
    Gasblock,
    Foamblock,
    Wood,
    /// Unrecognized wire value; recorded as a selection, no quantity rule
    Other(String),
}

impl BasementWallMaterial {
    /// Wire string
    pub fn code(&self) -> &str {
        match self {
            BasementWallMaterial::ReinforcedConcrete => "reinforced-concrete",
            BasementWallMaterial::Brick => "brick",
            BasementWallMaterial::Gasblock => "gasblock",
            BasementWallMaterial::Foamblock => "foamblock",
            BasementWallMaterial::Wood => "wood",
            BasementWallMaterial::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "reinforced-concrete" => BasementWallMaterial::ReinforcedConcrete,
            "brick" => BasementWallMaterial::Brick,
            "gasblock" => BasementWallMaterial::Gasblock,
            "foamblock" => BasementWallMaterial::Foamblock,
            "wood" => BasementWallMaterial::Wood,
            other => BasementWallMaterial::Other(other.to_string()),
        }
    }

    /// Whether this value matched a known variant
    pub fn is_recognized(&self) -> bool {
        !matches!(self, BasementWallMaterial::Other(_))
    }
}

impl_wire_enum!(BasementWallMaterial);

/// Material of the basement floor slab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FloorMaterial {
    /// Poured slab, expands to concrete mixture + rebar
    ReinforcedConcrete,
    Wood,
    Boards,
    /// Unrecognized wire value; labeled as `basement-floor-<code>`
    Other(String),
}

impl FloorMaterial {
    /// Wire string
    pub fn code(&self) -> &str {
        match self {
            FloorMaterial::ReinforcedConcrete => "reinforced-concrete",
            FloorMaterial::Wood => "wood",
            FloorMaterial::Boards => "boards",
            FloorMaterial::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "reinforced-concrete" => FloorMaterial::ReinforcedConcrete,
            "wood" => FloorMaterial::Wood,
            "boards" => FloorMaterial::Boards,
            other => FloorMaterial::Other(other.to_string()),
        }
    }
}

impl_wire_enum!(FloorMaterial);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foundation_type_wire_roundtrip() {
        let rc: FoundationType = serde_json::from_str("\"reinforced-concrete\"").unwrap();
        assert_eq!(rc, FoundationType::ReinforcedConcrete);
        assert_eq!(serde_json::to_string(&rc).unwrap(), "\"reinforced-concrete\"");
    }

    #[test]
    fn test_unknown_foundation_type_falls_back() {
        let odd: FoundationType = serde_json::from_str("\"stilts\"").unwrap();
        assert_eq!(odd, FoundationType::Other("stilts".to_string()));
        assert!(!odd.is_recognized());
        // Fallback round-trips the original string
        assert_eq!(serde_json::to_string(&odd).unwrap(), "\"stilts\"");
    }

    #[test]
    fn test_basement_wall_material_codes() {
        assert_eq!(BasementWallMaterial::from("wood"), BasementWallMaterial::Wood);
        assert_eq!(BasementWallMaterial::Gasblock.code(), "gasblock");
    }

    #[test]
    fn test_floor_material_codes() {
        assert_eq!(
            FloorMaterial::from("boards".to_string()),
            FloorMaterial::Boards
        );
        assert_eq!(FloorMaterial::ReinforcedConcrete.to_string(), "reinforced-concrete");
    }
}
