//! Wall, insulation, and finishing material vocabularies.
//!
//! Wall materials dispatch through [`WallFamily`]: all bricks share the
//! brick rule, all wood species share the volume rule, and so on. The
//! family of an unrecognized material is `Unknown`, which contributes no
//! quantities.

use serde::{Deserialize, Serialize};

use super::impl_wire_enum;

/// Formula family of a wall material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallFamily {
    /// Brick count + mortar
    Brick,
    /// Solid wood volume (m³)
    Wood,
    /// Concrete mixture + rebar (kg)
    Concrete,
    /// Block count + mortar
    Block,
    /// No quantity rule
    Unknown,
}

/// Load-bearing wall material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WallMaterial {
    Brick,
    // Wood family
    Timber,
    Log,
    Glulam,
    Clb,
    FrameWooden,
    // Concrete family
    ReinforcedConcrete,
    MonolithicConcrete,
    PorousConcrete,
    // Block family
    Gasblock,
    Foamblock,
    KeramsitBlock,
    CinderBlock,
    ArboliteBlock,
    /// Unrecognized wire value; family `Unknown`, no quantity rule
    Other(String),
}

impl WallMaterial {
    /// Wire string ("brick", "frameWooden", "keramsitBlock", ...)
    pub fn code(&self) -> &str {
        match self {
            WallMaterial::Brick => "brick",
            WallMaterial::Timber => "timber",
            WallMaterial::Log => "log",
            WallMaterial::Glulam => "glulam",
            WallMaterial::Clb => "clb",
            WallMaterial::FrameWooden => "frameWooden",
            WallMaterial::ReinforcedConcrete => "reinforcedConcrete",
            WallMaterial::MonolithicConcrete => "monolithicConcrete",
            WallMaterial::PorousConcrete => "porousConcrete",
            WallMaterial::Gasblock => "gasblock",
            WallMaterial::Foamblock => "foamblock",
            WallMaterial::KeramsitBlock => "keramsitBlock",
            WallMaterial::CinderBlock => "cinderBlock",
            WallMaterial::ArboliteBlock => "arboliteBlock",
            WallMaterial::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "brick" => WallMaterial::Brick,
            "timber" => WallMaterial::Timber,
            "log" => WallMaterial::Log,
            "glulam" => WallMaterial::Glulam,
            "clb" => WallMaterial::Clb,
            "frameWooden" => WallMaterial::FrameWooden,
            "reinforcedConcrete" => WallMaterial::ReinforcedConcrete,
            "monolithicConcrete" => WallMaterial::MonolithicConcrete,
            "porousConcrete" => WallMaterial::PorousConcrete,
            "gasblock" => WallMaterial::Gasblock,
            "foamblock" => WallMaterial::Foamblock,
            "keramsitBlock" => WallMaterial::KeramsitBlock,
            "cinderBlock" => WallMaterial::CinderBlock,
            "arboliteBlock" => WallMaterial::ArboliteBlock,
            other => WallMaterial::Other(other.to_string()),
        }
    }

    /// Which consumption rule this material uses
    pub fn family(&self) -> WallFamily {
        match self {
            WallMaterial::Brick => WallFamily::Brick,
            WallMaterial::Timber
            | WallMaterial::Log
            | WallMaterial::Glulam
            | WallMaterial::Clb
            | WallMaterial::FrameWooden => WallFamily::Wood,
            WallMaterial::ReinforcedConcrete
            | WallMaterial::MonolithicConcrete
            | WallMaterial::PorousConcrete => WallFamily::Concrete,
            WallMaterial::Gasblock
            | WallMaterial::Foamblock
            | WallMaterial::KeramsitBlock
            | WallMaterial::CinderBlock
            | WallMaterial::ArboliteBlock => WallFamily::Block,
            WallMaterial::Other(_) => WallFamily::Unknown,
        }
    }
}

impl_wire_enum!(WallMaterial);

/// Insulation layer material. Quantity is the wall's **net** area (gross
/// minus openings), merged per material across walls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Insulation {
    Mineral,
    Foam,
    Eco,
    ExtrudedPolystyrene,
    StoneWool,
    GlassWool,
    Polyurethane,
    Cellulose,
    Other(String),
}

impl Insulation {
    /// Wire string
    pub fn code(&self) -> &str {
        match self {
            Insulation::Mineral => "mineral",
            Insulation::Foam => "foam",
            Insulation::Eco => "eco",
            Insulation::ExtrudedPolystyrene => "extrudedPolystyrene",
            Insulation::StoneWool => "stoneWool",
            Insulation::GlassWool => "glassWool",
            Insulation::Polyurethane => "polyurethane",
            Insulation::Cellulose => "cellulose",
            Insulation::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "mineral" => Insulation::Mineral,
            "foam" => Insulation::Foam,
            "eco" => Insulation::Eco,
            "extrudedPolystyrene" => Insulation::ExtrudedPolystyrene,
            "stoneWool" => Insulation::StoneWool,
            "glassWool" => Insulation::GlassWool,
            "polyurethane" => Insulation::Polyurethane,
            "cellulose" => Insulation::Cellulose,
            other => Insulation::Other(other.to_string()),
        }
    }
}

impl_wire_enum!(Insulation);

/// Facade finishing material. Quantity is the wall's **gross** area
/// (length × height, openings not subtracted), deliberately distinct from
/// insulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Finishing {
    Siding,
    Plaster,
    DecorativePlaster,
    CompositePanels,
    NaturalStone,
    FacadePanels,
    BlockHouse,
    WoodenPanels,
    ThermoWood,
    ImitationTimber,
    Other(String),
}

impl Finishing {
    /// Wire string
    pub fn code(&self) -> &str {
        match self {
            Finishing::Siding => "siding",
            Finishing::Plaster => "plaster",
            Finishing::DecorativePlaster => "decorativePlaster",
            Finishing::CompositePanels => "compositePanels",
            Finishing::NaturalStone => "naturalStone",
            Finishing::FacadePanels => "facadePanels",
            Finishing::BlockHouse => "blockHouse",
            Finishing::WoodenPanels => "woodenPanels",
            Finishing::ThermoWood => "thermoWood",
            Finishing::ImitationTimber => "imitationTimber",
            Finishing::Other(code) => code,
        }
    }

    /// Parse from the wire string; anything unrecognized becomes `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "siding" => Finishing::Siding,
            "plaster" => Finishing::Plaster,
            "decorativePlaster" => Finishing::DecorativePlaster,
            "compositePanels" => Finishing::CompositePanels,
            "naturalStone" => Finishing::NaturalStone,
            "facadePanels" => Finishing::FacadePanels,
            "blockHouse" => Finishing::BlockHouse,
            "woodenPanels" => Finishing::WoodenPanels,
            "thermoWood" => Finishing::ThermoWood,
            "imitationTimber" => Finishing::ImitationTimber,
            other => Finishing::Other(other.to_string()),
        }
    }
}

impl_wire_enum!(Finishing);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_material_families() {
        assert_eq!(WallMaterial::Brick.family(), WallFamily::Brick);
        assert_eq!(WallMaterial::Log.family(), WallFamily::Wood);
        assert_eq!(WallMaterial::FrameWooden.family(), WallFamily::Wood);
        assert_eq!(WallMaterial::PorousConcrete.family(), WallFamily::Concrete);
        assert_eq!(WallMaterial::ArboliteBlock.family(), WallFamily::Block);
        assert_eq!(
            WallMaterial::Other("adobe".to_string()).family(),
            WallFamily::Unknown
        );
    }

    #[test]
    fn test_wall_material_wire_roundtrip() {
        for code in ["brick", "frameWooden", "monolithicConcrete", "keramsitBlock"] {
            let material = WallMaterial::from(code);
            assert!(material.family() != WallFamily::Unknown);
            assert_eq!(material.code(), code);
            let json = serde_json::to_string(&material).unwrap();
            assert_eq!(json, format!("\"{}\"", code));
        }
    }

    #[test]
    fn test_insulation_codes() {
        assert_eq!(Insulation::from("mineral"), Insulation::Mineral);
        assert_eq!(Insulation::ExtrudedPolystyrene.code(), "extrudedPolystyrene");
        assert_eq!(
            Insulation::from("hemp"),
            Insulation::Other("hemp".to_string())
        );
    }

    #[test]
    fn test_finishing_codes() {
        assert_eq!(Finishing::from("siding"), Finishing::Siding);
        assert_eq!(Finishing::DecorativePlaster.code(), "decorativePlaster");
    }
}
