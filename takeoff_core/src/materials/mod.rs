//! # Material Vocabulary
//!
//! Closed enums for every material and category choice the calculation form
//! offers, one enum per domain. The web client submits these as plain
//! strings; here each domain is a tagged enum with an explicit
//! `Other(String)` fallback, so an unrecognized wire value is visible in
//! tests instead of silently contributing nothing.
//!
//! ## Wire Format
//!
//! Every enum serializes to and from the form's wire string
//! (`"reinforced-concrete"`, `"keramsitBlock"`, ...). Unknown strings
//! deserialize to the `Other` variant and round-trip unchanged.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::materials::{WallFamily, WallMaterial};
//!
//! let material = WallMaterial::from("keramsitBlock");
//! assert_eq!(material.family(), WallFamily::Block);
//!
//! let odd = WallMaterial::from("adobe");
//! assert_eq!(odd, WallMaterial::Other("adobe".to_string()));
//! assert_eq!(odd.family(), WallFamily::Unknown);
//! ```

pub mod foundation;
pub mod roof;
pub mod walls;

pub use foundation::{BasementWallMaterial, FloorMaterial, FoundationType};
pub use roof::{RoofMaterial, RoofType};
pub use walls::{Finishing, Insulation, WallFamily, WallMaterial};

use serde::{Deserialize, Serialize};

/// Implements the string-conversion plumbing shared by all wire enums:
/// `From<String>`/`From<&str>` (for serde `from`), `From<T> for String`
/// (for serde `into`), and `Display` via `code()`.
macro_rules! impl_wire_enum {
    ($type:ty) => {
        impl From<String> for $type {
            fn from(s: String) -> Self {
                Self::from_code(&s)
            }
        }

        impl From<&str> for $type {
            fn from(s: &str) -> Self {
                Self::from_code(s)
            }
        }

        impl From<$type> for String {
            fn from(value: $type) -> String {
                value.code().to_string()
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

pub(crate) use impl_wire_enum;

/// House archetype selected on the first step of the calculation form.
///
/// A closed enum with no fallback; the request schema rejects anything
/// else at the boundary. The archetype constrains which wall materials the
/// form offers; it does not drive any formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseType {
    Brick,
    Wooden,
    Concrete,
    Blocks,
}

impl HouseType {
    /// All house types for UI selection
    pub const ALL: [HouseType; 4] = [
        HouseType::Brick,
        HouseType::Wooden,
        HouseType::Concrete,
        HouseType::Blocks,
    ];

    /// Wire string ("brick", "wooden", "concrete", "blocks")
    pub fn code(&self) -> &'static str {
        match self {
            HouseType::Brick => "brick",
            HouseType::Wooden => "wooden",
            HouseType::Concrete => "concrete",
            HouseType::Blocks => "blocks",
        }
    }

    /// Wall materials the calculation form offers for this archetype.
    pub fn wall_materials(&self) -> &'static [WallMaterial] {
        match self {
            HouseType::Brick => &[WallMaterial::Brick],
            HouseType::Wooden => &[
                WallMaterial::Timber,
                WallMaterial::Log,
                WallMaterial::Glulam,
                WallMaterial::Clb,
                WallMaterial::FrameWooden,
            ],
            HouseType::Concrete => &[
                WallMaterial::ReinforcedConcrete,
                WallMaterial::MonolithicConcrete,
                WallMaterial::PorousConcrete,
            ],
            HouseType::Blocks => &[
                WallMaterial::Gasblock,
                WallMaterial::Foamblock,
                WallMaterial::KeramsitBlock,
                WallMaterial::CinderBlock,
                WallMaterial::ArboliteBlock,
            ],
        }
    }
}

impl std::fmt::Display for HouseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_type_serialization() {
        let json = serde_json::to_string(&HouseType::Blocks).unwrap();
        assert_eq!(json, "\"blocks\"");

        let parsed: HouseType = serde_json::from_str("\"wooden\"").unwrap();
        assert_eq!(parsed, HouseType::Wooden);
    }

    #[test]
    fn test_house_type_rejects_unknown() {
        assert!(serde_json::from_str::<HouseType>("\"straw\"").is_err());
    }

    #[test]
    fn test_wall_materials_per_archetype() {
        assert_eq!(HouseType::Brick.wall_materials(), &[WallMaterial::Brick]);
        assert!(HouseType::Wooden
            .wall_materials()
            .iter()
            .all(|m| m.family() == WallFamily::Wood));
        assert!(HouseType::Blocks
            .wall_materials()
            .iter()
            .all(|m| m.family() == WallFamily::Block));
    }
}
