//! # takeoff_core - Building-Material Quantity Estimation Engine
//!
//! `takeoff_core` is the computational heart of Takeoff: it turns a
//! structured description of a house (foundation, walls with openings,
//! roof) into a list of material line items: what to buy, how much, in
//! which unit. All inputs and outputs are JSON-serializable and match the
//! wire shape of the surrounding web application.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `estimate` is a pure function; same spec, same result
//! - **JSON-First**: every type implements Serialize/Deserialize
//! - **Typed vocabulary**: material categories are closed enums with an
//!   explicit fallback, not free-form strings
//! - **Explicit merging**: duplicate `(material, unit)` contributions sum
//!   through an accumulator, never a list scan
//!
//! ## Quick Start
//!
//! ```rust
//! use takeoff_core::building::CalculationRequest;
//! use takeoff_core::estimate::estimate;
//!
//! let request = CalculationRequest::from_json(r#"{
//!     "houseType": "brick",
//!     "foundation": {
//!         "width": 10.0, "depth": 1.5, "length": 8.0,
//!         "type": "reinforced-concrete",
//!         "hasBasement": false, "hasBasementFloor": false
//!     },
//!     "walls": [],
//!     "roof": { "type": "metalFrame", "material": "metal", "length": 12.0, "width": 8.0 }
//! }"#).unwrap();
//!
//! for item in estimate(request.house_type, &request.spec) {
//!     println!("{} {} {}", item.material, item.quantity, item.unit);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`building`] - The `BuildingSpec` input document and request shape
//! - [`estimate`] - The estimation engine and its options
//! - [`materials`] - Material and category vocabularies
//! - [`catalog`] - Consumption rates and standard dimensions
//! - [`units`] - Units of measure and the `LineItem` result row
//! - [`history`] - Saved-calculation record shape
//! - [`errors`] - Structured error types

pub mod building;
pub mod catalog;
pub mod errors;
pub mod estimate;
pub mod history;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use building::{BuildingSpec, CalculationRequest};
pub use errors::{EstimateError, EstimateResult};
pub use estimate::{estimate, estimate_with, Estimate, EstimateOptions, Selections};
pub use materials::HouseType;
pub use units::{LineItem, Unit};
