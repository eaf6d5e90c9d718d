//! # geo_core - Geotechnical Foundation Calculation Engine
//!
//! `geo_core` is the computational heart of Bedrock, providing foundation
//! design calculations with a clean, LLM-friendly API. All inputs and outputs
//! are JSON-serializable, making it ideal for integration with AI assistants
//! via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Safety Factors**: Callers always supply the factor of safety
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_core::calculations::{DesignSettings, FoundationCalculation, ShallowInput};
//! use geo_core::soils::SoilProperties;
//!
//! let calc = FoundationCalculation::Shallow(ShallowInput {
//!     label: "F-1".to_string(),
//!     width_m: 2.0,
//!     length_m: 2.0,
//!     depth_m: 1.0,
//!     applied_load_kn: 1000.0,
//!     soil: SoilProperties {
//!         unit_weight_kn_m3: 18.0,
//!         cohesion_kpa: 50.0,
//!         friction_angle_deg: 0.0,
//!     },
//! });
//!
//! let result = calc.run(&DesignSettings::recommended()).unwrap();
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Units
//!
//! SI throughout, fixed and not negotiated: meters, kilonewtons,
//! kilopascals, kN/m³, degrees.
//!
//! ## Modules
//!
//! - [`calculations`] - All foundation calculation types (footings, piles, walls)
//! - [`factors`] - Shared Terzaghi bearing-capacity factors
//! - [`soils`] - Soil property records and classification presets
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod factors;
pub mod soils;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    DesignSettings, FoundationCalculation, FoundationResult, SafetyMargin,
};
pub use errors::{CalcError, CalcResult};
pub use factors::BearingCapacityFactors;
pub use soils::{SoilClass, SoilProperties};
