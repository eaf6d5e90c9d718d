//! # Retaining Wall Calculation
//!
//! Rankine active/passive earth pressure coefficients and the resultant
//! active force on the wall with its line of action.
//!
//! ## Assumptions
//!
//! - Rankine conditions: vertical wall back, horizontal backfill, wall
//!   free to yield away from the retained soil
//! - Granular wedge: cohesion in the soil record is accepted but not used
//!   by the active-force formula
//! - Uniform surcharge on the retained surface
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use geo_core::calculations::wall::{self, WallInput};
//! use geo_core::soils::SoilProperties;
//!
//! let input = WallInput {
//!     label: "W-1".to_string(),
//!     height_m: 5.0,
//!     thickness_m: 0.4,
//!     surcharge_kpa: 0.0,
//!     soil: SoilProperties {
//!         unit_weight_kn_m3: 18.0,
//!         cohesion_kpa: 0.0,
//!         friction_angle_deg: 30.0,
//!     },
//! };
//!
//! let result = wall::calculate(&input).unwrap();
//!
//! // Fa = 0.5·Ka·γ·H² ≈ 75 kN/m acting at H/3
//! assert!((result.total_force_kn_m - 75.0).abs() < 1.0);
//! assert!((result.location_from_base_m - 5.0 / 3.0).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::soils::SoilProperties;
use crate::units::Degrees;

/// Rankine active earth pressure coefficient Ka = tan²(45° − φ/2).
pub fn active_pressure_coefficient(friction_angle_deg: f64) -> f64 {
    Degrees(45.0 - friction_angle_deg / 2.0).tan().powi(2)
}

/// Rankine passive earth pressure coefficient Kp = tan²(45° + φ/2).
///
/// Reciprocal of [`active_pressure_coefficient`] by construction:
/// Ka·Kp = 1.
pub fn passive_pressure_coefficient(friction_angle_deg: f64) -> f64 {
    Degrees(45.0 + friction_angle_deg / 2.0).tan().powi(2)
}

/// Input parameters for a retaining wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "height_m": 5.0,
///   "thickness_m": 0.4,
///   "surcharge_kpa": 10.0,
///   "soil": {
///     "unit_weight_kn_m3": 18.0,
///     "cohesion_kpa": 0.0,
///     "friction_angle_deg": 30.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallInput {
    /// User label for this wall (e.g., "W-1", "North basement wall")
    pub label: String,

    /// Retained height H in meters
    pub height_m: f64,

    /// Wall stem thickness in meters
    pub thickness_m: f64,

    /// Uniform surcharge q on the retained surface (kPa)
    pub surcharge_kpa: f64,

    /// Retained soil properties
    pub soil: SoilProperties,
}

impl WallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "height_m",
                self.height_m.to_string(),
                "Height must be positive",
            ));
        }
        if self.thickness_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "thickness_m",
                self.thickness_m.to_string(),
                "Thickness must be positive",
            ));
        }
        if self.surcharge_kpa < 0.0 {
            return Err(CalcError::invalid_geometry(
                "surcharge_kpa",
                self.surcharge_kpa.to_string(),
                "Surcharge cannot be negative",
            ));
        }
        self.soil.validate()
    }
}

/// Results from a retaining wall calculation.
///
/// Forces are per meter run of wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "ka": 0.333,
///   "kp": 3.0,
///   "soil_force_kn_m": 75.0,
///   "surcharge_force_kn_m": 16.7,
///   "total_force_kn_m": 91.7,
///   "location_from_base_m": 1.82,
///   "base_pressure_kpa": 30.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallResult {
    /// Active earth pressure coefficient Ka
    pub ka: f64,

    /// Passive earth pressure coefficient Kp
    pub kp: f64,

    /// Triangular soil component Fa_soil = 0.5·Ka·γ·H² (kN/m), acting at H/3
    pub soil_force_kn_m: f64,

    /// Rectangular surcharge component Fa_q = Ka·q·H (kN/m), acting at H/2
    pub surcharge_force_kn_m: f64,

    /// Total active force Fa = Fa_soil + Fa_q (kN/m)
    pub total_force_kn_m: f64,

    /// Height of the resultant above the wall base (m), the
    /// moment-weighted centroid of the two components
    pub location_from_base_m: f64,

    /// Active soil pressure at the wall base Ka·γ·H (kPa)
    pub base_pressure_kpa: f64,
}

/// Calculate the resultant active force on a retaining wall.
///
/// # Arguments
///
/// * `input` - Wall geometry, surcharge, and retained soil record
///
/// # Returns
///
/// * `Ok(WallResult)` - Coefficients, force components, and line of action
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &WallInput) -> CalcResult<WallResult> {
    input.validate()?;

    let soil = &input.soil;
    let h = input.height_m;

    let ka = active_pressure_coefficient(soil.friction_angle_deg);
    let kp = passive_pressure_coefficient(soil.friction_angle_deg);

    let base_pressure_kpa = ka * soil.unit_weight_kn_m3 * h;

    // Triangular soil wedge and rectangular surcharge block
    let soil_force = 0.5 * base_pressure_kpa * h;
    let surcharge_force = ka * input.surcharge_kpa * h;
    let total_force = soil_force + surcharge_force;

    // Moment-weighted centroid; the soil term keeps total_force positive
    // for every valid input, so the quotient is defined
    let location_from_base_m =
        (soil_force * h / 3.0 + surcharge_force * h / 2.0) / total_force;

    Ok(WallResult {
        ka,
        kp,
        soil_force_kn_m: soil_force,
        surcharge_force_kn_m: surcharge_force,
        total_force_kn_m: total_force,
        location_from_base_m,
        base_pressure_kpa,
    })
}
