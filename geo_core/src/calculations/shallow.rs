//! # Shallow Foundation Calculation
//!
//! Terzaghi bearing capacity for rectangular spread footings.
//!
//! ## Assumptions
//!
//! - General shear failure, strip/rectangular footing
//! - No shape, depth, or inclination correction factors (deliberate
//!   simplification; the classical three-term Terzaghi equation only)
//! - Homogeneous soil, groundwater not considered
//! - Concentric vertical load
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use geo_core::calculations::shallow::{self, ShallowInput, RECOMMENDED_FOS};
//! use geo_core::soils::SoilProperties;
//!
//! let input = ShallowInput {
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
//! };
//!
//! let result = shallow::calculate(&input, RECOMMENDED_FOS).unwrap();
//!
//! println!("qu = {:.1} kPa", result.ultimate_capacity_kpa);
//! println!("qa = {:.1} kPa", result.allowable_capacity_kpa);
//! println!("Adequate: {}", result.safety_margin.is_adequate());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{validate_fos, SafetyMargin};
use crate::errors::{CalcError, CalcResult};
use crate::factors::BearingCapacityFactors;
use crate::soils::SoilProperties;

/// Standard factor of safety for bearing capacity.
///
/// Callers pass the factor explicitly at every call site; this constant is
/// the conventional value, not an implicit default.
pub const RECOMMENDED_FOS: f64 = 3.0;

/// Input parameters for a rectangular spread footing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "width_m": 2.0,
///   "length_m": 2.0,
///   "depth_m": 1.0,
///   "applied_load_kn": 1000.0,
///   "soil": {
///     "unit_weight_kn_m3": 18.0,
///     "cohesion_kpa": 50.0,
///     "friction_angle_deg": 0.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShallowInput {
    /// User label for this footing (e.g., "F-1", "Footing at Grid B2")
    pub label: String,

    /// Footing width B in meters (the bearing-capacity dimension)
    pub width_m: f64,

    /// Footing length L in meters
    pub length_m: f64,

    /// Founding depth Df in meters below grade
    pub depth_m: f64,

    /// Applied vertical load Q in kilonewtons
    pub applied_load_kn: f64,

    /// Soil properties at founding level
    pub soil: SoilProperties,
}

impl ShallowInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "width_m",
                self.width_m.to_string(),
                "Width must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.depth_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "depth_m",
                self.depth_m.to_string(),
                "Depth must be positive",
            ));
        }
        if self.applied_load_kn < 0.0 {
            return Err(CalcError::invalid_geometry(
                "applied_load_kn",
                self.applied_load_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        self.soil.validate()
    }

    /// Bearing area A = B·L (m²)
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }

    /// Applied pressure q = Q / (B·L) (kPa)
    pub fn applied_pressure_kpa(&self) -> f64 {
        self.applied_load_kn / self.area_m2()
    }
}

/// Results from a shallow foundation calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "factors": { "nc": 5.14, "nq": 1.0, "ngamma": 0.0 },
///   "ultimate_capacity_kpa": 275.0,
///   "allowable_capacity_kpa": 91.67,
///   "applied_pressure_kpa": 250.0,
///   "factor_of_safety": 3.0,
///   "safety_margin": { "kind": "Factor", "value": 0.37 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShallowResult {
    /// Terzaghi bearing capacity factors used
    pub factors: BearingCapacityFactors,

    /// Ultimate bearing capacity qu = c·Nc + γ·Df·Nq + 0.5·γ·B·Nγ (kPa)
    pub ultimate_capacity_kpa: f64,

    /// Allowable bearing capacity qa = qu / FOS (kPa)
    pub allowable_capacity_kpa: f64,

    /// Applied pressure q = Q / (B·L) (kPa)
    pub applied_pressure_kpa: f64,

    /// Factor of safety that produced `allowable_capacity_kpa`
    pub factor_of_safety: f64,

    /// Margin of allowable capacity over applied pressure
    pub safety_margin: SafetyMargin,
}

/// Calculate bearing capacity and safety margin for a spread footing.
///
/// # Arguments
///
/// * `input` - Footing geometry, load, and soil record
/// * `factor_of_safety` - Divisor applied to the ultimate capacity
///   (conventionally [`RECOMMENDED_FOS`]); must be positive
///
/// # Returns
///
/// * `Ok(ShallowResult)` - Capacities, applied pressure, and margin
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &ShallowInput, factor_of_safety: f64) -> CalcResult<ShallowResult> {
    input.validate()?;
    validate_fos(factor_of_safety)?;

    let soil = &input.soil;
    let factors = BearingCapacityFactors::for_friction_angle(soil.friction_angle_deg);

    // Terzaghi: qu = c·Nc + γ·Df·Nq + 0.5·γ·B·Nγ
    let ultimate_capacity_kpa = soil.cohesion_kpa * factors.nc
        + soil.unit_weight_kn_m3 * input.depth_m * factors.nq
        + 0.5 * soil.unit_weight_kn_m3 * input.width_m * factors.ngamma;

    let allowable_capacity_kpa = ultimate_capacity_kpa / factor_of_safety;
    let applied_pressure_kpa = input.applied_pressure_kpa();

    Ok(ShallowResult {
        factors,
        ultimate_capacity_kpa,
        allowable_capacity_kpa,
        applied_pressure_kpa,
        factor_of_safety,
        safety_margin: SafetyMargin::from_capacity_demand(
            allowable_capacity_kpa,
            applied_pressure_kpa,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// B=L=2m, Df=1m footing on the cohesive test soil (φ=0)
    fn test_footing() -> ShallowInput {
        ShallowInput {
            label: "Test Footing".to_string(),
            width_m: 2.0,
            length_m: 2.0,
            depth_m: 1.0,
            applied_load_kn: 1000.0,
            soil: SoilProperties {
                unit_weight_kn_m3: 18.0,
                cohesion_kpa: 50.0,
                friction_angle_deg: 0.0,
            },
        }
    }

    #[test]
    fn test_pure_cohesion_capacity() {
        let result = calculate(&test_footing(), RECOMMENDED_FOS).unwrap();

        // qu = c·Nc + γ·Df·Nq + 0 = 50·5.14 + 18·1·1 = 275 kPa
        assert!((result.ultimate_capacity_kpa - 275.0).abs() < 1.0);
    }

    #[test]
    fn test_cohesionless_capacity() {
        let mut input = test_footing();
        input.soil.cohesion_kpa = 0.0;
        input.soil.friction_angle_deg = 30.0;
        let result = calculate(&input, RECOMMENDED_FOS).unwrap();

        // qu = 18·1·18.4 + 0.5·18·2·22.4 ≈ 734 kPa
        assert!(result.ultimate_capacity_kpa > 700.0);
        assert!(result.ultimate_capacity_kpa < 800.0);
    }

    #[test]
    fn test_allowable_is_ultimate_over_fos() {
        let result = calculate(&test_footing(), RECOMMENDED_FOS).unwrap();
        let expected = result.ultimate_capacity_kpa / 3.0;
        assert!((result.allowable_capacity_kpa - expected).abs() < 1e-12);
    }

    #[test]
    fn test_applied_pressure() {
        // 1000 kN over 2m × 2m = 250 kPa exactly
        let result = calculate(&test_footing(), RECOMMENDED_FOS).unwrap();
        assert_eq!(result.applied_pressure_kpa, 250.0);
    }

    #[test]
    fn test_zero_load_gives_unbounded_margin() {
        let mut input = test_footing();
        input.applied_load_kn = 0.0;
        let result = calculate(&input, RECOMMENDED_FOS).unwrap();
        assert_eq!(result.safety_margin, SafetyMargin::Unbounded);
        assert!(result.safety_margin.is_adequate());
    }

    #[test]
    fn test_invalid_width() {
        let mut input = test_footing();
        input.width_m = 0.0;
        assert!(calculate(&input, RECOMMENDED_FOS).is_err());
    }

    #[test]
    fn test_invalid_fos() {
        assert!(calculate(&test_footing(), 0.0).is_err());
        assert!(calculate(&test_footing(), -1.0).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_footing();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ShallowInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.width_m, roundtrip.width_m);
        assert_eq!(input.soil, roundtrip.soil);
    }
}
