//! # Foundation Calculations
//!
//! This module contains all foundation calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ...) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`shallow`] - Terzaghi bearing capacity for spread footings
//! - [`pile`] - Single-pile and pile-group axial capacity
//! - [`wall`] - Rankine earth pressure on retaining walls
//!
//! Factors of safety are never defaulted: each call site supplies them,
//! either directly or through [`DesignSettings`].

pub mod pile;
pub mod shallow;
pub mod wall;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use pile::{PileGroupInput, PileGroupResult, PileInput, PileResult, PileType};
pub use shallow::{ShallowInput, ShallowResult};
pub use wall::{WallInput, WallResult};

/// Margin of allowable capacity over applied demand.
///
/// Zero demand yields [`SafetyMargin::Unbounded`] rather than a raw
/// floating-point infinity, so consumers must handle the no-load case
/// explicitly instead of propagating `inf` through further arithmetic.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "Factor", "value": 1.45 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum SafetyMargin {
    /// Ratio of allowable capacity to applied demand
    Factor(f64),
    /// No demand applied; the margin is undefined/unbounded
    Unbounded,
}

impl SafetyMargin {
    /// Build a margin from an allowable capacity and a demand.
    ///
    /// Demand of exactly zero is the documented permissive convention:
    /// it produces `Unbounded`, not an error.
    pub fn from_capacity_demand(allowable: f64, demand: f64) -> Self {
        if demand > 0.0 {
            SafetyMargin::Factor(allowable / demand)
        } else {
            SafetyMargin::Unbounded
        }
    }

    /// The design verdict: capacity covers demand.
    ///
    /// `Unbounded` is trivially adequate.
    pub fn is_adequate(&self) -> bool {
        match self {
            SafetyMargin::Factor(f) => *f >= 1.0,
            SafetyMargin::Unbounded => true,
        }
    }

    /// The numeric ratio, if one exists.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            SafetyMargin::Factor(f) => Some(*f),
            SafetyMargin::Unbounded => None,
        }
    }
}

pub(crate) fn validate_fos(value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_settings(
            "factor_of_safety",
            value.to_string(),
            "Factor of safety must be positive and finite",
        ));
    }
    Ok(())
}

/// Factors of safety supplied by the caller for a batch of calculations.
///
/// There are no implicit defaults anywhere in the engine;
/// [`DesignSettings::recommended`] names the conventional values so call
/// sites stay explicit.
///
/// ## JSON Example
///
/// ```json
/// { "bearing_fos": 3.0, "pile_fos": 2.5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSettings {
    /// Factor of safety for shallow bearing capacity
    pub bearing_fos: f64,

    /// Factor of safety for single-pile capacity
    pub pile_fos: f64,
}

impl DesignSettings {
    /// The conventional factors: 3.0 for bearing, 2.5 for piles.
    pub fn recommended() -> Self {
        DesignSettings {
            bearing_fos: shallow::RECOMMENDED_FOS,
            pile_fos: pile::RECOMMENDED_FOS,
        }
    }

    /// Validate both factors.
    pub fn validate(&self) -> CalcResult<()> {
        validate_fos(self.bearing_fos)?;
        validate_fos(self.pile_fos)
    }
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FoundationCalculation {
    /// Rectangular spread footing
    Shallow(ShallowInput),
    /// Single pile
    SinglePile(PileInput),
    /// Pile group
    PileGroup(PileGroupInput),
    /// Retaining wall
    RetainingWall(WallInput),
}

impl FoundationCalculation {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            FoundationCalculation::Shallow(input) => &input.label,
            FoundationCalculation::SinglePile(input) => &input.label,
            FoundationCalculation::PileGroup(input) => &input.label,
            FoundationCalculation::RetainingWall(input) => &input.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            FoundationCalculation::Shallow(_) => "Shallow",
            FoundationCalculation::SinglePile(_) => "SinglePile",
            FoundationCalculation::PileGroup(_) => "PileGroup",
            FoundationCalculation::RetainingWall(_) => "RetainingWall",
        }
    }

    /// Run the wrapped calculation with the supplied settings.
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<FoundationResult> {
        settings.validate()?;
        match self {
            FoundationCalculation::Shallow(input) => {
                shallow::calculate(input, settings.bearing_fos).map(FoundationResult::Shallow)
            }
            FoundationCalculation::SinglePile(input) => {
                pile::calculate(input, settings.pile_fos).map(FoundationResult::SinglePile)
            }
            FoundationCalculation::PileGroup(input) => {
                pile::calculate_group(input, settings.pile_fos).map(FoundationResult::PileGroup)
            }
            FoundationCalculation::RetainingWall(input) => {
                wall::calculate(input).map(FoundationResult::RetainingWall)
            }
        }
    }
}

/// Result counterpart of [`FoundationCalculation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FoundationResult {
    /// Rectangular spread footing
    Shallow(ShallowResult),
    /// Single pile
    SinglePile(PileResult),
    /// Pile group
    PileGroup(PileGroupResult),
    /// Retaining wall
    RetainingWall(WallResult),
}

impl FoundationResult {
    /// The capacity-over-demand margin, where the calculation carries a
    /// demand. Wall results report forces only, never a margin.
    pub fn safety_margin(&self) -> Option<SafetyMargin> {
        match self {
            FoundationResult::Shallow(result) => Some(result.safety_margin),
            FoundationResult::SinglePile(result) => Some(result.safety_margin),
            FoundationResult::PileGroup(result) => Some(result.safety_margin),
            FoundationResult::RetainingWall(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soils::SoilProperties;

    fn frictional_soil() -> SoilProperties {
        SoilProperties {
            unit_weight_kn_m3: 18.0,
            cohesion_kpa: 15.0,
            friction_angle_deg: 30.0,
        }
    }

    #[test]
    fn test_safety_margin_verdict() {
        assert!(SafetyMargin::Factor(1.0).is_adequate());
        assert!(SafetyMargin::Factor(2.5).is_adequate());
        assert!(!SafetyMargin::Factor(0.99).is_adequate());
        assert!(SafetyMargin::Unbounded.is_adequate());
        assert_eq!(SafetyMargin::Unbounded.ratio(), None);
    }

    #[test]
    fn test_safety_margin_from_zero_demand() {
        let margin = SafetyMargin::from_capacity_demand(100.0, 0.0);
        assert_eq!(margin, SafetyMargin::Unbounded);
    }

    #[test]
    fn test_settings_validation() {
        assert!(DesignSettings::recommended().validate().is_ok());

        let bad = DesignSettings {
            bearing_fos: 0.0,
            pile_fos: 2.5,
        };
        assert_eq!(
            bad.validate().unwrap_err().error_code(),
            "INVALID_SETTINGS"
        );
    }

    #[test]
    fn test_safe_shallow_design() {
        // A generously sized footing on decent soil comes out adequate
        let calc = FoundationCalculation::Shallow(ShallowInput {
            label: "F-1".to_string(),
            width_m: 2.5,
            length_m: 2.5,
            depth_m: 1.5,
            applied_load_kn: 1000.0,
            soil: frictional_soil(),
        });

        let result = calc.run(&DesignSettings::recommended()).unwrap();
        let margin = result.safety_margin().unwrap();
        assert!(margin.is_adequate());
        assert!(margin.ratio().unwrap() > 1.0);
    }

    #[test]
    fn test_adequate_single_pile() {
        let calc = FoundationCalculation::SinglePile(PileInput {
            label: "P-1".to_string(),
            diameter_m: 0.8,
            length_m: 20.0,
            pile_type: PileType::Bored,
            applied_load_kn: 1500.0,
            soil: SoilProperties {
                unit_weight_kn_m3: 18.0,
                cohesion_kpa: 15.0,
                friction_angle_deg: 32.0,
            },
        });

        let result = calc.run(&DesignSettings::recommended()).unwrap();
        let FoundationResult::SinglePile(pile) = result else {
            panic!("expected a single-pile result");
        };
        assert!(pile.end_bearing_kn > 0.0);
        assert!(pile.skin_friction_kn > 0.0);
        assert!(pile.allowable_kn > 500.0);
        assert!(pile.allowable_kn < 5000.0);
    }

    #[test]
    fn test_group_dispatch_and_reduction() {
        let calc = FoundationCalculation::PileGroup(PileGroupInput {
            label: "PG-1".to_string(),
            diameter_m: 0.8,
            length_m: 20.0,
            pile_type: PileType::Bored,
            num_piles: 9,
            spacing_m: 2.4,
            total_load_kn: 12000.0,
            soil: SoilProperties {
                unit_weight_kn_m3: 18.0,
                cohesion_kpa: 15.0,
                friction_angle_deg: 32.0,
            },
        });
        assert_eq!(calc.calc_type(), "PileGroup");
        assert_eq!(calc.label(), "PG-1");

        let result = calc.run(&DesignSettings::recommended()).unwrap();
        let FoundationResult::PileGroup(group) = result else {
            panic!("expected a pile-group result");
        };
        assert!(group.group_allowable_kn < group.single_pile.allowable_kn * 9.0);
    }

    #[test]
    fn test_wall_has_no_margin() {
        let calc = FoundationCalculation::RetainingWall(WallInput {
            label: "W-1".to_string(),
            height_m: 5.0,
            thickness_m: 0.4,
            surcharge_kpa: 10.0,
            soil: frictional_soil(),
        });

        let result = calc.run(&DesignSettings::recommended()).unwrap();
        assert!(result.safety_margin().is_none());
    }

    #[test]
    fn test_calculation_serialization_tagged() {
        let calc = FoundationCalculation::Shallow(ShallowInput {
            label: "F-2".to_string(),
            width_m: 2.0,
            length_m: 3.0,
            depth_m: 1.0,
            applied_load_kn: 800.0,
            soil: frictional_soil(),
        });

        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"type\":\"Shallow\""));

        let roundtrip: FoundationCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.label(), "F-2");
    }
}
