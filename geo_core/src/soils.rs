//! # Soil Properties and Classification
//!
//! The soil-property record consumed by every calculator, plus a preset
//! database of representative parameters per soil classification.
//!
//! ## Soil Model
//!
//! One [`SoilProperties`] record represents a homogeneous stratum or a
//! representative average over the depth of interest. Layered profiles are
//! averaged by the caller before invoking the engine.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::soils::{SoilClass, SoilProperties};
//!
//! // Explicit properties from a site investigation
//! let soil = SoilProperties {
//!     unit_weight_kn_m3: 18.0,
//!     cohesion_kpa: 10.0,
//!     friction_angle_deg: 30.0,
//! };
//! assert!(soil.validate().is_ok());
//!
//! // Or representative values for preliminary sizing
//! let sand = SoilClass::Sand.typical_properties();
//! assert_eq!(sand.cohesion_kpa, 0.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Soil properties for one homogeneous stratum.
///
/// Units are fixed: kN/m³, kPa, degrees.
///
/// ## JSON Example
///
/// ```json
/// {
///   "unit_weight_kn_m3": 18.0,
///   "cohesion_kpa": 10.0,
///   "friction_angle_deg": 30.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProperties {
    /// Bulk unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Cohesion c (kPa)
    pub cohesion_kpa: f64,

    /// Internal friction angle φ (degrees). Valid range [0°, 90°);
    /// practical soils fall in 0°-45°.
    pub friction_angle_deg: f64,
}

impl SoilProperties {
    /// Validate the record against its physical range.
    ///
    /// φ = 90° is rejected by name: tan(90°) is singular and must never
    /// reach a formula.
    pub fn validate(&self) -> CalcResult<()> {
        if self.unit_weight_kn_m3 <= 0.0 {
            return Err(CalcError::invalid_soil_property(
                "unit_weight_kn_m3",
                self.unit_weight_kn_m3.to_string(),
                "Unit weight must be positive",
            ));
        }
        if self.cohesion_kpa < 0.0 {
            return Err(CalcError::invalid_soil_property(
                "cohesion_kpa",
                self.cohesion_kpa.to_string(),
                "Cohesion cannot be negative",
            ));
        }
        if self.friction_angle_deg < 0.0 {
            return Err(CalcError::invalid_soil_property(
                "friction_angle_deg",
                self.friction_angle_deg.to_string(),
                "Friction angle cannot be negative",
            ));
        }
        if self.friction_angle_deg >= 90.0 {
            return Err(CalcError::invalid_soil_property(
                "friction_angle_deg",
                self.friction_angle_deg.to_string(),
                "Friction angle must be below 90 degrees (tangent singularity)",
            ));
        }
        Ok(())
    }
}

/// Soil classification per standard geotechnical practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilClass {
    Clay,
    Silt,
    Sand,
    Gravel,
    Peat,
    Rock,
    Fill,
    Mixed,
}

/// Representative properties per soil class, for preliminary sizing when no
/// site investigation data is available yet.
static TYPICAL_PROPERTIES: Lazy<HashMap<SoilClass, SoilProperties>> = Lazy::new(|| {
    let mut db = HashMap::new();
    let mut add = |class: SoilClass, unit_weight: f64, cohesion: f64, friction_angle: f64| {
        db.insert(
            class,
            SoilProperties {
                unit_weight_kn_m3: unit_weight,
                cohesion_kpa: cohesion,
                friction_angle_deg: friction_angle,
            },
        );
    };
    add(SoilClass::Clay, 18.0, 25.0, 0.0);
    add(SoilClass::Silt, 17.0, 5.0, 26.0);
    add(SoilClass::Sand, 18.0, 0.0, 33.0);
    add(SoilClass::Gravel, 20.0, 0.0, 38.0);
    add(SoilClass::Peat, 10.5, 5.0, 0.0);
    add(SoilClass::Rock, 24.0, 100.0, 40.0);
    add(SoilClass::Fill, 17.0, 0.0, 28.0);
    add(SoilClass::Mixed, 18.0, 10.0, 25.0);
    db
});

impl SoilClass {
    /// All soil class variants for UI selection
    pub const ALL: [SoilClass; 8] = [
        SoilClass::Clay,
        SoilClass::Silt,
        SoilClass::Sand,
        SoilClass::Gravel,
        SoilClass::Peat,
        SoilClass::Rock,
        SoilClass::Fill,
        SoilClass::Mixed,
    ];

    /// Representative properties for preliminary design.
    ///
    /// These are conservative textbook averages; a real design replaces
    /// them with investigated values.
    pub fn typical_properties(&self) -> SoilProperties {
        TYPICAL_PROPERTIES[self]
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "CLAY" => Ok(SoilClass::Clay),
            "SILT" => Ok(SoilClass::Silt),
            "SAND" => Ok(SoilClass::Sand),
            "GRAVEL" => Ok(SoilClass::Gravel),
            "PEAT" => Ok(SoilClass::Peat),
            "ROCK" => Ok(SoilClass::Rock),
            "FILL" => Ok(SoilClass::Fill),
            "MIXED" => Ok(SoilClass::Mixed),
            _ => Err(CalcError::unknown_soil_class(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilClass::Clay => "Clay",
            SoilClass::Silt => "Silt",
            SoilClass::Sand => "Sand",
            SoilClass::Gravel => "Gravel",
            SoilClass::Peat => "Peat",
            SoilClass::Rock => "Rock",
            SoilClass::Fill => "Fill",
            SoilClass::Mixed => "Mixed",
        }
    }
}

impl std::fmt::Display for SoilClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_soil() -> SoilProperties {
        SoilProperties {
            unit_weight_kn_m3: 18.0,
            cohesion_kpa: 10.0,
            friction_angle_deg: 30.0,
        }
    }

    #[test]
    fn test_valid_soil() {
        assert!(test_soil().validate().is_ok());
    }

    #[test]
    fn test_negative_unit_weight_rejected() {
        let mut soil = test_soil();
        soil.unit_weight_kn_m3 = -1.0;
        assert!(soil.validate().is_err());
    }

    #[test]
    fn test_negative_cohesion_rejected() {
        let mut soil = test_soil();
        soil.cohesion_kpa = -5.0;
        assert!(soil.validate().is_err());
    }

    #[test]
    fn test_friction_angle_singularity_rejected() {
        let mut soil = test_soil();
        soil.friction_angle_deg = 90.0;
        let err = soil.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SOIL_PROPERTY");

        soil.friction_angle_deg = 89.9;
        assert!(soil.validate().is_ok());
    }

    #[test]
    fn test_typical_properties_are_valid() {
        for class in SoilClass::ALL {
            let props = class.typical_properties();
            assert!(props.validate().is_ok(), "invalid presets for {class}");
        }
    }

    #[test]
    fn test_cohesive_classes_have_zero_friction() {
        assert_eq!(SoilClass::Clay.typical_properties().friction_angle_deg, 0.0);
        assert_eq!(SoilClass::Sand.typical_properties().cohesion_kpa, 0.0);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(SoilClass::from_str_flexible("sand").unwrap(), SoilClass::Sand);
        assert_eq!(SoilClass::from_str_flexible(" CLAY ").unwrap(), SoilClass::Clay);
        assert!(SoilClass::from_str_flexible("loam").is_err());
    }

    #[test]
    fn test_serialization() {
        let soil = test_soil();
        let json = serde_json::to_string(&soil).unwrap();
        let roundtrip: SoilProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(soil, roundtrip);
    }
}
