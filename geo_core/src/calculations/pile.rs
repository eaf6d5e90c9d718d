//! # Deep Foundation (Pile) Calculation
//!
//! Single-pile capacity from end bearing plus shaft skin friction, and
//! pile-group capacity with a spacing-ratio efficiency reduction.
//!
//! ## Assumptions
//!
//! - Circular pile section, homogeneous soil over the full shaft length
//! - Effective stress taken as γ·L at the tip and γ·L/2 averaged along
//!   the shaft (no groundwater reduction)
//! - Fixed undrained end-bearing cohesion coefficient of 9
//! - Group efficiency depends on the spacing/diameter ratio only, with no
//!   row/column distinction
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use geo_core::calculations::pile::{self, PileInput, PileType, RECOMMENDED_FOS};
//! use geo_core::soils::SoilProperties;
//!
//! let input = PileInput {
//!     label: "P-1".to_string(),
//!     diameter_m: 0.6,
//!     length_m: 15.0,
//!     pile_type: PileType::Bored,
//!     applied_load_kn: 1000.0,
//!     soil: SoilProperties {
//!         unit_weight_kn_m3: 18.0,
//!         cohesion_kpa: 10.0,
//!         friction_angle_deg: 30.0,
//!     },
//! };
//!
//! let result = pile::calculate(&input, RECOMMENDED_FOS).unwrap();
//!
//! println!("Qb = {:.1} kN", result.end_bearing_kn);
//! println!("Qs = {:.1} kN", result.skin_friction_kn);
//! println!("Qa = {:.1} kN", result.allowable_kn);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{validate_fos, SafetyMargin};
use crate::errors::{CalcError, CalcResult};
use crate::factors;
use crate::soils::SoilProperties;

/// Standard factor of safety for single-pile capacity.
///
/// Callers pass the factor explicitly at every call site; this constant is
/// the conventional value, not an implicit default.
pub const RECOMMENDED_FOS: f64 = 2.5;

/// Fixed divisor applied to the summed group capacity in
/// [`calculate_group`]. It does not track the single-pile factor passed to
/// the same call.
pub const GROUP_FOS: f64 = 2.5;

/// Undrained end-bearing cohesion coefficient in qb = 9·c + σv·Nq.
///
/// Fixed for all soil and pile types; not a general Nc.
pub const END_BEARING_COHESION_FACTOR: f64 = 9.0;

/// Pile installation method.
///
/// Drives the shaft interface parameters: driven piles densify the
/// surrounding soil and mobilize a rougher interface than bored piles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileType {
    /// Displacement pile, driven or jacked
    Driven,
    /// Replacement pile, bored and cast in place
    Bored,
}

impl PileType {
    /// All pile type variants for UI selection
    pub const ALL: [PileType; 2] = [PileType::Driven, PileType::Bored];

    /// Lateral earth pressure coefficient K on the shaft
    pub fn skin_friction_coefficient(&self) -> f64 {
        match self {
            PileType::Driven => 0.8,
            PileType::Bored => 0.7,
        }
    }

    /// Interface friction angle δ as a fraction of the soil friction angle φ
    pub fn interface_friction_ratio(&self) -> f64 {
        match self {
            PileType::Driven => 0.75,
            PileType::Bored => 0.6,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "DRIVEN" | "DISPLACEMENT" => Ok(PileType::Driven),
            "BORED" | "REPLACEMENT" | "CAST-IN-PLACE" => Ok(PileType::Bored),
            _ => Err(CalcError::invalid_geometry(
                "pile_type",
                s.to_string(),
                "Expected 'driven' or 'bored'",
            )),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PileType::Driven => "Driven",
            PileType::Bored => "Bored",
        }
    }
}

impl std::fmt::Display for PileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for a single pile.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "diameter_m": 0.6,
///   "length_m": 15.0,
///   "pile_type": "Bored",
///   "applied_load_kn": 1000.0,
///   "soil": {
///     "unit_weight_kn_m3": 18.0,
///     "cohesion_kpa": 10.0,
///     "friction_angle_deg": 30.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileInput {
    /// User label for this pile (e.g., "P-1", "Pile at Pier 3")
    pub label: String,

    /// Pile diameter D in meters
    pub diameter_m: f64,

    /// Embedded pile length L in meters
    pub length_m: f64,

    /// Installation method
    pub pile_type: PileType,

    /// Applied axial load per pile in kilonewtons
    pub applied_load_kn: f64,

    /// Soil properties along the shaft and at the tip
    pub soil: SoilProperties,
}

impl PileInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.diameter_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "diameter_m",
                self.diameter_m.to_string(),
                "Diameter must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
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

    /// Tip area A = π·(D/2)² (m²)
    pub fn tip_area_m2(&self) -> f64 {
        std::f64::consts::PI * (self.diameter_m / 2.0).powi(2)
    }

    /// Shaft perimeter P = π·D (m)
    pub fn perimeter_m(&self) -> f64 {
        std::f64::consts::PI * self.diameter_m
    }
}

fn end_bearing_unchecked(input: &PileInput) -> f64 {
    let soil = &input.soil;

    // Vertical effective stress at the tip
    let sigma_v = soil.unit_weight_kn_m3 * input.length_m;
    let nq = factors::nq(soil.friction_angle_deg);

    // Unit end bearing qb = 9·c + σv·Nq
    let qb = END_BEARING_COHESION_FACTOR * soil.cohesion_kpa + sigma_v * nq;
    qb * input.tip_area_m2()
}

fn skin_friction_unchecked(input: &PileInput) -> f64 {
    let soil = &input.soil;

    // Average vertical effective stress along the shaft
    let sigma_v_avg = soil.unit_weight_kn_m3 * input.length_m / 2.0;

    let k = input.pile_type.skin_friction_coefficient();
    let delta_deg = input.pile_type.interface_friction_ratio() * soil.friction_angle_deg;

    // Unit skin friction fs = c + K·σv_avg·tanδ
    let fs = soil.cohesion_kpa + k * sigma_v_avg * delta_deg.to_radians().tan();
    fs * input.perimeter_m() * input.length_m
}

/// End bearing capacity Qb (kN).
///
/// Tip area times unit end bearing qb = 9·c + σv·Nq, with σv = γ·L.
pub fn end_bearing_kn(input: &PileInput) -> CalcResult<f64> {
    input.validate()?;
    Ok(end_bearing_unchecked(input))
}

/// Skin friction capacity Qs (kN).
///
/// Shaft perimeter times embedded length times unit skin friction
/// fs = c + K·σv_avg·tanδ, with K and δ set by the pile type.
pub fn skin_friction_kn(input: &PileInput) -> CalcResult<f64> {
    input.validate()?;
    Ok(skin_friction_unchecked(input))
}

/// Results from a single-pile capacity calculation.
///
/// `ultimate_kn` is exactly `end_bearing_kn + skin_friction_kn`, and
/// `allowable_kn` is exactly `ultimate_kn / factor_of_safety`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "end_bearing_kn": 1470.9,
///   "skin_friction_kn": 1226.3,
///   "ultimate_kn": 2697.2,
///   "allowable_kn": 1078.9,
///   "factor_of_safety": 2.5,
///   "safety_margin": { "kind": "Factor", "value": 1.08 },
///   "utilization_percent": 92.7
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileResult {
    /// End bearing capacity Qb (kN)
    pub end_bearing_kn: f64,

    /// Skin friction capacity Qs (kN)
    pub skin_friction_kn: f64,

    /// Ultimate capacity Qu = Qb + Qs (kN)
    pub ultimate_kn: f64,

    /// Allowable capacity Qa = Qu / FOS (kN)
    pub allowable_kn: f64,

    /// Factor of safety that produced `allowable_kn`
    pub factor_of_safety: f64,

    /// Margin of allowable capacity over the applied load
    pub safety_margin: SafetyMargin,

    /// Applied load as a percentage of allowable capacity
    pub utilization_percent: f64,
}

/// Calculate single-pile capacity.
///
/// # Arguments
///
/// * `input` - Pile geometry, installation method, load, and soil record
/// * `factor_of_safety` - Divisor applied to the ultimate capacity
///   (conventionally [`RECOMMENDED_FOS`]); must be positive
///
/// # Returns
///
/// * `Ok(PileResult)` - Capacity components, totals, and margin
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &PileInput, factor_of_safety: f64) -> CalcResult<PileResult> {
    input.validate()?;
    validate_fos(factor_of_safety)?;

    let end_bearing = end_bearing_unchecked(input);
    let skin_friction = skin_friction_unchecked(input);

    let ultimate = end_bearing + skin_friction;
    let allowable = ultimate / factor_of_safety;

    Ok(PileResult {
        end_bearing_kn: end_bearing,
        skin_friction_kn: skin_friction,
        ultimate_kn: ultimate,
        allowable_kn: allowable,
        factor_of_safety,
        safety_margin: SafetyMargin::from_capacity_demand(allowable, input.applied_load_kn),
        utilization_percent: input.applied_load_kn / allowable * 100.0,
    })
}

/// Pile group efficiency η from the spacing/diameter ratio.
///
/// Piecewise on r = spacing / diameter:
///
/// ```text
/// r ≥ 6        η = 1.0
/// 3 ≤ r < 6    η = 0.7 + 0.3·(r − 3)/3
/// r < 3        η = 0.7·r/3
/// ```
///
/// The result is clamped to at most 1.0. The pile count participates in
/// validation only; the reduction itself is a pure spacing-ratio heuristic
/// with no row/column distinction.
pub fn group_efficiency(num_piles: u32, spacing_m: f64, diameter_m: f64) -> CalcResult<f64> {
    if num_piles < 1 {
        return Err(CalcError::invalid_geometry(
            "num_piles",
            num_piles.to_string(),
            "Group must contain at least one pile",
        ));
    }
    if spacing_m <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "spacing_m",
            spacing_m.to_string(),
            "Spacing must be positive",
        ));
    }
    if diameter_m <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "diameter_m",
            diameter_m.to_string(),
            "Diameter must be positive",
        ));
    }

    let ratio = spacing_m / diameter_m;
    let efficiency = if ratio >= 6.0 {
        1.0
    } else if ratio >= 3.0 {
        0.7 + 0.3 * (ratio - 3.0) / 3.0
    } else {
        0.7 * ratio / 3.0
    };

    Ok(efficiency.min(1.0))
}

/// Input parameters for a pile group.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "PG-1",
///   "diameter_m": 0.8,
///   "length_m": 20.0,
///   "pile_type": "Bored",
///   "num_piles": 9,
///   "spacing_m": 2.4,
///   "total_load_kn": 12000.0,
///   "soil": {
///     "unit_weight_kn_m3": 18.0,
///     "cohesion_kpa": 15.0,
///     "friction_angle_deg": 32.0
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileGroupInput {
    /// User label for this group (e.g., "PG-1", "Pile cap at Core")
    pub label: String,

    /// Pile diameter D in meters
    pub diameter_m: f64,

    /// Embedded pile length L in meters
    pub length_m: f64,

    /// Installation method (shared by all piles in the group)
    pub pile_type: PileType,

    /// Number of piles in the group
    pub num_piles: u32,

    /// Center-to-center pile spacing in meters
    pub spacing_m: f64,

    /// Total load on the group in kilonewtons
    pub total_load_kn: f64,

    /// Soil properties along the shaft and at the tip
    pub soil: SoilProperties,
}

impl PileGroupInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.num_piles < 1 {
            return Err(CalcError::invalid_geometry(
                "num_piles",
                self.num_piles.to_string(),
                "Group must contain at least one pile",
            ));
        }
        if self.spacing_m <= 0.0 {
            return Err(CalcError::invalid_geometry(
                "spacing_m",
                self.spacing_m.to_string(),
                "Spacing must be positive",
            ));
        }
        if self.total_load_kn < 0.0 {
            return Err(CalcError::invalid_geometry(
                "total_load_kn",
                self.total_load_kn.to_string(),
                "Load cannot be negative",
            ));
        }
        self.representative_pile().validate()
    }

    /// Load carried by each pile, assuming an even share (kN)
    pub fn load_per_pile_kn(&self) -> f64 {
        self.total_load_kn / self.num_piles as f64
    }

    /// One pile of the group carrying its even share of the load
    pub fn representative_pile(&self) -> PileInput {
        PileInput {
            label: self.label.clone(),
            diameter_m: self.diameter_m,
            length_m: self.length_m,
            pile_type: self.pile_type,
            applied_load_kn: self.load_per_pile_kn(),
            soil: self.soil,
        }
    }
}

/// Results from a pile-group capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "single_pile": { "...": "PileResult for one pile" },
///   "efficiency": 0.7,
///   "group_ultimate_kn": 22000.0,
///   "group_allowable_kn": 8800.0,
///   "load_per_pile_kn": 1333.3,
///   "safety_margin": { "kind": "Factor", "value": 0.73 },
///   "average_pile_utilization_percent": 95.2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileGroupResult {
    /// Capacity of one pile carrying its even load share
    pub single_pile: PileResult,

    /// Group efficiency η in (0, 1]
    pub efficiency: f64,

    /// Group ultimate capacity Qu_group = Qu_single·n·η (kN)
    pub group_ultimate_kn: f64,

    /// Group allowable capacity Qu_group / [`GROUP_FOS`] (kN)
    pub group_allowable_kn: f64,

    /// Even load share per pile (kN)
    pub load_per_pile_kn: f64,

    /// Margin of group allowable capacity over the total load
    pub safety_margin: SafetyMargin,

    /// Per-pile load share as a percentage of single-pile allowable capacity
    pub average_pile_utilization_percent: f64,
}

/// Calculate pile-group capacity.
///
/// The single-pile capacity is reduced by the group efficiency and summed
/// over the group. The group allowable divides by the fixed [`GROUP_FOS`];
/// `single_pile_fos` only shapes the per-pile result.
///
/// # Arguments
///
/// * `input` - Group geometry, load, and soil record
/// * `single_pile_fos` - Factor of safety for the per-pile capacity
///   (conventionally [`RECOMMENDED_FOS`]); must be positive
///
/// # Returns
///
/// * `Ok(PileGroupResult)` - Group capacities, efficiency, and margin
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate_group(
    input: &PileGroupInput,
    single_pile_fos: f64,
) -> CalcResult<PileGroupResult> {
    input.validate()?;
    validate_fos(single_pile_fos)?;

    let single_pile = calculate(&input.representative_pile(), single_pile_fos)?;
    let efficiency = group_efficiency(input.num_piles, input.spacing_m, input.diameter_m)?;

    let group_ultimate = single_pile.ultimate_kn * input.num_piles as f64 * efficiency;
    let group_allowable = group_ultimate / GROUP_FOS;
    let load_per_pile = input.load_per_pile_kn();

    Ok(PileGroupResult {
        average_pile_utilization_percent: load_per_pile / single_pile.allowable_kn * 100.0,
        single_pile,
        efficiency,
        group_ultimate_kn: group_ultimate,
        group_allowable_kn: group_allowable,
        load_per_pile_kn: load_per_pile,
        safety_margin: SafetyMargin::from_capacity_demand(group_allowable, input.total_load_kn),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// D=0.6m, L=15m bored pile in the c-φ test soil
    fn test_pile() -> PileInput {
        PileInput {
            label: "Test Pile".to_string(),
            diameter_m: 0.6,
            length_m: 15.0,
            pile_type: PileType::Bored,
            applied_load_kn: 1000.0,
            soil: SoilProperties {
                unit_weight_kn_m3: 18.0,
                cohesion_kpa: 10.0,
                friction_angle_deg: 30.0,
            },
        }
    }

    /// 9 bored piles, D=0.8m, s=2.4m (s/D = 3)
    fn test_group() -> PileGroupInput {
        PileGroupInput {
            label: "Test Group".to_string(),
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
        }
    }

    #[test]
    fn test_end_bearing_reasonable() {
        let qb = end_bearing_kn(&test_pile()).unwrap();
        assert!(qb > 0.0);
        assert!(qb < 10_000.0);
    }

    #[test]
    fn test_skin_friction_reasonable() {
        let qs = skin_friction_kn(&test_pile()).unwrap();
        assert!(qs > 0.0);
        assert!(qs < 10_000.0);
    }

    #[test]
    fn test_capacity_identities_exact() {
        let pile = test_pile();
        let result = calculate(&pile, RECOMMENDED_FOS).unwrap();

        let qb = end_bearing_kn(&pile).unwrap();
        let qs = skin_friction_kn(&pile).unwrap();
        assert_eq!(result.ultimate_kn, qb + qs);
        assert_eq!(result.allowable_kn, result.ultimate_kn / 2.5);
        assert!(result.ultimate_kn > result.allowable_kn);
    }

    #[test]
    fn test_driven_exceeds_bored() {
        let bored = test_pile();
        let mut driven = test_pile();
        driven.pile_type = PileType::Driven;

        let qu_bored = calculate(&bored, RECOMMENDED_FOS).unwrap().ultimate_kn;
        let qu_driven = calculate(&driven, RECOMMENDED_FOS).unwrap().ultimate_kn;
        assert!(qu_driven > qu_bored);
    }

    #[test]
    fn test_zero_load_gives_unbounded_margin() {
        let mut pile = test_pile();
        pile.applied_load_kn = 0.0;
        let result = calculate(&pile, RECOMMENDED_FOS).unwrap();
        assert_eq!(result.safety_margin, SafetyMargin::Unbounded);
        assert_eq!(result.utilization_percent, 0.0);
    }

    #[test]
    fn test_efficiency_wide_spacing() {
        // s/D = 6 and beyond: no reduction
        assert_eq!(group_efficiency(4, 3.6, 0.6).unwrap(), 1.0);
        assert_eq!(group_efficiency(4, 6.0, 0.6).unwrap(), 1.0);
    }

    #[test]
    fn test_efficiency_at_ratio_three() {
        let eta = group_efficiency(4, 1.8, 0.6).unwrap();
        assert!((eta - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_efficiency_close_spacing() {
        // s/D = 2: below the 0.7 knee but still positive
        let eta = group_efficiency(4, 1.2, 0.6).unwrap();
        assert!(eta < 0.7);
        assert!(eta > 0.0);
    }

    #[test]
    fn test_efficiency_monotone_and_bounded() {
        let mut previous = 0.0;
        for i in 1..=80 {
            let spacing = 0.1 * i as f64;
            let eta = group_efficiency(4, spacing, 0.6).unwrap();
            assert!(eta >= previous, "efficiency dropped at s={spacing}");
            assert!(eta > 0.0 && eta <= 1.0);
            previous = eta;
        }
    }

    #[test]
    fn test_group_reduction_binds() {
        let group = test_group();
        let result = calculate_group(&group, RECOMMENDED_FOS).unwrap();

        // s/D = 3 → η ≈ 0.7
        assert!((result.efficiency - 0.7).abs() < 1e-12);

        // Group allowable must be strictly less than n uncorrected piles
        let n = group.num_piles as f64;
        assert!(result.group_allowable_kn < result.single_pile.allowable_kn * n);
    }

    #[test]
    fn test_group_load_per_pile() {
        let result = calculate_group(&test_group(), RECOMMENDED_FOS).unwrap();
        assert!((result.load_per_pile_kn - 12000.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut pile = test_pile();
        pile.diameter_m = 0.0;
        assert!(calculate(&pile, RECOMMENDED_FOS).is_err());

        let mut group = test_group();
        group.num_piles = 0;
        assert!(calculate_group(&group, RECOMMENDED_FOS).is_err());

        assert!(group_efficiency(4, -1.0, 0.6).is_err());
        assert!(group_efficiency(0, 1.8, 0.6).is_err());
    }

    #[test]
    fn test_pile_type_parsing() {
        assert_eq!(PileType::from_str_flexible("driven").unwrap(), PileType::Driven);
        assert_eq!(PileType::from_str_flexible("BORED").unwrap(), PileType::Bored);
        assert!(PileType::from_str_flexible("screwed").is_err());
        assert_eq!(PileType::Driven.to_string(), "Driven");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let pile = test_pile();
        let json = serde_json::to_string_pretty(&pile).unwrap();
        let roundtrip: PileInput = serde_json::from_str(&json).unwrap();
        assert_eq!(pile.diameter_m, roundtrip.diameter_m);
        assert_eq!(pile.pile_type, roundtrip.pile_type);
    }
}
