//! # Bearing Capacity Factors
//!
//! Terzaghi bearing-capacity factors shared by the shallow-foundation and
//! pile calculators.
//!
//! ## Overview
//!
//! The three dimensionless factors translate cohesion, overburden, and soil
//! self-weight into bearing pressure:
//!
//! ```text
//! Nq = e^(π·tanφ) · tan²(45° + φ/2)
//! Nc = (Nq − 1) / tanφ          (φ > 0; 5.14 for φ = 0)
//! Nγ = 2 · (Nq + 1) · tanφ      (Terzaghi form)
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Accounts for          | φ=0°  | φ=30° |
//! |--------|-----------------------|-------|-------|
//! | Nc     | Cohesion              | 5.14  | ~30.1 |
//! | Nq     | Overburden surcharge  | 1.0   | ~18.4 |
//! | Nγ     | Soil self-weight      | 0.0   | ~22.4 |
//!
//! These helpers trust their input: the `[0°, 90°)` friction-angle contract
//! is enforced by [`SoilProperties::validate`](crate::soils::SoilProperties::validate)
//! before any calculator reaches them. At φ = 90° the tangent is singular.
//!
//! ## Reference
//!
//! Terzaghi (1943), *Theoretical Soil Mechanics*; Nγ in the common
//! Vesić-style form 2(Nq+1)tanφ.

use serde::{Deserialize, Serialize};

use crate::units::Degrees;

/// Nc for purely cohesive soil (φ = 0°).
///
/// Named special case that removes the 0/0 singularity of (Nq−1)/tanφ;
/// the classical undrained value (2 + π rounded per convention).
pub const COHESIVE_NC: f64 = 5.14;

/// Overburden factor Nq.
pub fn nq(friction_angle_deg: f64) -> f64 {
    let phi = Degrees(friction_angle_deg);
    let half_wedge = Degrees(45.0 + friction_angle_deg / 2.0);
    (std::f64::consts::PI * phi.tan()).exp() * half_wedge.tan().powi(2)
}

/// Cohesion factor Nc.
///
/// For φ = 0 the defined cohesive limit [`COHESIVE_NC`] is returned rather
/// than evaluating the singular quotient.
pub fn nc(friction_angle_deg: f64) -> f64 {
    if friction_angle_deg > 0.0 {
        (nq(friction_angle_deg) - 1.0) / Degrees(friction_angle_deg).tan()
    } else {
        COHESIVE_NC
    }
}

/// Self-weight factor Nγ (Terzaghi form).
pub fn ngamma(friction_angle_deg: f64) -> f64 {
    2.0 * (nq(friction_angle_deg) + 1.0) * Degrees(friction_angle_deg).tan()
}

/// The three Terzaghi bearing-capacity factors for one friction angle.
///
/// ## JSON Example
///
/// ```json
/// { "nc": 30.14, "nq": 18.4, "ngamma": 22.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacityFactors {
    /// Cohesion factor Nc
    pub nc: f64,
    /// Overburden factor Nq
    pub nq: f64,
    /// Self-weight factor Nγ
    pub ngamma: f64,
}

impl BearingCapacityFactors {
    /// Compute all three factors for a friction angle in degrees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geo_core::factors::BearingCapacityFactors;
    ///
    /// let f = BearingCapacityFactors::for_friction_angle(0.0);
    /// assert!((f.nc - 5.14).abs() < 0.01);
    /// assert!((f.nq - 1.0).abs() < 0.01);
    /// assert!(f.ngamma.abs() < 0.01);
    /// ```
    pub fn for_friction_angle(friction_angle_deg: f64) -> Self {
        BearingCapacityFactors {
            nc: nc(friction_angle_deg),
            nq: nq(friction_angle_deg),
            ngamma: ngamma(friction_angle_deg),
        }
    }
}
