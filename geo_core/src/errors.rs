//! # Error Types
//!
//! Structured error types for geo_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use geo_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_m: f64) -> CalcResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "width_m",
//!             width_m.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for geo_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A geometry or load value is invalid (non-positive dimension, etc.)
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A soil property is outside its physical range
    #[error("Invalid soil property '{field}': {value} - {reason}")]
    InvalidSoilProperty {
        field: String,
        value: String,
        reason: String,
    },

    /// A design setting (e.g., factor of safety) is invalid
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// Soil classification not found in preset database
    #[error("Unknown soil class: {name}")]
    UnknownSoilClass { name: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSoilProperty error
    pub fn invalid_soil_property(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidSoilProperty {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownSoilClass error
    pub fn unknown_soil_class(name: impl Into<String>) -> Self {
        CalcError::UnknownSoilClass { name: name.into() }
    }

    /// Check if this error was raised at input validation.
    ///
    /// Every rejection happens before any arithmetic, so an input error
    /// means no partial results exist.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidGeometry { .. }
                | CalcError::InvalidSoilProperty { .. }
                | CalcError::InvalidSettings { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidSoilProperty { .. } => "INVALID_SOIL_PROPERTY",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::UnknownSoilClass { .. } => "UNKNOWN_SOIL_CLASS",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
