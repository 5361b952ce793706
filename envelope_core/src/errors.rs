//! # Error Types
//!
//! Structured error types for envelope_core. Every failure the evaluator can
//! produce is a client input error: it aborts the current evaluation only and
//! is reported synchronously to the caller, never retried or swallowed.
//!
//! ## Example
//!
//! ```rust
//! use envelope_core::errors::{EvalError, EvalResult};
//!
//! fn validate_thickness(thickness_in: f64) -> EvalResult<()> {
//!     if thickness_in <= 0.0 {
//!         return Err(EvalError::invalid_input(
//!             "thicknessInches",
//!             thickness_in.to_string(),
//!             "Layer thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for envelope_core operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Structured error type for envelope evaluation.
///
/// Each variant provides specific context about what was wrong with the
/// request, enabling programmatic error handling by API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EvalError {
    /// An input value is degenerate (empty layer list, non-positive thickness)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A referenced material name is not in the conductivity table
    #[error("Unknown material: {material_name}")]
    UnknownMaterial { material_name: String },

    /// The (code, climate zone, building type) triple has no configured maximum U-value
    #[error("Unsupported code combination: {code} / {climate_zone} / {building_type}")]
    UnsupportedCodeCombination {
        code: String,
        climate_zone: String,
        building_type: String,
    },
}

impl EvalError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EvalError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownMaterial error
    pub fn unknown_material(material_name: impl Into<String>) -> Self {
        EvalError::UnknownMaterial {
            material_name: material_name.into(),
        }
    }

    /// Create an UnsupportedCodeCombination error
    pub fn unsupported_code_combination(
        code: impl Into<String>,
        climate_zone: impl Into<String>,
        building_type: impl Into<String>,
    ) -> Self {
        EvalError::UnsupportedCodeCombination {
            code: code.into(),
            climate_zone: climate_zone.into(),
            building_type: building_type.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EvalError::InvalidInput { .. } => "INVALID_INPUT",
            EvalError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            EvalError::UnsupportedCodeCombination { .. } => "UNSUPPORTED_CODE_COMBINATION",
        }
    }
}
