//! # Error Types
//!
//! Structured error types for pile_core. Each variant carries enough context
//! for a caller to tell a bad input apart from an impossible division or a
//! degenerate result, without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_m: f64) -> CalcResult<()> {
//!     if diameter_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "diameter_m".to_string(),
//!             value: diameter_m.to_string(),
//!             reason: "Diameter must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_diameter(-0.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pile_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its physically meaningful range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Pile count requested against a capacity that cannot divide the load
    #[error("Cannot divide total load {total_load} kN by single-pile capacity {capacity} kN - capacity must be a positive finite number")]
    Division { total_load: String, capacity: String },

    /// Calculation produced a value that cannot be used downstream
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Division error from the offending operands
    pub fn division(total_load: f64, capacity: f64) -> Self {
        CalcError::Division {
            total_load: total_load.to_string(),
            capacity: capacity.to_string(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Division { .. } => "DIVISION_ERROR",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}
