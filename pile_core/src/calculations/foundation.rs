//! # Pile Foundation Calculation
//!
//! Runs the single pile capacity calculation and sizes the number of piles
//! for a total foundation load in one step.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::calculations::foundation::{calculate, FoundationInput};
//! use pile_core::calculations::pile_capacity::PileInput;
//!
//! let input = FoundationInput {
//!     label: "F-1".to_string(),
//!     total_load_kn: 3000.0,
//!     pile: PileInput {
//!         label: "P-1".to_string(),
//!         diameter_m: 0.5,
//!         length_m: 10.0,
//!         concrete_unit_weight_knm3: 24.0,
//!         soil_unit_weight_knm3: 18.0,
//!         friction_angle_deg: 30.0,
//!         adhesion_factor: 0.5,
//!         cohesion_kpa: 20.0,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.piles_required, 4);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::pile_capacity::{self, PileCapacityResult, PileInput};
use super::pile_count::pile_count;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a pile foundation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "total_load_kn": 3000.0,
///   "pile": {
///     "label": "P-1",
///     "diameter_m": 0.5,
///     "length_m": 10.0,
///     "concrete_unit_weight_knm3": 24.0,
///     "soil_unit_weight_knm3": 18.0,
///     "friction_angle_deg": 30.0,
///     "adhesion_factor": 0.5,
///     "cohesion_kpa": 20.0
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationInput {
    /// User label for this foundation (e.g., "F-1", "Core Wall Cap")
    #[serde(default)]
    pub label: String,

    /// Total axial load on the foundation in kN
    pub total_load_kn: f64,

    /// Pile used throughout the foundation
    pub pile: PileInput,
}

impl FoundationInput {
    /// Validate input parameters, including the pile.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.total_load_kn.is_finite() || self.total_load_kn <= 0.0 {
            return Err(CalcError::invalid_input(
                "total_load_kn",
                self.total_load_kn.to_string(),
                "Total load must be a positive number",
            ));
        }
        self.pile.validate()
    }
}

/// Results from a pile foundation calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "pile": { "total_capacity_kn": 807.43, "...": "..." },
///   "piles_required": 4,
///   "provided_capacity_kn": 3229.72,
///   "utilization": 0.93
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationResult {
    /// Single pile capacity breakdown
    pub pile: PileCapacityResult,

    /// Minimum number of piles
    pub piles_required: u64,

    /// Combined capacity of all piles n × Q_total (kN)
    pub provided_capacity_kn: f64,

    /// Total load / provided capacity, never above 1.0
    pub utilization: f64,
}

/// Calculate single pile capacity and the number of piles required.
///
/// # Returns
///
/// * `Ok(FoundationResult)` - Capacity breakdown and pile count
/// * `Err(CalcError)` - If any input is invalid or the count cannot be formed
pub fn calculate(input: &FoundationInput) -> CalcResult<FoundationResult> {
    input.validate()?;

    let pile = pile_capacity::calculate(&input.pile)?;
    let piles_required = pile_count(input.total_load_kn, pile.total_capacity_kn)?;
    let provided_capacity_kn = piles_required as f64 * pile.total_capacity_kn;
    let utilization = input.total_load_kn / provided_capacity_kn;

    debug!(
        "{}: {} piles provide {:.2} kN for {:.2} kN (utilization {:.3})",
        input.label, piles_required, provided_capacity_kn, input.total_load_kn, utilization
    );

    Ok(FoundationResult {
        pile,
        piles_required,
        provided_capacity_kn,
        utilization,
    })
}
