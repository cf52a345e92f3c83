//! # Pile Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`pile_capacity`] - Ultimate axial capacity of a single pile
//! - [`pile_count`] - Number of piles for a total load
//! - [`foundation`] - Both of the above in one step

pub mod foundation;
pub mod pile_capacity;
pub mod pile_count;

// Re-export commonly used types
pub use foundation::{FoundationInput, FoundationResult};
pub use pile_capacity::{capacity, PileCapacityResult, PileInput};
pub use pile_count::pile_count;
