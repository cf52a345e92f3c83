//! # pile_core - Pile Foundation Calculation Engine
//!
//! `pile_core` is the computational heart of Pilecap: the ultimate axial
//! capacity of a single pile and the number of piles a foundation load needs.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use pile_core::calculations::{capacity, pile_count};
//!
//! let q_single = capacity(0.5, 10.0, 24.0, 18.0, 30.0, 0.5, 20.0);
//! let piles = pile_count(3000.0, q_single).unwrap();
//! assert_eq!(piles, 4);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Pile capacity, pile count, and the combined foundation check
//! - [`equations`] - Individual geotechnical formulas
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use calculations::{FoundationInput, FoundationResult, PileCapacityResult, PileInput};
pub use errors::{CalcError, CalcResult};
