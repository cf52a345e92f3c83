//! # Geotechnical Equations
//!
//! Fundamental formulas used by the pile calculations, kept in one place so
//! they can be checked against textbook references independently of the
//! input handling around them.
//!
//! ## Modules
//!
//! - [`pile`] - Single pile skin friction and end bearing
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (compression into the pile)
//! - **Resistances**: Positive upward (opposing the applied load)
//! - **Depth**: Positive downward from the ground surface

pub mod pile;

pub use pile::{
    base_area,
    base_capacity,
    bearing_capacity_factor_nq,
    overburden_stress,
    shaft_perimeter,
    skin_capacity,
    unit_skin_resistance,
};
