//! # Single Pile Axial Capacity Formulas
//!
//! Static formulas for the ultimate axial capacity of a straight-shafted,
//! circular pile in a single homogeneous soil.
//!
//! ```text
//!            Q
//!            ↓
//!   ════════╤═╤════════ ground
//!           │ │  ↑ τ
//!           │ │  ↑ τ       Q = Q_skin + Q_base
//!         L │ │  ↑ τ
//!           │ │  ↑ τ
//!           └─┘
//!           ↑↑↑  q_b = Nq·σv
//!            d
//! ```
//!
//! ## Notation
//!
//! - `d` = Pile diameter (m)
//! - `L` = Embedded pile length (m)
//! - `γs` = Soil unit weight (kN/m³)
//! - `φ` = Angle of internal friction (degrees)
//! - `α` = Adhesion factor (dimensionless)
//! - `c` = Cohesion (kPa)
//! - `σv` = Vertical overburden stress at the pile tip (kPa)
//! - `Nq` = Bearing capacity factor
//!
//! All functions are plain `f64` arithmetic with no validation. The operation
//! order matches the capacity formula exactly so results are reproducible to
//! the last bit.
//!
//! ## References
//!
//! - Das, Principles of Foundation Engineering, Chapter 11 (α-method, Nq)
//! - Prandtl-Reissner bearing capacity factor

use std::f64::consts::PI;

/// Cross-sectional area of the pile base
///
/// # Formula
/// A = π(d/2)²
///
/// # Example
/// ```rust
/// use pile_core::equations::pile::base_area;
///
/// let a = base_area(0.5);
/// assert!((a - 0.19635).abs() < 1e-5);
/// ```
#[inline]
pub fn base_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Shaft perimeter (circumference)
///
/// # Formula
/// P = πd
#[inline]
pub fn shaft_perimeter(diameter: f64) -> f64 {
    PI * diameter
}

/// Vertical overburden stress at the pile tip
///
/// # Formula
/// σv = γs × L
#[inline]
pub fn overburden_stress(soil_unit_weight: f64, length: f64) -> f64 {
    soil_unit_weight * length
}

/// Unit shaft (skin) resistance by the α-method
///
/// # Formula
/// τ = α × c
#[inline]
pub fn unit_skin_resistance(adhesion_factor: f64, cohesion: f64) -> f64 {
    adhesion_factor * cohesion
}

/// Total skin-friction capacity along the shaft
///
/// # Formula
/// Q_skin = τ × P × L
#[inline]
pub fn skin_capacity(unit_resistance: f64, perimeter: f64, length: f64) -> f64 {
    unit_resistance * perimeter * length
}

/// Bearing capacity factor Nq
///
/// # Formula
/// Nq = e^(π·tan φ) × tan²(45° + φ/2)
///
/// Both angles are converted to radians before the tangent is taken. At
/// φ = 0 the factor evaluates to 1.0 within one ulp; it grows without bound
/// as φ approaches 90°.
///
/// # Example
/// ```rust
/// use pile_core::equations::pile::bearing_capacity_factor_nq;
///
/// let nq = bearing_capacity_factor_nq(30.0);
/// assert!((nq - 18.401).abs() < 0.001);
/// ```
#[inline]
pub fn bearing_capacity_factor_nq(friction_angle_deg: f64) -> f64 {
    let phi_rad = friction_angle_deg.to_radians();
    let wedge_rad = (45.0 + friction_angle_deg / 2.0).to_radians();
    (PI * phi_rad.tan()).exp() * wedge_rad.tan().powi(2)
}

/// End-bearing capacity at the pile base
///
/// # Formula
/// Q_base = A × Nq × σv
#[inline]
pub fn base_capacity(area: f64, nq: f64, overburden: f64) -> f64 {
    area * nq * overburden
}
