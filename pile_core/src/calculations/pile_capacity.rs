//! # Single Pile Capacity Calculation
//!
//! Ultimate axial capacity of one bored or driven pile as the sum of shaft
//! (skin) resistance and base (end) bearing.
//!
//! ## Assumptions
//!
//! - Circular, straight-shafted pile
//! - Single homogeneous soil layer along the full length
//! - Skin friction from cohesion only (α-method); no frictional shaft term
//! - End bearing from overburden only (Nq term); no cohesion or width term
//! - No safety factor applied, result is an ultimate value
//!
//! The concrete unit weight is part of the input but does not enter the
//! formula. Pile self-weight is not deducted.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::calculations::pile_capacity::{calculate, PileInput};
//!
//! let input = PileInput {
//!     label: "P-1".to_string(),
//!     diameter_m: 0.5,
//!     length_m: 10.0,
//!     concrete_unit_weight_knm3: 24.0,
//!     soil_unit_weight_knm3: 18.0,
//!     friction_angle_deg: 30.0,
//!     adhesion_factor: 0.5,
//!     cohesion_kpa: 20.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.total_capacity_kn - 807.43).abs() < 0.01);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::equations::pile::{
    base_area, base_capacity, bearing_capacity_factor_nq, overburden_stress, shaft_perimeter,
    skin_capacity, unit_skin_resistance,
};
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a single pile.
///
/// SI units throughout: metres, kN/m³, degrees, kPa.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "diameter_m": 0.5,
///   "length_m": 10.0,
///   "concrete_unit_weight_knm3": 24.0,
///   "soil_unit_weight_knm3": 18.0,
///   "friction_angle_deg": 30.0,
///   "adhesion_factor": 0.5,
///   "cohesion_kpa": 20.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileInput {
    /// User label for this pile (e.g., "P-1", "Typical Column Pile")
    #[serde(default)]
    pub label: String,

    /// Pile diameter in metres
    pub diameter_m: f64,

    /// Embedded pile length in metres
    pub length_m: f64,

    /// Unit weight of the pile concrete in kN/m³ (not used by the formula)
    pub concrete_unit_weight_knm3: f64,

    /// Unit weight of the surrounding soil in kN/m³
    pub soil_unit_weight_knm3: f64,

    /// Angle of internal friction φ in degrees, 0 ≤ φ < 90
    pub friction_angle_deg: f64,

    /// Adhesion factor α (dimensionless)
    pub adhesion_factor: f64,

    /// Soil cohesion c in kPa
    pub cohesion_kpa: f64,
}

impl PileInput {
    /// Validate input parameters.
    ///
    /// Checks that every value is finite and physically meaningful. The first
    /// violation found is returned.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("diameter_m", self.diameter_m),
            ("length_m", self.length_m),
            ("concrete_unit_weight_knm3", self.concrete_unit_weight_knm3),
            ("soil_unit_weight_knm3", self.soil_unit_weight_knm3),
            ("friction_angle_deg", self.friction_angle_deg),
            ("adhesion_factor", self.adhesion_factor),
            ("cohesion_kpa", self.cohesion_kpa),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be a finite number",
                ));
            }
        }

        if self.diameter_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_m",
                self.diameter_m.to_string(),
                "Diameter must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.concrete_unit_weight_knm3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "concrete_unit_weight_knm3",
                self.concrete_unit_weight_knm3.to_string(),
                "Concrete unit weight must be positive",
            ));
        }
        if self.soil_unit_weight_knm3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "soil_unit_weight_knm3",
                self.soil_unit_weight_knm3.to_string(),
                "Soil unit weight must be positive",
            ));
        }
        if !(0.0..90.0).contains(&self.friction_angle_deg) {
            return Err(CalcError::invalid_input(
                "friction_angle_deg",
                self.friction_angle_deg.to_string(),
                "Friction angle must be at least 0° and less than 90°",
            ));
        }
        if self.adhesion_factor < 0.0 {
            return Err(CalcError::invalid_input(
                "adhesion_factor",
                self.adhesion_factor.to_string(),
                "Adhesion factor cannot be negative",
            ));
        }
        if self.cohesion_kpa < 0.0 {
            return Err(CalcError::invalid_input(
                "cohesion_kpa",
                self.cohesion_kpa.to_string(),
                "Cohesion cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from a single pile capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base_area_m2": 0.196,
///   "perimeter_m": 1.571,
///   "overburden_kpa": 180.0,
///   "unit_skin_resistance_kpa": 10.0,
///   "skin_capacity_kn": 157.08,
///   "bearing_factor_nq": 18.40,
///   "base_capacity_kn": 650.35,
///   "total_capacity_kn": 807.43
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileCapacityResult {
    /// Cross-sectional base area A (m²)
    pub base_area_m2: f64,

    /// Shaft perimeter P (m)
    pub perimeter_m: f64,

    /// Vertical overburden stress at the tip σv (kPa)
    pub overburden_kpa: f64,

    /// Unit skin resistance τ = αc (kPa)
    pub unit_skin_resistance_kpa: f64,

    /// Skin-friction capacity Q_skin (kN)
    pub skin_capacity_kn: f64,

    /// Bearing capacity factor Nq
    pub bearing_factor_nq: f64,

    /// End-bearing capacity Q_base (kN)
    pub base_capacity_kn: f64,

    /// Ultimate capacity Q_total = Q_skin + Q_base (kN)
    pub total_capacity_kn: f64,
}

impl PileCapacityResult {
    /// Share of the total capacity carried by skin friction (0.0 to 1.0)
    pub fn skin_fraction(&self) -> f64 {
        self.skin_capacity_kn / self.total_capacity_kn
    }
}

/// Ultimate capacity of a single pile, unvalidated.
///
/// Evaluates the capacity formula directly on the raw parameters. No input
/// checks are made: a non-positive diameter or a friction angle of 90° or
/// more produces a degenerate or non-finite value rather than an error. Use
/// [`calculate`] when the inputs come from a user.
///
/// `concrete_unit_weight` is accepted for interface compatibility and does
/// not affect the result.
pub fn capacity(
    diameter: f64,
    length: f64,
    concrete_unit_weight: f64,
    soil_unit_weight: f64,
    friction_angle_deg: f64,
    adhesion_factor: f64,
    cohesion: f64,
) -> f64 {
    trace!(
        "pile capacity: d={} L={} gamma_c={} gamma_s={} phi={} alpha={} c={}",
        diameter,
        length,
        concrete_unit_weight,
        soil_unit_weight,
        friction_angle_deg,
        adhesion_factor,
        cohesion
    );
    evaluate(diameter, length, soil_unit_weight, friction_angle_deg, adhesion_factor, cohesion)
        .total_capacity_kn
}

/// Calculate single pile capacity.
///
/// # Arguments
///
/// * `input` - Pile geometry and soil parameters
///
/// # Returns
///
/// * `Ok(PileCapacityResult)` - Capacity with every intermediate quantity
/// * `Err(CalcError)` - If inputs are invalid or the capacity is not positive
pub fn calculate(input: &PileInput) -> CalcResult<PileCapacityResult> {
    input.validate()?;

    debug!(
        "{}: concrete unit weight {} kN/m³ does not enter the capacity formula",
        input.label, input.concrete_unit_weight_knm3
    );

    let result = evaluate(
        input.diameter_m,
        input.length_m,
        input.soil_unit_weight_knm3,
        input.friction_angle_deg,
        input.adhesion_factor,
        input.cohesion_kpa,
    );

    debug!(
        "{}: A={:.4} m², P={:.4} m, σv={:.2} kPa, τ={:.2} kPa, Nq={:.4}",
        input.label,
        result.base_area_m2,
        result.perimeter_m,
        result.overburden_kpa,
        result.unit_skin_resistance_kpa,
        result.bearing_factor_nq
    );
    debug!(
        "{}: Q_skin={:.3} kN, Q_base={:.3} kN, Q_total={:.3} kN",
        input.label, result.skin_capacity_kn, result.base_capacity_kn, result.total_capacity_kn
    );

    // e^(π·tan φ) overflows for φ above roughly 89.7°
    if !(result.total_capacity_kn.is_finite() && result.total_capacity_kn > 0.0) {
        return Err(CalcError::calculation_failed(
            "Pile Capacity",
            format!(
                "capacity evaluated to {} kN - check the friction angle",
                result.total_capacity_kn
            ),
        ));
    }

    debug!(
        "{}: skin friction carries {:.1}% of the capacity",
        input.label,
        result.skin_fraction() * 100.0
    );

    Ok(result)
}

fn evaluate(
    diameter: f64,
    length: f64,
    soil_unit_weight: f64,
    friction_angle_deg: f64,
    adhesion_factor: f64,
    cohesion: f64,
) -> PileCapacityResult {
    let base_area_m2 = base_area(diameter);
    let perimeter_m = shaft_perimeter(diameter);
    let overburden_kpa = overburden_stress(soil_unit_weight, length);
    let unit_skin_resistance_kpa = unit_skin_resistance(adhesion_factor, cohesion);
    let skin_capacity_kn = skin_capacity(unit_skin_resistance_kpa, perimeter_m, length);
    let bearing_factor_nq = bearing_capacity_factor_nq(friction_angle_deg);
    let base_capacity_kn = base_capacity(base_area_m2, bearing_factor_nq, overburden_kpa);

    PileCapacityResult {
        base_area_m2,
        perimeter_m,
        overburden_kpa,
        unit_skin_resistance_kpa,
        skin_capacity_kn,
        bearing_factor_nq,
        base_capacity_kn,
        total_capacity_kn: skin_capacity_kn + base_capacity_kn,
    }
}
