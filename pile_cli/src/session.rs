//! Interactive prompt session.
//!
//! Reads the eight numeric inputs in a fixed order, runs the foundation
//! calculation and writes the two-line report. Parsing stops at the first
//! response that is not a number.

use std::io::{self, BufRead, Write};

use log::debug;
use pile_core::calculations::foundation::{self, FoundationInput, FoundationResult};
use pile_core::calculations::pile_capacity::PileInput;
use pile_core::CalcError;
use thiserror::Error;

use crate::report;

/// Field names and prompt text, in the order they are asked.
pub const PROMPTS: [(&str, &str); 8] = [
    ("total_load_kn", "Enter the total load on the foundation (in kN): "),
    ("diameter_m", "Enter the diameter of the pile (in meters): "),
    ("length_m", "Enter the length of the pile (in meters): "),
    ("concrete_unit_weight_knm3", "Enter the unit weight of concrete (in kN/m³): "),
    ("soil_unit_weight_knm3", "Enter the unit weight of soil (in kN/m³): "),
    ("friction_angle_deg", "Enter the angle of internal friction (in degrees): "),
    ("adhesion_factor", "Enter the adhesion factor: "),
    ("cohesion_kpa", "Enter the cohesion (in kPa): "),
];

/// Everything that can end a session early.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A response could not be read as a number (or input ended early)
    #[error("'{raw}' is not a number for {field}")]
    InputFormat { field: &'static str, raw: String },

    /// The numbers parsed but the calculation rejected them
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Reading stdin or writing stdout failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Parse one prompt response as a real number, accepting surrounding
/// whitespace. `nan`, `inf` and `infinity` are not real numbers and are
/// rejected along with anything else that does not parse.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: &'static str,
    prompt: &str,
) -> Result<f64, SessionError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::InputFormat {
            field,
            raw: String::new(),
        });
    }

    let value = parse_number(&line).ok_or_else(|| SessionError::InputFormat {
        field,
        raw: line.trim().to_string(),
    })?;
    debug!("{} = {}", field, value);
    Ok(value)
}

/// Ask every prompt in order and assemble the foundation input.
pub fn read_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FoundationInput, SessionError> {
    let mut values = [0.0_f64; PROMPTS.len()];
    for (slot, (field, prompt)) in values.iter_mut().zip(PROMPTS) {
        *slot = prompt_f64(input, output, field, prompt)?;
    }

    let [total_load_kn, diameter_m, length_m, concrete, soil, phi, alpha, cohesion] = values;
    Ok(FoundationInput {
        label: "CLI".to_string(),
        total_load_kn,
        pile: PileInput {
            label: "CLI".to_string(),
            diameter_m,
            length_m,
            concrete_unit_weight_knm3: concrete,
            soil_unit_weight_knm3: soil,
            friction_angle_deg: phi,
            adhesion_factor: alpha,
            cohesion_kpa: cohesion,
        },
    })
}

/// Run a full session: prompts, calculation, report.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FoundationResult, SessionError> {
    let foundation_input = read_inputs(input, output)?;
    let result = foundation::calculate(&foundation_input)?;
    report::write_report(output, &result)?;
    Ok(result)
}
