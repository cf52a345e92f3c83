//! Plain-text result report.

use std::io::{self, Write};

use pile_core::FoundationResult;

/// Round to two decimal places.
///
/// Goes through the exact decimal expansion so ties resolve the same way as
/// printing with `{:.2}`.
pub fn round_2dp(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Magnitude from which values are printed in exponent form
const EXPONENT_THRESHOLD: f64 = 1e16;

/// Shortest decimal form of a value rounded to two places, keeping one
/// fractional digit for whole numbers (`807.43`, `806.7`, `1000.0`).
/// Magnitudes of 1e16 and above use exponent form with a signed,
/// two-digit-minimum exponent (`6.786636108705133e+83`).
pub fn format_rounded(value: f64) -> String {
    let rounded = round_2dp(value);
    if rounded.is_finite() && rounded.abs() >= EXPONENT_THRESHOLD {
        format_exponent(rounded)
    } else if rounded.is_finite() && rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        rounded.to_string()
    }
}

fn format_exponent(value: f64) -> String {
    let shortest = format!("{:e}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => shortest,
        },
        None => shortest,
    }
}

/// Write the capacity and pile count lines.
pub fn write_report<W: Write>(output: &mut W, result: &FoundationResult) -> io::Result<()> {
    writeln!(
        output,
        "The load-carrying capacity of a single pile is: {} kN",
        format_rounded(result.pile.total_capacity_kn)
    )?;
    writeln!(output, "The number of piles required is: {}", result.piles_required)?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rounded() {
        assert_eq!(format_rounded(807.428_974_455_649_2), "807.43");
        assert_eq!(format_rounded(806.699), "806.7");
        assert_eq!(format_rounded(1000.0), "1000.0");
        assert_eq!(format_rounded(192.422_550_032), "192.42");
        assert_eq!(format_rounded(0.004), "0.0");
    }

    #[test]
    fn test_format_rounded_large_values() {
        assert_eq!(format_rounded(9_999_999_999_999_998.0), "9999999999999998.0");
        assert_eq!(format_rounded(1e16), "1e+16");
        assert_eq!(format_rounded(1.234_567_890_123_456_8e17), "1.2345678901234568e+17");
        assert_eq!(format_rounded(6.786_636_108_705_133e83), "6.786636108705133e+83");
        assert_eq!(format_rounded(2.5e100), "2.5e+100");
    }

    #[test]
    fn test_round_2dp() {
        assert_eq!(round_2dp(924.844_544_859_691_7), 924.84);
        assert_eq!(round_2dp(3.14159), 3.14);
    }
}
