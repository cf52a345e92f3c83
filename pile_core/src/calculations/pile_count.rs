//! # Pile Count Estimate
//!
//! Minimum number of identical piles whose combined ultimate capacity meets
//! or exceeds a total foundation load. No group efficiency reduction is
//! applied: the group capacity is taken as `n × Q_single`.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::calculations::pile_count::pile_count;
//!
//! assert_eq!(pile_count(1000.0, 250.0).unwrap(), 4);
//! assert_eq!(pile_count(1000.0, 249.0).unwrap(), 5);
//! assert!(pile_count(500.0, 0.0).is_err());
//! ```

use log::debug;

use crate::errors::{CalcError, CalcResult};

/// Largest count that converts to `f64` without rounding (2^53)
const MAX_EXACT_COUNT: u64 = 1 << 53;

/// Smallest `n` such that `n × single_pile_capacity_kn ≥ total_load_kn`.
///
/// Computed as `ceil(total_load / capacity)`, then nudged by one where the
/// quotient rounded across an integer so that the returned count satisfies
/// the inequality as evaluated in `f64`.
///
/// # Errors
///
/// * [`CalcError::Division`] - capacity is zero, negative, NaN or infinite
/// * [`CalcError::InvalidInput`] - total load is not a positive finite number
/// * [`CalcError::CalculationFailed`] - the count is too large to represent
pub fn pile_count(total_load_kn: f64, single_pile_capacity_kn: f64) -> CalcResult<u64> {
    if !(single_pile_capacity_kn.is_finite() && single_pile_capacity_kn > 0.0) {
        return Err(CalcError::division(total_load_kn, single_pile_capacity_kn));
    }
    if !(total_load_kn.is_finite() && total_load_kn > 0.0) {
        return Err(CalcError::invalid_input(
            "total_load_kn",
            total_load_kn.to_string(),
            "Total load must be a positive number",
        ));
    }

    let quotient = (total_load_kn / single_pile_capacity_kn).ceil();
    if quotient > MAX_EXACT_COUNT as f64 {
        return Err(CalcError::calculation_failed(
            "Pile Count",
            format!(
                "{} kN over {} kN per pile exceeds {} piles",
                total_load_kn, single_pile_capacity_kn, MAX_EXACT_COUNT
            ),
        ));
    }

    let mut count = quotient as u64;
    if (count as f64) * single_pile_capacity_kn < total_load_kn {
        count += 1;
    } else if count > 1 && ((count - 1) as f64) * single_pile_capacity_kn >= total_load_kn {
        count -= 1;
    }

    debug!(
        "pile count: {} kN / {} kN per pile -> {} piles",
        total_load_kn, single_pile_capacity_kn, count
    );

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        assert_eq!(pile_count(1000.0, 250.0).unwrap(), 4);
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(pile_count(1000.0, 251.0).unwrap(), 4);
        assert_eq!(pile_count(1000.0, 249.0).unwrap(), 5);
    }

    #[test]
    fn test_load_equal_to_capacity() {
        assert_eq!(pile_count(807.43, 807.43).unwrap(), 1);
    }

    #[test]
    fn test_load_below_capacity() {
        assert_eq!(pile_count(10.0, 807.43).unwrap(), 1);
    }

    #[test]
    fn test_zero_capacity_is_division_error() {
        match pile_count(500.0, 0.0) {
            Err(CalcError::Division { .. }) => {}
            other => panic!("expected Division error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_and_nan_capacity() {
        assert_eq!(pile_count(500.0, -10.0).unwrap_err().error_code(), "DIVISION_ERROR");
        assert_eq!(pile_count(500.0, f64::NAN).unwrap_err().error_code(), "DIVISION_ERROR");
        assert_eq!(pile_count(500.0, f64::INFINITY).unwrap_err().error_code(), "DIVISION_ERROR");
    }

    #[test]
    fn test_invalid_total_load() {
        assert_eq!(pile_count(0.0, 250.0).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(pile_count(-5.0, 250.0).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_count_overflow() {
        let err = pile_count(1e300, 1e-300).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_quotient_rounded_down_to_integer() {
        // load / cap evaluates to exactly 36.0, but 36 × cap falls one ulp short
        let (load, cap): (f64, f64) = (78821.79046176582, 2189.494179493495);
        assert_eq!((load / cap).ceil(), 36.0);
        assert!(36.0 * cap < load);

        let n = pile_count(load, cap).unwrap();
        assert_eq!(n, 37);
        assert!((n as f64) * cap >= load);
    }

    #[test]
    fn test_quotient_rounded_up_past_integer() {
        // load / cap evaluates to 31.000000000000004, yet 31 × cap == load
        let (load, cap): (f64, f64) = (260.3899390508822, 8.399675453254265);
        assert_eq!((load / cap).ceil(), 32.0);
        assert_eq!(31.0 * cap, load);

        assert_eq!(pile_count(load, cap).unwrap(), 31);
    }

    #[test]
    fn test_decimal_rounding_edge() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996
        let n = pile_count(0.3, 0.1).unwrap();
        assert!((n as f64) * 0.1 >= 0.3);
        assert!(((n - 1) as f64) * 0.1 < 0.3);
    }
}
