//! Property tests for the capacity formula and the pile count estimate.

use pile_core::calculations::{capacity, pile_count};
use proptest::prelude::*;

fn reference_capacity(length: f64, soil: f64, alpha: f64, cohesion: f64) -> f64 {
    capacity(0.6, length, 24.0, soil, 28.0, alpha, cohesion)
}

proptest! {
    #[test]
    fn capacity_is_deterministic(
        d in 0.1f64..3.0,
        l in 1.0f64..60.0,
        gs in 10.0f64..25.0,
        phi in 0.0f64..45.0,
        alpha in 0.0f64..1.5,
        c in 0.0f64..200.0,
    ) {
        let a = capacity(d, l, 24.0, gs, phi, alpha, c);
        let b = capacity(d, l, 24.0, gs, phi, alpha, c);
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert!(a > 0.0);
    }

    #[test]
    fn capacity_non_decreasing_in_length(l in 1.0f64..50.0, dl in 0.0f64..10.0) {
        let larger = reference_capacity(l + dl, 18.0, 0.5, 20.0);
        let smaller = reference_capacity(l, 18.0, 0.5, 20.0);
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn capacity_non_decreasing_in_soil_weight(gs in 10.0f64..25.0, dg in 0.0f64..5.0) {
        let larger = reference_capacity(10.0, gs + dg, 0.5, 20.0);
        let smaller = reference_capacity(10.0, gs, 0.5, 20.0);
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn capacity_non_decreasing_in_adhesion(alpha in 0.0f64..1.5, da in 0.0f64..0.5) {
        let larger = reference_capacity(10.0, 18.0, alpha + da, 20.0);
        let smaller = reference_capacity(10.0, 18.0, alpha, 20.0);
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn capacity_non_decreasing_in_cohesion(c in 0.0f64..200.0, dc in 0.0f64..50.0) {
        let larger = reference_capacity(10.0, 18.0, 0.5, c + dc);
        let smaller = reference_capacity(10.0, 18.0, 0.5, c);
        prop_assert!(larger >= smaller);
    }

    #[test]
    fn pile_count_is_minimal(load in 1.0f64..1.0e6, cap in 1.0f64..5.0e3) {
        let n = pile_count(load, cap).unwrap();
        prop_assert!(n >= 1);
        prop_assert!((n as f64) * cap >= load);
        if n > 1 {
            prop_assert!(((n - 1) as f64) * cap < load);
        }
    }

    #[test]
    fn pile_count_of_capacity_is_one(cap in 1.0e-3f64..1.0e6) {
        prop_assert_eq!(pile_count(cap, cap).unwrap(), 1);
    }

    #[test]
    fn non_positive_capacity_never_counts(load in 1.0f64..1.0e6, cap in -1.0e3f64..=0.0) {
        prop_assert!(pile_count(load, cap).is_err());
    }
}
