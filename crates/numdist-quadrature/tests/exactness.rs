//! Property tests for the Gauss-Legendre rule
//!
//! An n-point rule must integrate every polynomial of degree at most
//! `2n - 1` exactly (up to rounding), on any finite interval and in either
//! direction.

use approx::assert_abs_diff_eq;
use numdist_quadrature::{fixed, FixedRule, GaussLegendre};
use proptest::prelude::*;

/// Evaluate a polynomial with coefficients in ascending order
fn horner(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Exact integral of the polynomial over `[lo, hi]`
fn exact_integral(coefs: &[f64], lo: f64, hi: f64) -> f64 {
    coefs
        .iter()
        .enumerate()
        .map(|(k, &c)| {
            let power = (k + 1) as i32;
            c * (hi.powi(power) - lo.powi(power)) / power as f64
        })
        .sum()
}

/// Upper bound on the size of the terms summed by the rule, used to scale
/// the rounding tolerance
fn magnitude(coefs: &[f64], lo: f64, hi: f64) -> f64 {
    let reach = lo.abs().max(hi.abs());
    let peak: f64 = coefs
        .iter()
        .enumerate()
        .map(|(k, &c)| c.abs() * reach.powi(k as i32))
        .sum();
    1.0 + peak * (hi - lo)
}

proptest! {
    #[test]
    fn prop_polynomials_up_to_degree_2n_minus_1_are_exact(
        n in 1usize..12,
        seed_coefs in prop::collection::vec(-2.0f64..2.0, 24),
        lo in -2.0f64..0.0,
        width in 0.1f64..2.0,
    ) {
        let degree = 2 * n - 1;
        let coefs = &seed_coefs[..=degree];
        let hi = lo + width;
        let rule = GaussLegendre::new(n);

        let value = fixed(|x| horner(coefs, x), lo, hi, &rule);
        let exact = exact_integral(coefs, lo, hi);
        let scale = magnitude(coefs, lo, hi);
        prop_assert!(
            (value - exact).abs() <= 1e-10 * scale,
            "n={n} degree={degree}: got {value}, expected {exact}"
        );
    }

    #[test]
    fn prop_swapping_bounds_negates(
        lo in -5.0f64..5.0,
        hi in -5.0f64..5.0,
    ) {
        let rule = GaussLegendre::new(16);
        let forward = fixed(f64::cos, lo, hi, &rule);
        let backward = fixed(f64::cos, hi, lo, &rule);
        prop_assert_eq!(forward, -backward);
    }

    #[test]
    fn prop_locations_stay_inside_interval(
        n in 1usize..64,
        lo in -100.0f64..100.0,
        width in 1e-3f64..50.0,
    ) {
        let rule = GaussLegendre::new(n);
        let hi = lo + width;
        let (nodes, weights) = rule.locations(lo, hi);
        prop_assert_eq!(nodes.len(), n);
        prop_assert!(nodes.iter().all(|&x| x >= lo && x <= hi));
        let total: f64 = weights.iter().sum();
        prop_assert!((total - width).abs() <= 1e-10 * width.max(1.0));
    }
}

#[test]
fn test_degree_2n_is_not_exact() {
    // x^2 with one point: the midpoint rule misses by 2/3 on [-1, 1]
    let rule = GaussLegendre::new(1);
    let value = fixed(|x| x * x, -1.0, 1.0, &rule);
    assert_abs_diff_eq!(value, 0.0);
    assert!((value - 2.0 / 3.0).abs() > 0.5);
}
