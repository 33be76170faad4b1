//! Definite integrals over finite and infinite intervals with a fixed rule
//!
//! Infinite bounds are handled by a change of variables onto a finite
//! interval:
//!
//! | bounds          | substitution            | dx/dt                      | t range   |
//! |-----------------|-------------------------|----------------------------|-----------|
//! | `(-inf, inf)`   | `x = t / (1 - t^2)`     | `(1 + t^2) / (1 - t^2)^2`  | `[-1, 1]` |
//! | `(-inf, hi]`    | `x = hi - (1 - t) / t`  | `1 / t^2`                  | `[0, 1]`  |
//! | `[lo, inf)`     | `x = lo + t / (1 - t)`  | `1 / (1 - t)^2`            | `[0, 1]`  |
//!
//! The Gauss-Legendre rule never samples the end points of its interval, so
//! the transformed integrands are never evaluated where `dx/dt` diverges.

use crate::legendre::GaussLegendre;
use crate::rule::FixedRule;
use numdist_core::precondition::check_bound;

/// Integrate `f` over `[lo, hi]` with a fixed rule
///
/// Either bound may be infinite. If `lo > hi` the result is the negated
/// integral over `[hi, lo]`, and `lo == hi` yields zero.
///
/// The caller must ensure `f` is finite at every point the rule samples.
///
/// # Panics
/// If either bound is NaN.
pub fn fixed<F, R>(f: F, lo: f64, hi: f64, rule: &R) -> f64
where
    F: Fn(f64) -> f64,
    R: FixedRule,
{
    check_bound(lo);
    check_bound(hi);

    if lo == hi {
        return 0.0;
    }
    if lo > hi {
        return -fixed(f, hi, lo, rule);
    }

    match (lo.is_infinite(), hi.is_infinite()) {
        (true, true) => rule.integrate(
            |t| {
                let div = 1.0 - t * t;
                let x = t / div;
                let dxdt = (1.0 + t * t) / (div * div);
                f(x) * dxdt
            },
            -1.0,
            1.0,
        ),
        (true, false) => rule.integrate(
            |t| {
                let x = hi - (1.0 - t) / t;
                let dxdt = 1.0 / (t * t);
                f(x) * dxdt
            },
            0.0,
            1.0,
        ),
        (false, true) => rule.integrate(
            |t| {
                let div = 1.0 - t;
                let x = lo + t / div;
                let dxdt = 1.0 / (div * div);
                f(x) * dxdt
            },
            0.0,
            1.0,
        ),
        (false, false) => rule.integrate(f, lo, hi),
    }
}

/// Integrate `f` over `[lo, hi]` with an n-point Gauss-Legendre rule
///
/// Convenience wrapper around [`fixed`] that builds the rule on every call.
/// Keep a [`GaussLegendre`] around and call [`fixed`] directly when
/// integrating repeatedly with the same order.
///
/// # Panics
/// If `n == 0` or either bound is NaN.
pub fn fixed_legendre<F>(f: F, lo: f64, hi: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    fixed(f, lo, hi, &GaussLegendre::new(n))
}
