//! Contract checks that abort on caller error
//!
//! Every check panics when its condition does not hold. NaN never satisfies
//! a check, so a NaN probability, bound or tolerance aborts as well.

/// Smallest bracket-width tolerance the quantile search accepts
pub const MIN_EPS: f64 = 1e-15;

/// Assert that `p` lies strictly inside (0, 1)
#[track_caller]
pub fn check_probability(p: f64) {
    assert!(
        p > 0.0 && p < 1.0,
        "invalid probability {p}: p must satisfy 0 < p < 1"
    );
}

/// Assert that `[a, b]` is a valid search bracket
#[track_caller]
pub fn check_bracket(a: f64, b: f64) {
    assert!(
        a <= b,
        "invalid bracket [{a}, {b}]: lower bound must not exceed upper bound"
    );
}

/// Assert that `eps` is not finer than [`MIN_EPS`]
#[track_caller]
pub fn check_eps(eps: f64) {
    assert!(
        eps >= MIN_EPS,
        "tolerance {eps} is too small: eps must be at least {MIN_EPS}"
    );
}

/// Assert that a quadrature order is usable
#[track_caller]
pub fn check_order(n: usize) {
    assert!(n > 0, "number of quadrature points must be positive");
}

/// Assert that an integration bound is not NaN (infinities are allowed)
#[track_caller]
pub fn check_bound(x: f64) {
    assert!(!x.is_nan(), "integration bound must not be NaN");
}
