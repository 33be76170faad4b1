//! Bisection search for quantiles
//!
//! The search works on the probability axis rather than on a sign change.
//! With `pa = F(a)` and `pb = F(b)` known, each step evaluates `pc = F(c)` at
//! the midpoint `c` and keeps the half whose probability interval contains
//! the target:
//!
//! 1. `pa <= p < pc`: continue on `[a, c]` with `(pa, pc)`
//! 2. `pc <= p < pb`: continue on `[c, b]` with `(pc, pb)`
//! 3. otherwise the target is not bracketed and the search fails
//!
//! Both tests are half-open and the lower half is tested first, so a target
//! equal to `pc` moves to the upper half and a target equal to the outermost
//! `pb` is reported as out of range.
//!
//! Endpoint probabilities are carried from step to step, so each step costs
//! exactly one CDF evaluation.
//!
//! A midpoint that is not finite (an infinite or overflowing bracket) is
//! reported as out of range without evaluating the CDF. A midpoint that
//! rounds onto an end point is still classified first; if the target is
//! bracketed the search stops there as converged.

use crate::parameters::SolverParameters;
use numdist_core::precondition::{check_bracket, check_eps, check_probability};
use numdist_core::{Cdf, Error, Result};
use tracing::{debug, instrument, trace};

/// Outcome of a converged bisection search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    /// Midpoint of the final bracket
    pub value: f64,

    /// Number of halving steps taken
    pub iterations: usize,

    /// Number of CDF evaluations, including the two endpoint evaluations
    pub evaluations: usize,

    /// Final bracket `(a, b)`, narrower than `eps` unless floating-point
    /// resolution was reached first
    pub bracket: (f64, f64),
}

impl Bisection {
    /// Width of the final bracket
    pub fn width(&self) -> f64 {
        self.bracket.1 - self.bracket.0
    }
}

/// Quantile search by bisection over a monotone CDF
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BisectionSolver {
    params: SolverParameters,
}

impl BisectionSolver {
    /// Create a solver that stops once the bracket is narrower than `eps`
    ///
    /// # Panics
    /// If `eps` is below [`numdist_core::MIN_EPS`] or NaN.
    pub fn new(eps: f64) -> Self {
        Self::with_parameters(SolverParameters::new(eps))
    }

    /// Create a solver from a parameter set
    ///
    /// # Panics
    /// If `params.eps` is below [`numdist_core::MIN_EPS`] or NaN.
    pub fn with_parameters(params: SolverParameters) -> Self {
        check_eps(params.eps);
        Self { params }
    }

    pub fn parameters(&self) -> &SolverParameters {
        &self.params
    }

    pub fn eps(&self) -> f64 {
        self.params.eps
    }

    /// Find `x` in `[a, b]` with `cdf(x) ~ p`
    ///
    /// Returns the midpoint of the final bracket. See [`BisectionSolver::search`]
    /// for the failure and abort conditions.
    pub fn solve<C: Cdf + ?Sized>(&self, cdf: &C, p: f64, a: f64, b: f64) -> Result<f64> {
        self.search(cdf, p, a, b).map(|outcome| outcome.value)
    }

    /// Run the search and report how it converged
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if at some step `p` is outside the probability
    /// interval of the current bracket, or if the bracket has no finite
    /// midpoint. The error's sentinel is `a`.
    ///
    /// # Panics
    /// Before any CDF evaluation, if `p` is not strictly inside (0, 1), if
    /// `a > b`, or if the tolerance is below [`numdist_core::MIN_EPS`].
    #[instrument(level = "debug", skip(self, cdf), fields(eps = self.params.eps))]
    pub fn search<C: Cdf + ?Sized>(&self, cdf: &C, p: f64, a: f64, b: f64) -> Result<Bisection> {
        check_probability(p);
        check_bracket(a, b);
        check_eps(self.params.eps);

        let eps = self.params.eps;
        let (lower, upper) = (a, b);
        let (mut a, mut b) = (a, b);
        let mut pa = cdf.cdf(a);
        let mut pb = cdf.cdf(b);
        let mut evaluations = 2;
        let mut iterations = 0;

        loop {
            let c = (a + b) / 2.0;
            if b - a < eps {
                debug!(value = c, iterations, evaluations, "Bisection converged");
                return Ok(Bisection {
                    value: c,
                    iterations,
                    evaluations,
                    bracket: (a, b),
                });
            }
            if !c.is_finite() {
                debug!(a, b, iterations, "Midpoint of search range is not finite");
                return Err(Error::out_of_range(p, lower, upper, pa, pb));
            }

            let pc = cdf.cdf(c);
            evaluations += 1;

            let (next_a, next_b) = if pa <= p && p < pc {
                pb = pc;
                (a, c)
            } else if pc <= p && p < pb {
                pa = pc;
                (c, b)
            } else {
                debug!(pa, pc, pb, iterations, "Value of interest outside of search range");
                return Err(Error::out_of_range(p, lower, upper, pa, pb));
            };

            if next_a == a && next_b == b {
                // c rounded onto an end point, the bracket cannot shrink further
                debug!(value = c, iterations, evaluations, "Bisection reached float resolution");
                return Ok(Bisection {
                    value: c,
                    iterations,
                    evaluations,
                    bracket: (a, b),
                });
            }

            a = next_a;
            b = next_b;
            iterations += 1;
            trace!(a, b, pa, pb, "Bisection step");
        }
    }
}

/// Approximate the value `x` with `cdf(x) = p` by bisection on `[a, b]`
///
/// `cdf` must be non-decreasing. The search stops once the bracket is
/// narrower than `eps` and returns its midpoint.
///
/// ```rust
/// use numdist_quantile::quantile;
///
/// let uniform = |x: f64| x.clamp(0.0, 1.0);
/// let median = quantile(uniform, 0.5, 0.0, 1.0, 1e-9).unwrap();
/// assert!((median - 0.5).abs() < 1e-9);
/// ```
///
/// # Errors
/// [`Error::OutOfRange`] if `p` is not bracketed by the probabilities of the
/// search interval. [`Error::sentinel`] then yields `a`.
///
/// # Panics
/// If `p` is not strictly inside (0, 1), if `a > b`, or if
/// `eps < MIN_EPS`.
pub fn quantile<F>(cdf: F, p: f64, a: f64, b: f64, eps: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    check_probability(p);
    check_bracket(a, b);
    BisectionSolver::new(eps).solve(&cdf, p, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::Cell;

    fn uniform(x: f64) -> f64 {
        x.clamp(0.0, 1.0)
    }

    #[test]
    fn test_uniform_quantiles() {
        for &p in &[0.01, 0.25, 0.5, 0.9, 0.999] {
            let x = quantile(uniform, p, 0.0, 1.0, 1e-12).unwrap();
            assert_abs_diff_eq!(x, p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_width_halves_each_step() {
        let outcome = BisectionSolver::new(1.0 / 1024.0)
            .search(&uniform, 0.3, 0.0, 1.0)
            .unwrap();
        // 1 / 2^k < 1 / 1024 first holds for k = 11
        assert_eq!(outcome.iterations, 11);
        assert_eq!(outcome.width(), 1.0 / 2048.0);
        assert_eq!(outcome.evaluations, outcome.iterations + 2);
    }

    #[test]
    fn test_threads_endpoint_probabilities() {
        let calls = Cell::new(0usize);
        let counting = |x: f64| {
            calls.set(calls.get() + 1);
            uniform(x)
        };
        let outcome = BisectionSolver::new(1e-6).search(&counting, 0.7, 0.0, 1.0).unwrap();
        assert_eq!(calls.get(), outcome.evaluations);
        assert_eq!(calls.get(), outcome.iterations + 2);
    }

    #[test]
    fn test_converged_immediately_on_narrow_bracket() {
        let outcome = BisectionSolver::new(0.5).search(&uniform, 0.3, 0.2, 0.4).unwrap();
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.evaluations, 2);
        assert_abs_diff_eq!(outcome.value, 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_degenerate_bracket_converges() {
        let x = quantile(uniform, 0.5, 0.75, 0.75, 1e-6).unwrap();
        assert_eq!(x, 0.75);
    }

    #[test]
    fn test_target_at_midpoint_probability_moves_up() {
        // F(0.5) = 0.5 exactly: [pa, pc) = [0, 0.5) misses, [pc, pb) = [0.5, 1) hits
        let outcome = BisectionSolver::new(0.3).search(&uniform, 0.5, 0.0, 1.0).unwrap();
        assert_eq!(outcome.bracket, (0.5, 0.75));
    }

    #[test]
    fn test_target_below_pc_moves_down() {
        let outcome = BisectionSolver::new(0.3).search(&uniform, 0.49, 0.0, 1.0).unwrap();
        assert_eq!(outcome.bracket, (0.25, 0.5));
    }

    #[test]
    fn test_target_equal_to_upper_probability_is_out_of_range() {
        // F(0.8) = 0.8 = p, which neither half-open test accepts
        let err = quantile(uniform, 0.8, 0.0, 0.8, 1e-6).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(err.sentinel(), 0.0);
    }

    #[test]
    fn test_target_equal_to_lower_probability_converges() {
        let x = quantile(uniform, 0.2, 0.2, 0.9, 1e-9).unwrap();
        assert_abs_diff_eq!(x, 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range_reports_original_bracket() {
        let err = quantile(uniform, 0.9, 0.1, 0.5, 1e-6).unwrap_err();
        match err {
            Error::OutOfRange { p, a, b, pa, pb } => {
                assert_eq!(p, 0.9);
                assert_eq!(a, 0.1);
                assert_eq!(b, 0.5);
                assert_eq!(pa, 0.1);
                assert_eq!(pb, 0.5);
            }
        }
    }

    #[test]
    fn test_float_resolution_terminates() {
        // ulp(1e6) is far above MIN_EPS, so the width never drops below eps
        let shifted = |x: f64| (x - 1e6).clamp(0.0, 1.0);
        let outcome = BisectionSolver::with_parameters(SolverParameters::finest())
            .search(&shifted, 0.5, 1e6, 1e6 + 1.0)
            .unwrap();
        assert!(outcome.width() >= numdist_core::MIN_EPS);
        assert_abs_diff_eq!(outcome.value, 1e6 + 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_unbracketed_target_in_one_ulp_bracket_is_out_of_range() {
        // cdf(b) is about 1e-10, far below the target
        let shifted = |x: f64| (x - 1e6).clamp(0.0, 1.0);
        let b = f64::from_bits(1e6f64.to_bits() + 1);
        let err = BisectionSolver::with_parameters(SolverParameters::finest())
            .search(&shifted, 0.9, 1e6, b)
            .unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(err.sentinel(), 1e6);
    }

    #[test]
    fn test_infinite_lower_bound_is_out_of_range() {
        let logistic = |x: f64| 1.0 / (1.0 + (-x).exp());
        let err = quantile(logistic, 0.5, f64::NEG_INFINITY, 10.0, 1e-6).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(err.sentinel(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_doubly_infinite_bracket_never_evaluates_nan() {
        let calls = Cell::new(0usize);
        let checked = |x: f64| {
            assert!(!x.is_nan(), "cdf evaluated at NaN");
            calls.set(calls.get() + 1);
            1.0 / (1.0 + (-x).exp())
        };
        let err = BisectionSolver::new(1e-6)
            .search(&checked, 0.5, f64::NEG_INFINITY, f64::INFINITY)
            .unwrap_err();
        assert!(err.is_out_of_range());
        // only the two end points
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_overflowing_midpoint_is_out_of_range() {
        let err = quantile(uniform, 0.5, f64::MAX / 2.0 * 1.5, f64::MAX, 1e-6).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    #[should_panic(expected = "invalid probability")]
    fn test_zero_probability_aborts() {
        let _ = quantile(uniform, 0.0, 0.0, 1.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "invalid probability")]
    fn test_unit_probability_aborts() {
        let _ = quantile(uniform, 1.0, 0.0, 1.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "invalid bracket")]
    fn test_inverted_bracket_aborts() {
        let _ = quantile(uniform, 0.5, 1.0, 0.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "too small")]
    fn test_tiny_eps_aborts() {
        let _ = quantile(uniform, 0.5, 0.0, 1.0, 1e-16);
    }

    #[test]
    #[should_panic(expected = "too small")]
    fn test_solver_rejects_tiny_eps_at_construction() {
        let _ = BisectionSolver::new(0.0);
    }

    #[test]
    fn test_aborts_before_evaluating_cdf() {
        let calls = Cell::new(0usize);
        let counting = |x: f64| {
            calls.set(calls.get() + 1);
            uniform(x)
        };
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            BisectionSolver::new(1e-6).search(&counting, 1.5, 0.0, 1.0)
        }));
        assert!(result.is_err());
        assert_eq!(calls.get(), 0);
    }
}
