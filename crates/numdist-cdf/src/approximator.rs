//! CDF approximation by fixed-order integration of a density

use crate::parameters::CdfParameters;
use numdist_core::precondition::{check_bound, check_order};
use numdist_core::{Cdf, Density};
use numdist_quadrature::{fixed, FixedRule, GaussLegendre};
use std::fmt;
use tracing::debug;

/// Approximate CDF of a density
///
/// `cdf(x)` is the integral of the density over `[lower_bound, x]`, computed
/// with a fixed quadrature rule. The rule's reference nodes are computed once
/// at construction and reused for every query.
///
/// Accuracy depends only on the rule's order and on the smoothness of the
/// density. The density must be finite at every point the rule samples
/// between the lower bound and the queried `x`; this is not checked.
#[derive(Clone)]
pub struct ApproxCdf<F, R = GaussLegendre> {
    density: F,
    lower_bound: f64,
    rule: R,
}

impl<F: Density> ApproxCdf<F, GaussLegendre> {
    /// Approximate the CDF of `density` with an `n`-point Gauss-Legendre rule
    ///
    /// # Panics
    /// If `n == 0` or `lower_bound` is NaN.
    pub fn new(density: F, lower_bound: f64, n: usize) -> Self {
        check_order(n);
        Self::with_rule(density, lower_bound, GaussLegendre::new(n))
    }

    /// Approximate the CDF of `density` from a parameter set
    pub fn with_parameters(density: F, params: CdfParameters) -> Self {
        Self::new(density, params.lower_bound, params.order)
    }
}

impl<F: Density, R: FixedRule> ApproxCdf<F, R> {
    /// Approximate the CDF of `density` with an arbitrary fixed rule
    ///
    /// # Panics
    /// If `lower_bound` is NaN.
    pub fn with_rule(density: F, lower_bound: f64, rule: R) -> Self {
        check_bound(lower_bound);
        debug!(order = rule.order(), lower_bound, "Building approximate CDF");
        Self {
            density,
            lower_bound,
            rule,
        }
    }

    /// Integral of the density over `[lower_bound, x]`
    ///
    /// For `x < lower_bound` this is the negated integral over
    /// `[x, lower_bound]`.
    pub fn cdf(&self, x: f64) -> f64 {
        fixed(|t| self.density.pdf(t), self.lower_bound, x, &self.rule)
    }

    /// Borrow this approximation as a plain closure
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.cdf(x)
    }

    /// Evaluate the underlying density
    pub fn pdf(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Number of quadrature nodes
    pub fn order(&self) -> usize {
        self.rule.order()
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Parameters equivalent to this approximation
    pub fn parameters(&self) -> CdfParameters {
        CdfParameters::new(self.lower_bound, self.rule.order())
    }
}

impl<F: Density, R: FixedRule> Cdf for ApproxCdf<F, R> {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        ApproxCdf::cdf(self, x)
    }
}

impl<F, R: FixedRule> fmt::Debug for ApproxCdf<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApproxCdf")
            .field("lower_bound", &self.lower_bound)
            .field("order", &self.rule.order())
            .finish_non_exhaustive()
    }
}

/// Approximate the CDF of `f` on `[lb, x]` with an `n`-point rule
///
/// Returns a closure that can be passed straight to the quantile search.
///
/// ```rust
/// use numdist_cdf::approx_cdf;
///
/// let exponential = |x: f64| (-x).exp();
/// let cdf = approx_cdf(exponential, 0.0, 64);
/// assert!((cdf(1.0) - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
/// ```
///
/// # Panics
/// If `n == 0` or `lb` is NaN.
pub fn approx_cdf<F>(f: F, lb: f64, n: usize) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let approx = ApproxCdf::new(f, lb, n);
    move |x| approx.cdf(x)
}
