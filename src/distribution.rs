//! Distributions known only by their density
//!
//! [`ApproxDistribution`] bundles an approximated CDF with a default search
//! bracket and a bisection solver, so that both `cdf(x)` and `quantile(p)`
//! are available from a single density.

use numdist_cdf::{ApproxCdf, CdfParameters};
use numdist_core::precondition::check_bracket;
use numdist_core::{Cdf, Density, Result};
use numdist_quantile::{BisectionSolver, SolverParameters};
use std::fmt;
use tracing::debug;

/// Half-width of the default search bracket
const DEFAULT_REACH: f64 = 1e3;

/// A continuous distribution defined by its density
///
/// The CDF is the numerical integral of the density from its lower bound; the
/// quantile function inverts that CDF by bisection over a search bracket.
///
/// ```rust
/// use numdist::ApproxDistribution;
///
/// let exponential = ApproxDistribution::new(|x: f64| (-x).exp(), 0.0, 300)
///     .with_bracket(0.0, 50.0)
///     .with_eps(1e-9);
/// let median = exponential.quantile(0.5).unwrap();
/// assert!((median - 2f64.ln()).abs() < 1e-8);
/// ```
#[derive(Clone)]
pub struct ApproxDistribution<F> {
    cdf: ApproxCdf<F>,
    bracket: (f64, f64),
    solver: BisectionSolver,
}

impl<F: Density> ApproxDistribution<F> {
    /// Build from a density supported on `[lower_bound, inf)` with an
    /// `n`-point quadrature rule
    ///
    /// The search bracket defaults to `[lower_bound, lower_bound + 1e3]` for a
    /// finite lower bound and to `[-1e3, 1e3]` otherwise.
    ///
    /// # Panics
    /// If `n == 0` or `lower_bound` is NaN.
    pub fn new(pdf: F, lower_bound: f64, n: usize) -> Self {
        Self::with_parameters(
            pdf,
            CdfParameters::new(lower_bound, n),
            SolverParameters::default(),
        )
    }

    /// Build from explicit approximation and search parameters
    pub fn with_parameters(pdf: F, cdf_params: CdfParameters, solver_params: SolverParameters) -> Self {
        let cdf = ApproxCdf::with_parameters(pdf, cdf_params);
        let bracket = default_bracket(cdf_params.lower_bound);
        debug!(?bracket, eps = solver_params.eps, "Building approximate distribution");
        Self {
            cdf,
            bracket,
            solver: BisectionSolver::with_parameters(solver_params),
        }
    }

    /// Replace the default search bracket
    ///
    /// # Panics
    /// If `a > b`.
    pub fn with_bracket(mut self, a: f64, b: f64) -> Self {
        check_bracket(a, b);
        self.bracket = (a, b);
        self
    }

    /// Replace the search tolerance
    ///
    /// # Panics
    /// If `eps` is below [`numdist_core::MIN_EPS`].
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.solver = BisectionSolver::new(eps);
        self
    }

    pub fn pdf(&self, x: f64) -> f64 {
        self.cdf.pdf(x)
    }

    /// Approximate `P(X <= x)`
    pub fn cdf(&self, x: f64) -> f64 {
        self.cdf.cdf(x)
    }

    /// Approximate `P(X > x)`
    pub fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Approximate quantile over the default bracket
    ///
    /// # Errors
    /// [`numdist_core::Error::OutOfRange`] if the bracket does not contain
    /// the quantile.
    ///
    /// # Panics
    /// If `p` is not strictly inside (0, 1).
    pub fn quantile(&self, p: f64) -> Result<f64> {
        let (a, b) = self.bracket;
        self.quantile_in(p, a, b)
    }

    /// Approximate quantile over an explicit bracket `[a, b]`
    ///
    /// # Panics
    /// If `p` is not strictly inside (0, 1) or `a > b`.
    pub fn quantile_in(&self, p: f64, a: f64, b: f64) -> Result<f64> {
        self.solver.solve(&self.cdf, p, a, b)
    }

    pub fn bracket(&self) -> (f64, f64) {
        self.bracket
    }

    pub fn solver(&self) -> &BisectionSolver {
        &self.solver
    }

    /// The underlying CDF approximation
    pub fn approx_cdf(&self) -> &ApproxCdf<F> {
        &self.cdf
    }
}

impl<F: Density> Cdf for ApproxDistribution<F> {
    fn cdf(&self, x: f64) -> f64 {
        ApproxDistribution::cdf(self, x)
    }
}

impl<F> fmt::Debug for ApproxDistribution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApproxDistribution")
            .field("cdf", &self.cdf)
            .field("bracket", &self.bracket)
            .field("solver", &self.solver)
            .finish()
    }
}

fn default_bracket(lower_bound: f64) -> (f64, f64) {
    if lower_bound.is_finite() {
        (lower_bound, lower_bound + DEFAULT_REACH)
    } else {
        (-DEFAULT_REACH, DEFAULT_REACH)
    }
}
