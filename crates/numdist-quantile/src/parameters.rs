//! Parameters for the bisection quantile search

use numdist_core::MIN_EPS;
use std::fmt;

/// Parameters controlling the bisection search
#[derive(Clone, Copy, PartialEq)]
pub struct SolverParameters {
    /// The search stops once the bracket is narrower than `eps`
    ///
    /// Must be at least [`MIN_EPS`]. For CDFs that are themselves numerical
    /// approximations, values around 1e-10 or coarser are advisable.
    pub eps: f64,
}

impl Default for SolverParameters {
    fn default() -> Self {
        Self { eps: 1e-10 }
    }
}

impl fmt::Debug for SolverParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverParameters")
            .field("eps", &self.eps)
            .finish()
    }
}

impl SolverParameters {
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Parameters for quick, low-precision searches
    pub fn coarse() -> Self {
        Self { eps: 1e-6 }
    }

    /// Parameters for searches over exact, closed-form CDFs
    pub fn precise() -> Self {
        Self { eps: 1e-14 }
    }

    /// Finest tolerance the search accepts
    pub fn finest() -> Self {
        Self { eps: MIN_EPS }
    }

    /// Set the bracket-width tolerance
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Upper bound on the number of bisection steps for a bracket `[a, b]`
    ///
    /// Each step halves the bracket and the search stops as soon as the
    /// width is strictly below `eps`, which takes
    /// `floor(log2((b - a) / eps)) + 1` steps.
    pub fn max_iterations(&self, a: f64, b: f64) -> usize {
        let ratio = (b - a) / self.eps;
        if ratio < 1.0 {
            0
        } else {
            ratio.log2().floor() as usize + 1
        }
    }
}
