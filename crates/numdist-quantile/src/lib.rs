//! Quantile search over monotone cumulative distribution functions
//!
//! Inverts any non-decreasing CDF, exact or numerically approximated, by
//! bisection on the probability axis. The search is iterative, evaluates the
//! CDF once per step and stops once the bracket is narrower than a tolerance.
//!
//! Two failure channels are kept apart:
//!
//! - malformed input (`p` outside (0, 1), `a > b`, `eps < MIN_EPS`) panics
//!   before the CDF is evaluated;
//! - a target probability that the bracket does not contain is returned as
//!   [`Error::OutOfRange`], whose [`Error::sentinel`] is the original lower
//!   bound.
//!
//! # Example
//!
//! ```rust
//! use numdist_quantile::{quantile, BisectionSolver};
//!
//! let exponential_cdf = |x: f64| 1.0 - (-x).exp();
//! let median = quantile(exponential_cdf, 0.5, 0.0, 10.0, 1e-10).unwrap();
//! assert!((median - 2.0f64.ln()).abs() < 1e-10);
//!
//! let solver = BisectionSolver::new(1e-6);
//! let err = solver.solve(&exponential_cdf, 0.99, 0.0, 1.0).unwrap_err();
//! assert_eq!(err.sentinel(), 0.0);
//! ```

pub mod bisection;
pub mod parameters;

pub use bisection::{quantile, Bisection, BisectionSolver};
pub use numdist_core::{Error, Result, MIN_EPS};
pub use parameters::SolverParameters;
