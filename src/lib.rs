//! Numerical CDF and quantile approximation
//!
//! For distributions known only through their probability density, `numdist`
//! approximates the cumulative distribution function by fixed-order
//! Gauss-Legendre quadrature and inverts it by bisection.
//!
//! # Crates
//!
//! - [`numdist_core`]: [`Density`] and [`Cdf`] traits, errors, preconditions
//! - [`numdist_quadrature`]: Gauss-Legendre rules and fixed-rule integration
//! - [`numdist_cdf`]: [`ApproxCdf`] and [`approx_cdf`]
//! - [`numdist_quantile`]: [`BisectionSolver`] and [`quantile`]
//!
//! # Example
//!
//! ```rust
//! use numdist::prelude::*;
//!
//! let normal_pdf = |x: f64| (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
//! let cdf = approx_cdf(normal_pdf, f64::NEG_INFINITY, 300);
//!
//! let x = quantile(&cdf, 0.975, -10.0, 10.0, 1e-9).unwrap();
//! assert!((x - 1.959963984540054).abs() < 1e-8);
//! ```
//!
//! A search whose bracket does not contain the target returns
//! [`Error::OutOfRange`]; malformed inputs such as `p = 0` or an inverted
//! bracket panic.

pub mod distribution;

pub use distribution::ApproxDistribution;

pub use numdist_cdf::{approx_cdf, ApproxCdf, CdfParameters, DEFAULT_ORDER};
pub use numdist_core::{Cdf, Density, Error, Result, MIN_EPS};
pub use numdist_quadrature::{fixed, fixed_legendre, FixedRule, GaussLegendre};
pub use numdist_quantile::{quantile, Bisection, BisectionSolver, SolverParameters};

// Re-export sub-crates for advanced usage
pub use numdist_cdf;
pub use numdist_core;
pub use numdist_quadrature;
pub use numdist_quantile;

pub mod prelude {
    pub use crate::{
        approx_cdf, quantile, ApproxCdf, ApproxDistribution, BisectionSolver, Cdf, CdfParameters,
        Density, Error, Result, SolverParameters,
    };
}
