//! Cumulative distribution functions approximated from densities
//!
//! Given only a probability density `f` and a lower bound `lb`, the CDF is
//! approximated as the definite integral
//!
//! ```text
//! F(x) = integral of f over [lb, x]
//! ```
//!
//! computed with a fixed-order Gauss-Legendre rule. `lb` may be `-inf`, and
//! `x` may be `+inf`. There is no adaptive error control: the caller picks the
//! order for the precision it needs (300 nodes is a good default for smooth
//! densities and targets around 1e-10).
//!
//! # Example
//!
//! ```rust
//! use numdist_cdf::ApproxCdf;
//!
//! let normal_pdf = |x: f64| (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
//! let cdf = ApproxCdf::new(normal_pdf, f64::NEG_INFINITY, 300);
//! assert!((cdf.cdf(0.0) - 0.5).abs() < 1e-10);
//! ```

pub mod approximator;
pub mod parameters;

pub use approximator::{approx_cdf, ApproxCdf};
pub use parameters::{CdfParameters, DEFAULT_ORDER};
