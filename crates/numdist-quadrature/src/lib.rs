//! Fixed-order numerical integration
//!
//! This crate provides the quadrature primitive the CDF approximation is
//! built on: an n-point Gauss-Legendre rule applied to finite, half-infinite
//! or doubly infinite intervals. There is no adaptive error control; accuracy
//! is governed entirely by the number of nodes and the smoothness of the
//! integrand.
//!
//! # Example
//!
//! ```rust
//! use numdist_quadrature::{fixed, GaussLegendre};
//!
//! let rule = GaussLegendre::new(300);
//! let half = fixed(|x: f64| (-x * x / 2.0).exp(), f64::NEG_INFINITY, 0.0, &rule);
//! assert!((half - (std::f64::consts::PI / 2.0).sqrt()).abs() < 1e-10);
//! ```

pub mod fixed;
pub mod legendre;
pub mod rule;

pub use fixed::{fixed, fixed_legendre};
pub use legendre::GaussLegendre;
pub use rule::FixedRule;
