//! Core traits and types for numerical distribution approximation
//!
//! This crate provides the shared vocabulary of the `numdist` workspace:
//!
//! - [`Density`] and [`Cdf`], implemented for any `Fn(f64) -> f64`
//! - [`Error`] and [`Result`] for recoverable search failures
//! - [`precondition`] checks that abort on malformed input
//!
//! The two failure channels never mix. A caller that passes
//! nonsense (a probability of 0, an inverted bracket) gets a panic; a search
//! that simply failed to bracket its target gets an [`Error`] it can act on.

pub mod error;
pub mod precondition;
pub mod traits;

pub use error::{Error, Result};
pub use precondition::MIN_EPS;
pub use traits::{Cdf, Density};
