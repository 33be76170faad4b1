//! Error types for numerical distribution approximation
//!
//! Only recoverable outcomes live here. Malformed inputs (a probability
//! outside (0, 1), an inverted bracket, a tolerance below [`MIN_EPS`]) are
//! caller bugs and abort through the checks in [`crate::precondition`]
//! instead of being returned as an [`Error`].
//!
//! [`MIN_EPS`]: crate::MIN_EPS

use thiserror::Error;

/// Errors that can occur while searching for a quantile
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The target probability is not bracketed by the search interval
    ///
    /// `a` and `b` are the bracket the search started from, `pa` and `pb`
    /// the probabilities at the ends of the bracket in which it failed.
    #[error("value of interest {p} is outside of the search range [{a}, {b}) with probabilities [{pa}, {pb})")]
    OutOfRange {
        p: f64,
        a: f64,
        b: f64,
        pa: f64,
        pb: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an out-of-range error for a search that started on `[a, b)`
    pub fn out_of_range(p: f64, a: f64, b: f64, pa: f64, pb: f64) -> Self {
        Self::OutOfRange { p, a, b, pa, pb }
    }

    /// Best-effort value reported alongside the error
    ///
    /// For [`Error::OutOfRange`] this is the lower bound of the original
    /// bracket.
    pub fn sentinel(&self) -> f64 {
        match self {
            Self::OutOfRange { a, .. } => *a,
        }
    }

    /// Check whether the search failed to bracket the target probability
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
