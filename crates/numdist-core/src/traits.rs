//! Core traits for densities and cumulative distribution functions
//!
//! Both traits are implemented for every `Fn(f64) -> f64`, so plain closures
//! and function pointers can be used wherever a density or a CDF is expected.

/// A probability density function `f: R -> [0, inf)`
///
/// Implementations may return non-finite values outside their support. Callers
/// are responsible for never evaluating such regions.
pub trait Density {
    /// Evaluate the density at `x`
    fn pdf(&self, x: f64) -> f64;
}

impl<F> Density for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn pdf(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A cumulative distribution function `F: R -> [0, 1]`
///
/// Implementations must be non-decreasing over the domain of interest. This is
/// relied upon by the quantile search but never verified at runtime.
pub trait Cdf {
    /// Evaluate `P(X <= x)`
    fn cdf(&self, x: f64) -> f64;
}

impl<F> Cdf for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        self(x)
    }
}
