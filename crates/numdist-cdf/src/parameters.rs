//! Parameters for CDF approximation

use std::fmt;

/// Quadrature order used when none is given
///
/// 300 nodes reach absolute errors around 1e-10 for smooth densities such as
/// the normal or gamma on half-infinite supports.
pub const DEFAULT_ORDER: usize = 300;

/// Parameters controlling a CDF approximation
#[derive(Clone, Copy, PartialEq)]
pub struct CdfParameters {
    /// Lower integration bound, `-inf` allowed
    pub lower_bound: f64,

    /// Number of quadrature nodes
    pub order: usize,
}

impl Default for CdfParameters {
    fn default() -> Self {
        Self {
            lower_bound: f64::NEG_INFINITY,
            order: DEFAULT_ORDER,
        }
    }
}

impl fmt::Debug for CdfParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdfParameters")
            .field("lower_bound", &self.lower_bound)
            .field("order", &self.order)
            .finish()
    }
}

impl CdfParameters {
    /// Parameters for a density supported on `[lower_bound, inf)`
    pub fn new(lower_bound: f64, order: usize) -> Self {
        Self { lower_bound, order }
    }

    /// Set the lower integration bound
    pub fn with_lower_bound(mut self, lower_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    /// Set the quadrature order
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }
}
