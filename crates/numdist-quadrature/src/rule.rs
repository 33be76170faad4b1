//! Fixed-node quadrature rules

/// A quadrature rule with a fixed set of nodes and weights
///
/// Nodes and weights are given on the reference interval `[-1, 1]` and
/// mapped affinely onto any finite `[lo, hi]`.
pub trait FixedRule {
    /// Number of nodes
    fn order(&self) -> usize;

    /// Nodes on `[-1, 1]`, ascending
    fn nodes(&self) -> &[f64];

    /// Weights matching [`FixedRule::nodes`]
    fn weights(&self) -> &[f64];

    /// Nodes and weights mapped onto the finite interval `[lo, hi]`
    fn locations(&self, lo: f64, hi: f64) -> (Vec<f64>, Vec<f64>) {
        let half_width = 0.5 * (hi - lo);
        let mid = 0.5 * (hi + lo);
        let x = self.nodes().iter().map(|&t| mid + half_width * t).collect();
        let w = self.weights().iter().map(|&w| half_width * w).collect();
        (x, w)
    }

    /// Apply the rule to `f` over the finite interval `[lo, hi]`
    fn integrate<F>(&self, f: F, lo: f64, hi: f64) -> f64
    where
        F: Fn(f64) -> f64,
        Self: Sized,
    {
        let half_width = 0.5 * (hi - lo);
        let mid = 0.5 * (hi + lo);
        let sum: f64 = self
            .nodes()
            .iter()
            .zip(self.weights())
            .map(|(&t, &w)| w * f(mid + half_width * t))
            .sum();
        half_width * sum
    }
}
