//! Gauss-Legendre nodes and weights
//!
//! The n-point rule integrates polynomials of degree up to `2n - 1` exactly on
//! `[-1, 1]`. Nodes are the roots of the Legendre polynomial `P_n`, found by
//! Newton iteration from a Chebyshev-like initial guess; the weights are
//!
//! ```text
//! w_i = 2 / ((1 - x_i^2) P_n'(x_i)^2)
//! ```

use crate::rule::FixedRule;
use numdist_core::precondition::check_order;

/// Newton iterations are stopped after this many steps even if the update
/// has not settled below [`ROOT_TOLERANCE`]
const MAX_NEWTON_ITERATIONS: usize = 100;

const ROOT_TOLERANCE: f64 = 1e-15;

/// n-point Gauss-Legendre rule
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Compute the n-point rule
    ///
    /// # Panics
    /// If `n == 0`.
    pub fn new(n: usize) -> Self {
        check_order(n);
        let (nodes, weights) = nodes_and_weights(n);
        Self { nodes, weights }
    }
}

impl FixedRule for GaussLegendre {
    fn order(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Roots of `P_n` (ascending) and their weights
///
/// Only the positive half is solved for; the rule is symmetric about zero.
fn nodes_and_weights(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];

    let m = n.div_ceil(2);
    let n_f = n as f64;

    for i in 0..m {
        // i-th largest root
        let mut z = ((i as f64 + 0.75) / (n_f + 0.5) * std::f64::consts::PI).cos();

        for _ in 0..MAX_NEWTON_ITERATIONS {
            let (p, dp) = legendre_p_and_dp(n, z);
            let z_new = z - p / dp;
            let settled = (z_new - z).abs() < ROOT_TOLERANCE;
            z = z_new;
            if settled {
                break;
            }
        }

        let (_, dp) = legendre_p_and_dp(n, z);
        let w = 2.0 / ((1.0 - z * z) * dp * dp);

        nodes[i] = -z;
        nodes[n - 1 - i] = z;
        weights[i] = w;
        weights[n - 1 - i] = w;
    }

    // odd n has an exact root at zero
    if n % 2 == 1 {
        nodes[n / 2] = 0.0;
    }

    (nodes, weights)
}

/// Evaluate `P_n(x)` and `P_n'(x)` with the three-term recurrence
fn legendre_p_and_dp(n: usize, x: f64) -> (f64, f64) {
    let mut p_prev = 1.0;
    let mut p_curr = x;

    for k in 2..=n {
        let k_f = k as f64;
        let p_next = ((2.0 * k_f - 1.0) * x * p_curr - (k_f - 1.0) * p_prev) / k_f;
        p_prev = p_curr;
        p_curr = p_next;
    }

    if n == 1 {
        return (x, 1.0);
    }

    // P_n'(x) = n (x P_n - P_{n-1}) / (x^2 - 1)
    let dp = n as f64 * (x * p_curr - p_prev) / (x * x - 1.0);
    (p_curr, dp)
}
