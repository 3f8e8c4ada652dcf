//! # Frontier Sampler
//!
//! $$
//! \alpha \in [0,1]:\quad
//! \max_{\mathbf{w}} \ \alpha\,\mathbf{w}^\top\mu - (1-\alpha)\,\mathbf{w}^\top\Sigma\,\mathbf{w}
//! $$
//!
//! Sweeps the return/risk trade-off over a uniform grid and records one
//! `(volatility, expected return)` pair per sample, in sample order. A
//! single infeasible sample aborts the whole sweep; no partial frontier is
//! returned.

use ndarray::Array1;
use ndarray::Array2;
use tracing::debug;

use super::optimizer::realized_return;
use super::optimizer::realized_volatility;
use super::optimizer::solve_simplex_qp;
use super::optimizer::validate_inputs;
use super::types::FrontierPoint;
use crate::error::MarkowitzError;
use crate::error::Result;

/// Sample the efficient frontier at `n_points` trade-off values uniformly
/// spaced in `[0, 1]`. `n_points == 1` samples only `α = 0`, the
/// minimum-variance end of the curve.
pub fn sample_frontier(
  mu: &Array1<f64>,
  sigma: &Array2<f64>,
  n_points: usize,
) -> Result<Vec<FrontierPoint>> {
  validate_inputs(mu, sigma)?;
  if n_points == 0 {
    return Err(MarkowitzError::invalid_input(
      "frontier needs at least one sample point",
    ));
  }

  let mut points = Vec::with_capacity(n_points);
  for k in 0..n_points {
    let alpha = if n_points == 1 {
      0.0
    } else {
      k as f64 / (n_points - 1) as f64
    };

    // Minimize (1−α)·wᵀΣw − α·wᵀμ, so P = 2(1−α)Σ and q = −αμ.
    let p = sigma * (2.0 * (1.0 - alpha));
    let q: Vec<f64> = mu.iter().map(|&v| -alpha * v).collect();

    let w = solve_simplex_qp(&p, &q)?;
    let point = FrontierPoint {
      volatility: realized_volatility(&w, sigma),
      expected_return: realized_return(&w, mu),
    };
    debug!(
      alpha,
      volatility = point.volatility,
      expected_return = point.expected_return,
      "frontier sample"
    );
    points.push(point);
  }

  Ok(points)
}
