//! # Portfolio Types
//!
//! $$
//! \mu \in \mathbb{R}^n,\quad \Sigma \in \mathbb{R}^{n \times n},\quad
//! \mathbf{w} \in \Delta^{n-1}
//! $$
//!
//! Shared containers for estimation and optimization outputs.

use ndarray::Array1;
use ndarray::Array2;

/// Annualized mean log returns, one entry per instrument.
pub type ReturnVector = Array1<f64>;

/// Annualized covariance of daily log returns, symmetric.
pub type CovarianceMatrix = Array2<f64>;

/// Long-only allocation fractions; entries sum to one within tolerance.
pub type WeightVector = Array1<f64>;

/// Annualized return/risk estimates for an aligned instrument panel.
#[derive(Clone, Debug)]
pub struct ReturnEstimate {
  /// Instruments in panel column order.
  pub symbols: Vec<String>,
  /// Annualized mean log returns.
  pub mu: ReturnVector,
  /// Annualized covariance matrix.
  pub sigma: CovarianceMatrix,
}

impl ReturnEstimate {
  /// Pearson correlation matrix implied by the covariance estimate.
  pub fn correlation(&self) -> Array2<f64> {
    let n = self.sigma.nrows();
    let mut corr = Array2::<f64>::zeros((n, n));

    for i in 0..n {
      let si = self.sigma[(i, i)].max(0.0).sqrt();
      for j in 0..n {
        let sj = self.sigma[(j, j)].max(0.0).sqrt();
        let denom = si * sj;
        corr[(i, j)] = if i == j {
          1.0
        } else if denom > 1e-15 {
          (self.sigma[(i, j)] / denom).clamp(-1.0, 1.0)
        } else {
          0.0
        };
      }
    }

    corr
  }
}

/// Output of a single mean-variance optimization.
#[derive(Clone, Debug)]
pub struct PortfolioResult {
  /// Optimal long-only weights, summing to one.
  pub weights: WeightVector,
  /// Realized expected return `wᵀμ`.
  pub expected_return: f64,
  /// Realized volatility `√(wᵀΣw)`.
  pub volatility: f64,
}

/// One sample of the efficient frontier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontierPoint {
  pub volatility: f64,
  pub expected_return: f64,
}

/// One row of an allocation export: how much of `amount` goes where.
#[derive(Clone, Debug)]
pub struct AllocationLine {
  pub symbol: String,
  pub weight: f64,
  /// Invested amount, rounded to cents.
  pub amount: f64,
}
