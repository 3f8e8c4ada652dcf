//! # Analysis Engine
//!
//! $$
//! \text{prices} \to (\mu, \Sigma) \to \mathbf{w}^\* \to
//! \{(\sigma_k, \mu_k)\}_k \to \{R^{(s)}\}_s
//! $$
//!
//! High-level orchestration: estimate, optimize, sweep the frontier and
//! simulate, all recomputed from scratch on every call. Nothing is cached
//! between requests.

use rand::Rng;

use super::estimator::estimate;
use super::frontier::sample_frontier;
use super::optimizer::optimize;
use super::types::AllocationLine;
use super::types::FrontierPoint;
use super::types::PortfolioResult;
use super::types::ReturnEstimate;
use crate::error::MarkowitzError;
use crate::error::Result;
use crate::market::PricePanel;
use crate::simulation::MonteCarlo;

/// Runtime configuration for [`PortfolioAnalyzer`].
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
  /// Risk aversion γ for the single-point solve.
  pub gamma: f64,
  /// Number of frontier samples in `[0, 1]`.
  pub frontier_points: usize,
  /// Simulation horizon in trading days.
  pub horizon_days: usize,
  /// Number of Monte Carlo trials.
  pub simulations: usize,
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      gamma: 1.0,
      frontier_points: 50,
      horizon_days: 252,
      simulations: 10_000,
    }
  }
}

/// Full output of one analysis request.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
  /// Annualized estimates the rest of the report was computed from.
  pub estimate: ReturnEstimate,
  /// Single-point mean-variance solution at the configured γ.
  pub optimal: PortfolioResult,
  /// Efficient frontier samples, in sweep order.
  pub frontier: Vec<FrontierPoint>,
  /// Simulated terminal returns of the optimal portfolio, in trial order.
  pub terminal_returns: Vec<f64>,
}

impl AnalysisReport {
  /// Split an investment amount across the optimal weights, rounding each
  /// line to cents.
  pub fn allocation(&self, amount: f64) -> Result<Vec<AllocationLine>> {
    if !amount.is_finite() || amount < 0.0 {
      return Err(MarkowitzError::invalid_input(format!(
        "investment amount must be finite and non-negative, got {amount}"
      )));
    }

    Ok(
      self
        .estimate
        .symbols
        .iter()
        .zip(self.optimal.weights.iter())
        .map(|(symbol, &weight)| AllocationLine {
          symbol: symbol.clone(),
          weight,
          amount: (weight * amount * 100.0).round() / 100.0,
        })
        .collect(),
    )
  }
}

/// Single entry point running the whole pipeline per request.
#[derive(Clone, Debug)]
pub struct PortfolioAnalyzer {
  config: AnalysisConfig,
}

impl PortfolioAnalyzer {
  pub fn new(config: AnalysisConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &AnalysisConfig {
    &self.config
  }

  /// Analyze with the thread RNG for the simulation stage.
  pub fn analyze(&self, panel: &PricePanel) -> Result<AnalysisReport> {
    self.analyze_with_rng(panel, &mut rand::thread_rng())
  }

  /// Analyze with a caller-supplied RNG; a seeded RNG pins the Monte Carlo
  /// stage.
  pub fn analyze_with_rng<R: Rng>(&self, panel: &PricePanel, rng: &mut R) -> Result<AnalysisReport> {
    let estimate = estimate(panel)?;
    let optimal = optimize(&estimate.mu, &estimate.sigma, self.config.gamma)?;
    let frontier = sample_frontier(&estimate.mu, &estimate.sigma, self.config.frontier_points)?;

    let simulator = MonteCarlo::new(
      estimate.mu.clone(),
      estimate.sigma.clone(),
      optimal.weights.clone(),
      self.config.horizon_days,
      self.config.simulations,
    );
    let terminal_returns = simulator.sample_with_rng(rng)?;

    Ok(AnalysisReport {
      estimate,
      optimal,
      frontier,
      terminal_returns,
    })
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use chrono::Days;
  use chrono::NaiveDate;
  use rand::rngs::StdRng;
  use rand::Rng;
  use rand::SeedableRng;

  use super::*;
  use crate::market::PriceSeries;

  /// Three synthetic random walks with independent noise, so the sample
  /// covariance is positive definite.
  fn synthetic_panel() -> PricePanel {
    let mut rng = StdRng::seed_from_u64(1234);
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

    let series: Vec<PriceSeries> = [("AAA", 0.0004), ("BBB", 0.0002), ("CCC", 0.0006)]
      .iter()
      .map(|&(symbol, drift)| {
        let mut price = 100.0;
        let rows: Vec<(NaiveDate, f64)> = (0..120)
          .map(|i| {
            let noise: f64 = rng.gen_range(-0.01..0.01);
            price *= 1.0 + drift + noise;
            (start + Days::new(i as u64), price)
          })
          .collect();
        PriceSeries::new(symbol, rows).unwrap()
      })
      .collect();

    PricePanel::from_series(&series).unwrap()
  }

  #[test]
  fn full_pipeline_produces_consistent_report() {
    let panel = synthetic_panel();
    let analyzer = PortfolioAnalyzer::new(AnalysisConfig {
      gamma: 1.0,
      frontier_points: 10,
      horizon_days: 21,
      simulations: 200,
    });

    let mut rng = StdRng::seed_from_u64(99);
    let report = analyzer.analyze_with_rng(&panel, &mut rng).unwrap();

    assert_eq!(report.estimate.symbols.len(), 3);
    assert_relative_eq!(report.optimal.weights.sum(), 1.0, epsilon = 1e-6);
    assert!(report.optimal.weights.iter().all(|&w| w >= 0.0));
    assert_eq!(report.frontier.len(), 10);
    assert_eq!(report.terminal_returns.len(), 200);
  }

  #[test]
  fn allocation_splits_the_amount_to_cents() {
    let panel = synthetic_panel();
    let analyzer = PortfolioAnalyzer::new(AnalysisConfig {
      frontier_points: 1,
      horizon_days: 1,
      simulations: 1,
      ..AnalysisConfig::default()
    });

    let mut rng = StdRng::seed_from_u64(7);
    let report = analyzer.analyze_with_rng(&panel, &mut rng).unwrap();
    let lines = report.allocation(10_000.0).unwrap();

    assert_eq!(lines.len(), 3);
    let total: f64 = lines.iter().map(|l| l.amount).sum();
    // Per-line cent rounding can drift by at most half a cent per line.
    assert!((total - 10_000.0).abs() < 0.02);
    for line in &lines {
      assert_relative_eq!(line.amount, (line.weight * 10_000.0 * 100.0).round() / 100.0);
    }
  }

  #[test]
  fn allocation_rejects_bad_amounts() {
    let panel = synthetic_panel();
    let analyzer = PortfolioAnalyzer::new(AnalysisConfig {
      frontier_points: 1,
      horizon_days: 1,
      simulations: 1,
      ..AnalysisConfig::default()
    });

    let mut rng = StdRng::seed_from_u64(7);
    let report = analyzer.analyze_with_rng(&panel, &mut rng).unwrap();
    assert!(report.allocation(-1.0).is_err());
    assert!(report.allocation(f64::NAN).is_err());
  }
}
