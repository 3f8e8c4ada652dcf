//! # Return/Covariance Estimator
//!
//! $$
//! \mu = 252\,\bar{r},\qquad
//! \Sigma = \frac{252}{m-1}\sum_{t=1}^{m}(r_t-\bar r)(r_t-\bar r)^\top
//! $$
//!
//! Converts an aligned price panel into annualized mean log returns and
//! an annualized sample covariance matrix.

use ndarray::Array1;
use ndarray::Array2;

use super::types::ReturnEstimate;
use crate::error::MarkowitzError;
use crate::error::Result;
use crate::market::PricePanel;

/// Trading days per year used for annualization.
pub const TRADING_DAYS: f64 = 252.0;

/// Daily log returns of an aligned panel, one row per day, one column per
/// instrument.
pub fn log_returns(panel: &PricePanel) -> Result<Array2<f64>> {
  let prices = panel.prices();
  let (m, n) = (prices.nrows(), prices.ncols());
  if n == 0 {
    return Err(MarkowitzError::invalid_input(
      "panel has no instruments",
    ));
  }
  if m < 2 {
    return Err(MarkowitzError::insufficient_history(m.saturating_sub(1), 2));
  }

  let mut out = Array2::<f64>::zeros((m - 1, n));
  for j in 0..n {
    for i in 1..m {
      out[(i - 1, j)] = (prices[(i, j)] / prices[(i - 1, j)]).ln();
    }
  }

  Ok(out)
}

/// Estimate annualized `(μ, Σ)` from an aligned price panel.
///
/// Fails with [`MarkowitzError::InsufficientHistory`] when fewer than two
/// aligned return observations remain; the sample covariance is undefined
/// below that.
pub fn estimate(panel: &PricePanel) -> Result<ReturnEstimate> {
  let returns = log_returns(panel)?;
  let (m, n) = (returns.nrows(), returns.ncols());
  if m < 2 {
    return Err(MarkowitzError::insufficient_history(m, 2));
  }

  let mut means = Array1::<f64>::zeros(n);
  for j in 0..n {
    means[j] = returns.column(j).sum() / m as f64;
  }

  let mut sigma = Array2::<f64>::zeros((n, n));
  for i in 0..n {
    for j in i..n {
      let mut acc = 0.0;
      for t in 0..m {
        acc += (returns[(t, i)] - means[i]) * (returns[(t, j)] - means[j]);
      }
      let cov = acc / (m - 1) as f64 * TRADING_DAYS;
      sigma[(i, j)] = cov;
      sigma[(j, i)] = cov;
    }
  }

  Ok(ReturnEstimate {
    symbols: panel.symbols().to_vec(),
    mu: means * TRADING_DAYS,
    sigma,
  })
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use chrono::NaiveDate;

  use super::*;
  use crate::market::PriceSeries;

  fn panel(rows: &[(&str, &[f64])]) -> PricePanel {
    let series: Vec<PriceSeries> = rows
      .iter()
      .map(|(symbol, prices)| {
        PriceSeries::new(
          *symbol,
          prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
              (
                NaiveDate::from_ymd_opt(2021, 1, 1).unwrap() + chrono::Days::new(i as u64),
                p,
              )
            })
            .collect(),
        )
        .unwrap()
      })
      .collect();
    PricePanel::from_series(&series).unwrap()
  }

  #[test]
  fn log_returns_of_constant_growth() {
    let p = panel(&[("AAA", &[100.0, 110.0, 121.0])]);
    let r = log_returns(&p).unwrap();

    assert_eq!(r.nrows(), 2);
    assert_relative_eq!(r[(0, 0)], 1.1_f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(r[(1, 0)], 1.1_f64.ln(), epsilon = 1e-12);
  }

  #[test]
  fn single_return_row_is_insufficient_history() {
    let p = panel(&[("AAA", &[100.0, 101.0])]);
    let err = estimate(&p).unwrap_err();
    assert!(matches!(
      err,
      MarkowitzError::InsufficientHistory { observations: 1, required: 2 }
    ));
  }

  #[test]
  fn identical_series_have_unit_correlation_and_shared_variance() {
    let p = panel(&[
      ("AAA", &[100.0, 102.0, 99.0, 104.0, 103.0]),
      ("BBB", &[100.0, 102.0, 99.0, 104.0, 103.0]),
    ]);

    let estimate = estimate(&p).unwrap();
    assert_relative_eq!(
      estimate.sigma[(0, 1)],
      estimate.sigma[(0, 0)],
      epsilon = 1e-12
    );
    assert_relative_eq!(estimate.correlation()[(0, 1)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(estimate.mu[0], estimate.mu[1], epsilon = 1e-12);
  }

  #[test]
  fn annualization_scales_by_trading_days() {
    // Alternating +1%/-1% daily moves give a known sample variance.
    let p = panel(&[("AAA", &[100.0, 101.0, 99.99, 100.99, 99.98])]);
    let estimate = estimate(&p).unwrap();

    let r = log_returns(&p).unwrap();
    let m = r.nrows() as f64;
    let mean = r.column(0).sum() / m;
    let var: f64 = r.column(0).iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (m - 1.0);

    assert_relative_eq!(estimate.sigma[(0, 0)], var * TRADING_DAYS, epsilon = 1e-12);
    assert_relative_eq!(estimate.mu[0], mean * TRADING_DAYS, epsilon = 1e-12);
  }
}
