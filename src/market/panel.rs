//! # Price Panel
//!
//! $$
//! P \in \mathbb{R}^{m \times n},\quad
//! \mathcal{D} = \bigcap_{k=1}^{n} \mathcal{D}_k
//! $$
//!
//! Multi-instrument price table aligned on the intersection of trading
//! dates. Rows with any missing instrument are dropped.

use std::collections::HashMap;

use chrono::NaiveDate;
use ndarray::Array2;
use tracing::warn;

use super::provider::PriceProvider;
use super::series::PriceSeries;
use crate::error::MarkowitzError;
use crate::error::Result;

/// Aligned adjusted-close matrix: one row per common date, one column per
/// instrument, in the order the instruments were supplied.
#[derive(Clone, Debug)]
pub struct PricePanel {
  symbols: Vec<String>,
  dates: Vec<NaiveDate>,
  prices: Array2<f64>,
}

impl PricePanel {
  /// Align the given series on their common dates.
  pub fn from_series(series: &[PriceSeries]) -> Result<Self> {
    if series.is_empty() {
      return Err(MarkowitzError::invalid_input(
        "price panel needs at least one instrument",
      ));
    }

    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for s in series {
      for date in s.dates() {
        *counts.entry(date).or_insert(0) += 1;
      }
    }

    let mut dates: Vec<NaiveDate> = counts
      .into_iter()
      .filter(|&(_, c)| c == series.len())
      .map(|(d, _)| d)
      .collect();
    dates.sort();

    let mut prices = Array2::<f64>::zeros((dates.len(), series.len()));
    for (j, s) in series.iter().enumerate() {
      for (i, &date) in dates.iter().enumerate() {
        // Present by construction: `date` survived the intersection.
        prices[(i, j)] = s.price_on(date).unwrap_or(f64::NAN);
      }
    }

    Ok(Self {
      symbols: series.iter().map(|s| s.symbol().to_string()).collect(),
      dates,
      prices,
    })
  }

  /// Fetch and align a panel from a [`PriceProvider`].
  ///
  /// Instruments failing with [`MarkowitzError::DataUnavailable`] are
  /// skipped with a warning; any other fetch failure aborts. When every
  /// requested symbol is skipped the whole panel is `DataUnavailable`.
  pub fn from_provider<P: PriceProvider>(
    provider: &P,
    symbols: &[&str],
    start: NaiveDate,
    end: NaiveDate,
  ) -> Result<Self> {
    if symbols.is_empty() {
      return Err(MarkowitzError::invalid_input("no symbols requested"));
    }

    let mut series = Vec::with_capacity(symbols.len());
    for symbol in symbols {
      match provider.fetch(symbol, start, end) {
        Ok(s) => series.push(s),
        Err(MarkowitzError::DataUnavailable { symbol }) => {
          warn!(symbol = %symbol, "skipping instrument with no valid price data");
        }
        Err(e) => return Err(e),
      }
    }

    if series.is_empty() {
      return Err(MarkowitzError::data_unavailable(symbols.join(", ")));
    }

    Self::from_series(&series)
  }

  pub fn symbols(&self) -> &[String] {
    &self.symbols
  }

  pub fn dates(&self) -> &[NaiveDate] {
    &self.dates
  }

  /// Aligned price matrix, rows = dates, columns = instruments.
  pub fn prices(&self) -> &Array2<f64> {
    &self.prices
  }

  pub fn n_instruments(&self) -> usize {
    self.symbols.len()
  }

  pub fn n_rows(&self) -> usize {
    self.dates.len()
  }
}
