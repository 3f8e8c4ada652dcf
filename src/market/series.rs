//! # Price Series
//!
//! $$
//! p: \{d_1 < d_2 < \dots < d_m\} \to \mathbb{R}_{>0}
//! $$
//!
//! Ordered adjusted-close history for a single instrument. Immutable once
//! constructed; invalid rows are dropped at the door.

use chrono::NaiveDate;

use crate::error::MarkowitzError;
use crate::error::Result;

/// Ordered `(date, adjusted close)` rows for one instrument.
#[derive(Clone, Debug)]
pub struct PriceSeries {
  symbol: String,
  rows: Vec<(NaiveDate, f64)>,
}

impl PriceSeries {
  /// Build a series from raw rows, dropping non-finite and non-positive
  /// prices and sorting by date. Duplicate dates collapse to one row.
  ///
  /// Fails with [`MarkowitzError::DataUnavailable`] when no valid rows
  /// remain.
  pub fn new(symbol: impl Into<String>, rows: Vec<(NaiveDate, f64)>) -> Result<Self> {
    let symbol = symbol.into();

    let mut rows: Vec<(NaiveDate, f64)> = rows
      .into_iter()
      .filter(|(_, p)| p.is_finite() && *p > 0.0)
      .collect();
    rows.sort_by_key(|(d, _)| *d);
    rows.dedup_by_key(|(d, _)| *d);

    if rows.is_empty() {
      return Err(MarkowitzError::data_unavailable(symbol));
    }

    Ok(Self { symbol, rows })
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn rows(&self) -> &[(NaiveDate, f64)] {
    &self.rows
  }

  pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
    self.rows.iter().map(|(d, _)| *d)
  }

  /// Price on an exact date, if present.
  pub fn price_on(&self, date: NaiveDate) -> Option<f64> {
    self
      .rows
      .binary_search_by_key(&date, |(d, _)| *d)
      .ok()
      .map(|i| self.rows[i].1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
  }

  #[test]
  fn drops_invalid_rows_and_sorts() {
    let series = PriceSeries::new(
      "AAA",
      vec![
        (d(3), 101.0),
        (d(1), 100.0),
        (d(2), f64::NAN),
        (d(4), -5.0),
        (d(5), 0.0),
      ],
    )
    .unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series.rows()[0].0, d(1));
    assert_eq!(series.price_on(d(3)), Some(101.0));
    assert_eq!(series.price_on(d(2)), None);
  }

  #[test]
  fn zero_valid_rows_is_data_unavailable() {
    let err = PriceSeries::new("BAD", vec![(d(1), f64::NAN), (d(2), 0.0)]).unwrap_err();
    assert!(matches!(
      err,
      MarkowitzError::DataUnavailable { symbol } if symbol == "BAD"
    ));
  }
}
