//! # Price Provider
//!
//! $$
//! \text{fetch}: (\text{symbol}, t_0, t_1) \to \text{PriceSeries}
//! $$
//!
//! Opaque market-data collaborator. The crate treats the provider as a
//! blocking fetch function; there is no timeout or retry layer here.

use chrono::NaiveDate;

use super::series::PriceSeries;
use crate::error::Result;

/// Source of adjusted-close price history.
pub trait PriceProvider {
  /// Fetch daily adjusted closes for `symbol` in `[start, end]`.
  ///
  /// Fails with [`crate::MarkowitzError::DataUnavailable`] when the symbol
  /// has no valid price rows in range.
  fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries>;
}
