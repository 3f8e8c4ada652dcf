//! # Yahoo Provider
//!
//! $$
//! \text{Yahoo Finance} \to \text{adjusted closes}
//! $$
//!
//! Blocking Yahoo Finance implementation of [`PriceProvider`]. Any client
//! or decoding failure is reported as `DataUnavailable` for the symbol, so
//! panel assembly can warn and skip it.

use chrono::DateTime;
use chrono::NaiveDate;
use time::OffsetDateTime;
use yahoo_finance_api::YahooConnector;

use super::provider::PriceProvider;
use super::series::PriceSeries;
use crate::error::MarkowitzError;
use crate::error::Result;

/// Daily adjusted-close fetcher backed by Yahoo Finance.
pub struct YahooProvider {
  connector: YahooConnector,
}

impl YahooProvider {
  pub fn new() -> Result<Self> {
    let connector = YahooConnector::new()
      .map_err(|e| MarkowitzError::invalid_input(format!("yahoo client setup failed: {e}")))?;
    Ok(Self { connector })
  }
}

fn day_start(date: NaiveDate) -> Result<OffsetDateTime> {
  let ts = date
    .and_hms_opt(0, 0, 0)
    .map(|dt| dt.and_utc().timestamp())
    .ok_or_else(|| MarkowitzError::invalid_input(format!("invalid date {date}")))?;
  OffsetDateTime::from_unix_timestamp(ts)
    .map_err(|e| MarkowitzError::invalid_input(format!("date {date} out of range: {e}")))
}

fn day_end(date: NaiveDate) -> Result<OffsetDateTime> {
  let ts = date
    .and_hms_opt(23, 59, 59)
    .map(|dt| dt.and_utc().timestamp())
    .ok_or_else(|| MarkowitzError::invalid_input(format!("invalid date {date}")))?;
  OffsetDateTime::from_unix_timestamp(ts)
    .map_err(|e| MarkowitzError::invalid_input(format!("date {date} out of range: {e}")))
}

impl PriceProvider for YahooProvider {
  fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries> {
    if end < start {
      return Err(MarkowitzError::invalid_input(format!(
        "end date {end} precedes start date {start}"
      )));
    }

    let response = self
      .connector
      .get_quote_history(symbol, day_start(start)?, day_end(end)?)
      .map_err(|_| MarkowitzError::data_unavailable(symbol))?;
    let quotes = response
      .quotes()
      .map_err(|_| MarkowitzError::data_unavailable(symbol))?;

    let rows: Vec<(NaiveDate, f64)> = quotes
      .iter()
      .filter_map(|q| {
        DateTime::from_timestamp(q.timestamp as i64, 0).map(|dt| (dt.date_naive(), q.adjclose))
      })
      .collect();

    PriceSeries::new(symbol, rows)
  }
}
