//! # Errors
//!
//! $$
//! \text{failure taxonomy}: \{\text{data},\ \text{history},\ \text{solver}\}
//! $$
//!
//! Typed failure taxonomy for the whole crate. Errors are surfaced to the
//! caller immediately; nothing is retried and nothing is downgraded to a
//! default value.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MarkowitzError>;

/// Failure kinds of the portfolio-analysis pipeline.
#[derive(Error, Debug)]
pub enum MarkowitzError {
  /// The instrument has no valid price rows in the requested range.
  #[error("no valid price data for {symbol}")]
  DataUnavailable { symbol: String },

  /// Too few aligned observations remain after date intersection.
  #[error("insufficient history: {observations} aligned observations, need at least {required}")]
  InsufficientHistory {
    observations: usize,
    required: usize,
  },

  /// The solver did not converge or the problem is numerically degenerate.
  /// No weights are produced; a prior result must not be reused.
  #[error("optimization failed: {reason}")]
  OptimizationFailed { reason: String },

  /// Caller-supplied arguments are malformed.
  #[error("invalid input: {message}")]
  InvalidInput { message: String },
}

impl MarkowitzError {
  pub fn data_unavailable(symbol: impl Into<String>) -> Self {
    Self::DataUnavailable {
      symbol: symbol.into(),
    }
  }

  pub fn insufficient_history(observations: usize, required: usize) -> Self {
    Self::InsufficientHistory {
      observations,
      required,
    }
  }

  pub fn optimization_failed(reason: impl Into<String>) -> Self {
    Self::OptimizationFailed {
      reason: reason.into(),
    }
  }

  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput {
      message: message.into(),
    }
  }
}
