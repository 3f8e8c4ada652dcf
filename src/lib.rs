//! # markowitz-rs
//!
//! $$
//! \max_{\mathbf{w}\ge 0,\ \mathbf{1}^\top\mathbf{w}=1}
//! \ \mathbf{w}^\top\mu - \gamma\,\mathbf{w}^\top\Sigma\,\mathbf{w}
//! $$
//!
//! Mean-variance portfolio analysis: annualized return/covariance
//! estimation from adjusted price history, long-only fully-invested
//! optimization via an interior-point QP solver, efficient-frontier
//! sampling and correlated Monte Carlo simulation of terminal returns.
//!
//! Everything is synchronous and request-driven; each analysis recomputes
//! from the supplied price history with no caching or background work.

pub mod error;
pub mod market;
pub mod portfolio;
pub mod simulation;
#[cfg(feature = "plot")]
pub mod visualization;

pub use error::MarkowitzError;
pub use error::Result;
pub use market::PricePanel;
pub use market::PriceProvider;
pub use market::PriceSeries;
#[cfg(feature = "yahoo")]
pub use market::YahooProvider;
pub use portfolio::estimate;
pub use portfolio::optimize;
pub use portfolio::sample_frontier;
pub use portfolio::AnalysisConfig;
pub use portfolio::AnalysisReport;
pub use portfolio::FrontierPoint;
pub use portfolio::PortfolioAnalyzer;
pub use portfolio::PortfolioResult;
pub use portfolio::ReturnEstimate;
pub use simulation::summarize;
pub use simulation::MonteCarlo;
pub use simulation::SimulationSummary;
