//! # Portfolio
//!
//! $$
//! \max_{\mathbf{w}} \ \mathbf{w}^\top\mu - \gamma\,\mathbf{w}^\top\Sigma\,\mathbf{w}
//! \quad \text{s.t.} \quad \mathbf{1}^\top\mathbf{w}=1,\ \mathbf{w}\ge 0
//! $$
//!
//! Return/covariance estimation, mean-variance optimization, efficient
//! frontier sampling and the high-level analysis pipeline.

pub mod engine;
pub mod estimator;
pub mod frontier;
pub mod optimizer;
pub mod types;

pub use engine::AnalysisConfig;
pub use engine::AnalysisReport;
pub use engine::PortfolioAnalyzer;
pub use estimator::estimate;
pub use estimator::log_returns;
pub use estimator::TRADING_DAYS;
pub use frontier::sample_frontier;
pub use optimizer::optimize;
pub use types::AllocationLine;
pub use types::CovarianceMatrix;
pub use types::FrontierPoint;
pub use types::PortfolioResult;
pub use types::ReturnEstimate;
pub use types::ReturnVector;
pub use types::WeightVector;
