//! # Simulation
//!
//! $$
//! r_t \sim \mathcal{N}(\mu/T, \Sigma/T),\qquad
//! R = \sum_{t=1}^{T} \mathbf{w}^\top r_t
//! $$
//!
//! Monte Carlo approximation of the terminal portfolio return distribution.

pub mod monte_carlo;

pub use monte_carlo::summarize;
pub use monte_carlo::MonteCarlo;
pub use monte_carlo::SimulationSummary;
