//! # Market
//!
//! $$
//! (\text{symbol}, t_0, t_1) \mapsto \{(d_i, p_i)\}_{i=1}^{m}
//! $$
//!
//! Price history containers and the market-data collaborator seam.

pub mod panel;
pub mod provider;
pub mod series;
#[cfg(feature = "yahoo")]
pub mod yahoo;

pub use panel::PricePanel;
pub use provider::PriceProvider;
pub use series::PriceSeries;
#[cfg(feature = "yahoo")]
pub use yahoo::YahooProvider;
