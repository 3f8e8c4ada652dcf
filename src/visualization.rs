//! # Visualization
//!
//! $$
//! \{(\sigma_k, \mu_k)\}_k,\ \{R^{(s)}\}_s \mapsto \text{diagnostic charts}
//! $$
//!
//! Plotly chart builders for the frontier, the simulated terminal-return
//! distribution and the allocation split. Charts are only built here;
//! rendering stays with the caller.

use plotly::common::Mode;
use plotly::common::Title;
use plotly::layout::Axis;
use plotly::Bar;
use plotly::Histogram;
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;

use crate::portfolio::AllocationLine;
use crate::portfolio::FrontierPoint;

/// Line chart of the efficient frontier: volatility on x, expected return
/// on y, in sweep order.
pub fn frontier_chart(frontier: &[FrontierPoint]) -> Plot {
  let x: Vec<f64> = frontier.iter().map(|p| p.volatility).collect();
  let y: Vec<f64> = frontier.iter().map(|p| p.expected_return).collect();

  let trace = Scatter::new(x, y)
    .mode(Mode::LinesMarkers)
    .name("efficient frontier");

  let mut plot = Plot::new();
  plot.add_trace(trace);
  plot.set_layout(
    Layout::new()
      .title(Title::with_text("Efficient Frontier"))
      .x_axis(Axis::new().title(Title::with_text("Volatility")))
      .y_axis(Axis::new().title(Title::with_text("Expected Return"))),
  );
  plot
}

/// Histogram of simulated terminal portfolio returns.
pub fn terminal_return_histogram(samples: &[f64]) -> Plot {
  let trace = Histogram::new(samples.to_vec()).name("terminal returns");

  let mut plot = Plot::new();
  plot.add_trace(trace);
  plot.set_layout(
    Layout::new()
      .title(Title::with_text("Simulated Terminal Returns"))
      .x_axis(Axis::new().title(Title::with_text("Terminal Return")))
      .y_axis(Axis::new().title(Title::with_text("Trials"))),
  );
  plot
}

/// Bar chart of invested amounts per instrument.
pub fn allocation_chart(lines: &[AllocationLine]) -> Plot {
  let symbols: Vec<String> = lines.iter().map(|l| l.symbol.clone()).collect();
  let amounts: Vec<f64> = lines.iter().map(|l| l.amount).collect();

  let trace = Bar::new(symbols, amounts).name("allocation");

  let mut plot = Plot::new();
  plot.add_trace(trace);
  plot.set_layout(
    Layout::new()
      .title(Title::with_text("Investment Allocation"))
      .y_axis(Axis::new().title(Title::with_text("Amount"))),
  );
  plot
}
