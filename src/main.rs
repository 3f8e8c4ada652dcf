use anyhow::Result;
use chrono::Days;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use markowitz_rs::market::PricePanel;
use markowitz_rs::market::PriceSeries;
use markowitz_rs::portfolio::AnalysisConfig;
use markowitz_rs::portfolio::PortfolioAnalyzer;
use markowitz_rs::simulation::summarize;

/// Offline demo: analyze three synthetic random walks end to end and print
/// the resulting allocation, frontier endpoints and simulation summary.
fn main() -> Result<()> {
  let mut rng = StdRng::seed_from_u64(2024);
  let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

  let universe = [("ALFA", 0.0006, 0.012), ("BETA", 0.0003, 0.008), ("GAMA", 0.0008, 0.020)];
  let mut series = Vec::with_capacity(universe.len());
  for &(symbol, drift, noise) in &universe {
    let mut price = 100.0;
    let rows: Vec<(NaiveDate, f64)> = (0..504)
      .map(|i| {
        price *= 1.0 + drift + rng.gen_range(-noise..noise);
        (start + Days::new(i as u64), price)
      })
      .collect();
    series.push(PriceSeries::new(symbol, rows)?);
  }
  let panel = PricePanel::from_series(&series)?;

  let analyzer = PortfolioAnalyzer::new(AnalysisConfig::default());
  let report = analyzer.analyze_with_rng(&panel, &mut rng)?;

  println!("Optimal portfolio (gamma = {}):", analyzer.config().gamma);
  for line in report.allocation(10_000.0)? {
    println!(
      "  {}  weight {:6.2}%  invested {:10.2}",
      line.symbol,
      line.weight * 100.0,
      line.amount
    );
  }
  println!(
    "  expected return {:.4}, volatility {:.4}",
    report.optimal.expected_return, report.optimal.volatility
  );

  if let (Some(first), Some(last)) = (report.frontier.first(), report.frontier.last()) {
    println!("\nEfficient frontier ({} samples):", report.frontier.len());
    println!(
      "  min-variance end: vol {:.4}, return {:.4}",
      first.volatility, first.expected_return
    );
    println!(
      "  max-return end:   vol {:.4}, return {:.4}",
      last.volatility, last.expected_return
    );
  }

  let summary = summarize(&report.terminal_returns)?;
  println!(
    "\nMonte Carlo over {} days x {} trials:",
    analyzer.config().horizon_days,
    analyzer.config().simulations
  );
  println!("  mean {:.4}, std {:.4}", summary.mean, summary.std_dev);
  println!(
    "  var95 {:.4}, cvar95 {:.4}, P(loss) {:.2}%",
    summary.var_95,
    summary.cvar_95,
    summary.prob_loss * 100.0
  );

  Ok(())
}
