// Example: scenario_histogram.rs
// Simulates fat-tailed future prices for one contract and writes an SVG
// histogram of the 2%-98% range with the spot price, the hedge delivery
// price and the 95th/99th scenario percentiles marked.
//
// Usage:
//     cargo run --example scenario_histogram -- [config.toml] [spot] [days]
//
// Without a config file the standard preset (10,000 scenarios) is used.
// The output image will be written to price_scenarios.svg in the working directory.

use std::env;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use hedge_lib::models::utils::start_of_day;
use hedge_lib::simulation::stats::DEFAULT_BINS;
use hedge_lib::{
    calculate_price_hedge, calculate_price_scenarios, default_configs, display_histogram,
    ContractWindow, HedgeConfig, ScenarioStatistics,
};
use plotters::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => HedgeConfig::from_file(path)?,
        None => default_configs::standard(),
    };
    let spot: f64 = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("invalid spot price '{}'", s))?,
        None => 100.0,
    };
    let days: u32 = match args.get(3) {
        Some(d) => d.parse().with_context(|| format!("invalid window length '{}'", d))?,
        None => 90,
    };

    let today = Local::now().date_naive();
    let as_of = start_of_day(today);
    let window = ContractWindow::from_start(today, days);
    let request = config.request(spot, window)?;

    let hedge = calculate_price_hedge(&request, as_of)?;
    let scenarios = calculate_price_scenarios(&request.market, &window, &config.scenarios, as_of)?;
    let stats = ScenarioStatistics::from_scenarios(&scenarios)
        .ok_or_else(|| anyhow!("no scenarios simulated"))?;
    let hist = display_histogram(&scenarios, DEFAULT_BINS)
        .ok_or_else(|| anyhow!("could not bin scenarios"))?;

    println!("Simulated {} scenarios (seed {})", stats.count, config.scenarios.seed);
    println!("  Mean:     {:.2}", stats.mean);
    println!("  Median:   {:.2}", stats.median);
    println!("  Std dev:  {:.2} ({:.1}% of mean)", stats.std_dev, stats.coefficient_of_variation);
    println!("  Range:    {:.2} .. {:.2}", stats.min, stats.max);
    println!(
        "  P10/P90:  {:.2} / {:.2}",
        stats.percentiles.p10, stats.percentiles.p90
    );
    println!(
        "  P95/P99:  {:.2} / {:.2}",
        stats.percentiles.p95, stats.percentiles.p99
    );
    println!(
        "  Delivery price at {:.0}% coverage: {:.2}",
        hedge.coverage_percentile, hedge.strike_price
    );

    let max_count = hist.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    let y_max = (max_count * 1.1).max(1.0);

    let root = SVGBackend::new("price_scenarios.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Simulated Future Prices | S={:.2}, {}d window, vol={:.0}%",
                spot,
                days,
                config.volatility * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.lower..hist.upper, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Future price")
        .y_desc("Scenarios")
        .draw()?;

    chart.draw_series(hist.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    let markers = [
        ("Spot", spot, BLACK),
        ("Delivery price", hedge.strike_price, RED),
        ("P95", stats.percentiles.p95, GREEN),
        ("P99", stats.percentiles.p99, MAGENTA),
    ];
    for (label, x, color) in markers {
        // Markers outside the trimmed range would stretch the axis
        if !hist.contains(x) {
            println!("  {} ({:.2}) lies outside the displayed range", label, x);
            continue;
        }
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, 0.0), (x, y_max)],
                color.stroke_width(2),
            )))?
            .label(format!("{} = {:.2}", label, x))
            .legend(move |(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to price_scenarios.svg");
    Ok(())
}
