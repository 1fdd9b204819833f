// demos/hedge_demo.rs

//! Walk-through of the hedge calculator
//!
//! This example shows how to:
//! 1. Derive a hedge recommendation for a delivery window
//! 2. Read the option prices and deltas struck at the delivery price
//! 3. See how the recommendation moves with volatility, coverage and horizon
//! 4. Compare underlyings with different price levels and volatilities
//!
//! Set `RUST_LOG=hedge_lib=debug` to see the engine's own log lines.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use hedge_lib::models::utils::start_of_day;
use hedge_lib::{
    calculate_price_hedge, coverage_sweep, expected_price_path, horizon_sweep, volatility_sweep,
    ContractWindow, HedgeRequest, HedgeResult, MarketParameters, SensitivityPoint,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Price Hedge Calculator Demo");
    println!("===========================");

    let today = Local::now().date_naive();
    let as_of = start_of_day(today);

    // Step 1: basic hedge
    println!("\nStep 1: Basic hedge (S = 100, 90-day window, 20% vol, 95% coverage, r = 2%)");
    let request = HedgeRequest::new(
        MarketParameters::new(100.0, 0.02, 0.20)?,
        ContractWindow::from_start(today, 90),
        95.0,
    );
    let result = calculate_price_hedge(&request, as_of)?;
    print_result(&result);

    // Step 2: expected path to delivery
    println!("\nStep 2: Expected price path with 95% band");
    println!("  {:>6} {:>10} {:>10} {:>10}", "Day", "Lower", "Expected", "Upper");
    for point in expected_price_path(100.0, 0.02, 0.20, result.time_to_delivery, 7) {
        println!(
            "  {:>6.0} {:>10.2} {:>10.2} {:>10.2}",
            point.days(),
            point.lower_band,
            point.expected_price,
            point.upper_band
        );
    }

    // Step 3: sensitivities
    println!("\nStep 3: Sensitivity analysis");
    print_sweep(
        "Volatility",
        &volatility_sweep(&request, &[0.10, 0.15, 0.20, 0.30, 0.40, 0.50], as_of)?,
        |v| format!("{:.0}%", v * 100.0),
    );
    print_sweep(
        "Coverage",
        &coverage_sweep(&request, &[50.0, 75.0, 90.0, 95.0, 99.0], as_of)?,
        |p| format!("{:.0}%", p),
    );
    print_sweep(
        "Horizon",
        &horizon_sweep(&request, &[30, 60, 90, 180, 365], as_of)?,
        |d| format!("{:.0}d", d),
    );

    // Step 4: different underlyings
    println!("\nStep 4: Underlying comparison at 90% coverage");
    let underlyings = [
        ("Oil", 80.0, 0.35, 180),
        ("Gold", 2000.0, 0.20, 90),
        ("Wheat", 300.0, 0.25, 120),
    ];
    println!(
        "  {:<8} {:>10} {:>10} {:>9} {:>10} {:>10}",
        "Asset", "Spot", "Strike", "Delta %", "Call", "Put"
    );
    for (name, spot, vol, days) in underlyings {
        let req = HedgeRequest::new(
            MarketParameters::new(spot, 0.02, vol)?,
            ContractWindow::from_start(today, days),
            90.0,
        );
        let r = calculate_price_hedge(&req, as_of)?;
        println!(
            "  {:<8} {:>10.2} {:>10.2} {:>8.2}% {:>10.2} {:>10.2}",
            name,
            spot,
            r.strike_price,
            r.price_delta_pct(),
            r.call_price,
            r.put_price
        );
    }

    // Step 5: risk ladder
    println!("\nStep 5: Risk ladder (probability the price ends above the delivery price)");
    for coverage in [75.0, 90.0, 95.0, 99.0] {
        let r = calculate_price_hedge(&request.with_coverage(coverage), as_of)?;
        println!(
            "  {:>4.0}% coverage -> deliver at {:>8.2}, exceedance {:>5.1}%",
            coverage,
            r.strike_price,
            r.exceedance_probability() * 100.0
        );
    }

    // Step 6: expired contract
    println!("\nStep 6: Contract that already ended");
    let expired = request.with_window(ContractWindow::new(
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(today),
        NaiveDate::from_ymd_opt(2020, 3, 31).unwrap_or(today),
    )?);
    match calculate_price_hedge(&expired, as_of) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  rejected: {}", e),
    }

    Ok(())
}

fn print_result(result: &HedgeResult) {
    println!("  Window:            {} to {}", result.start_date, result.end_date);
    println!("  Time to delivery:  {:.4} years", result.time_to_delivery);
    println!("  Holding period:    {:.4} years", result.holding_period);
    println!("  Delivery price:    {:.2}", result.strike_price);
    println!(
        "  Price delta:       {:+.2} ({:+.2}%)",
        result.price_delta,
        result.price_delta_pct()
    );
    println!("  Call:              {:.4} (delta {:.4})", result.call_price, result.call_delta);
    println!("  Put:               {:.4} (delta {:.4})", result.put_price, result.put_delta);
    println!("  Recommendation:    {}", result.direction());
}

fn print_sweep(label: &str, points: &[SensitivityPoint], fmt_input: impl Fn(f64) -> String) {
    println!("\n  {}:", label);
    println!("  {:>10} {:>10} {:>10} {:>10} {:>10}", label, "Strike", "Delta", "Call", "Put");
    for p in points {
        println!(
            "  {:>10} {:>10.2} {:>+10.2} {:>10.4} {:>10.4}",
            fmt_input(p.input),
            p.strike_price,
            p.price_delta,
            p.call_price,
            p.put_price
        );
    }
}
