#![allow(dead_code)] // Each test binary uses a different subset of helpers

use chrono::{NaiveDate, NaiveDateTime};
use hedge_lib::{ContractWindow, HedgeRequest, MarketParameters};
use serde::Deserialize;

/// Row of the Black-Scholes reference table
#[derive(Debug, Deserialize)]
pub struct ReferenceRow {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
}

/// Load Black-Scholes reference values from CSV
pub fn load_reference_table(file_path: &str) -> Result<Vec<ReferenceRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ReferenceRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Fixed evaluation day so that date arithmetic is deterministic
pub fn evaluation_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// Midnight of the evaluation day
pub fn evaluation_instant() -> NaiveDateTime {
    evaluation_day().and_hms_opt(0, 0, 0).unwrap()
}

/// Window starting `offset_days` after the evaluation day and lasting `length_days`
pub fn window(offset_days: i64, length_days: u32) -> ContractWindow {
    ContractWindow::from_start(
        evaluation_day() + chrono::Duration::days(offset_days),
        length_days,
    )
}

/// Hedge request with the given market inputs
pub fn create_request(
    spot: f64,
    rate: f64,
    volatility: f64,
    window: ContractWindow,
    coverage: f64,
) -> HedgeRequest {
    HedgeRequest::new(
        MarketParameters::new(spot, rate, volatility).expect("valid spot"),
        window,
        coverage,
    )
}
