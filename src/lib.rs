//! # Hedge-Lib: Price Hedging for Forward Delivery Contracts
//!
//! `hedge-lib` computes price-hedging recommendations for forward
//! physical-delivery contracts.  Given today's spot price, a delivery window,
//! volatility, a target coverage level and a risk-free rate, it derives the
//! delivery ("strike") price that the future spot price should stay below
//! with the requested probability, then prices the call and put struck there
//! under Black-Scholes and reports their deltas.
//!
//! ## Core Features
//!
//! - **Black-Scholes Engine**: closed-form European call/put prices and deltas
//!   with intrinsic-value fallbacks for expired or zero-volatility options
//! - **Coverage Strikes**: lognormal quantile of the forward price at the
//!   delivery midpoint
//! - **Scenario Simulation**: seeded Student-t shocks with extra wide normal
//!   shocks for a fat-tailed empirical price distribution
//! - **Analysis**: dispersion statistics, percentile ladders, trimmed
//!   histograms and sensitivity sweeps
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hedge_lib::{
//!     calculate_price_hedge, calculate_price_scenarios, default_configs, ContractWindow,
//!     ScenarioStatistics,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let as_of = today.and_hms_opt(0, 0, 0).unwrap();
//! let window = ContractWindow::from_start(today, 90);
//!
//! let config = default_configs::quick();
//! let request = config.request(100.0, window)?;
//!
//! // Hedge recommendation
//! let hedge = calculate_price_hedge(&request, as_of)?;
//! println!("Delivery price: {:.2} ({})", hedge.strike_price, hedge.direction());
//!
//! // Empirical distribution of future prices
//! let scenarios = calculate_price_scenarios(&request.market, &window, &config.scenarios, as_of)?;
//! if let Some(stats) = ScenarioStatistics::from_scenarios(&scenarios) {
//!     println!("Mean future price: {:.2}", stats.mean);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `standard()`: 10,000 scenarios
//! - `quick()`: 1,000 scenarios for checks and tests
//! - `high_resolution()`: 50,000 scenarios for smoother tails

// ================================================================================================
// MODULES
// ================================================================================================

pub mod analysis;
pub mod config;
pub mod hedge;
pub mod models;
pub mod simulation;

// ================================================================================================
// IMPORTS
// ================================================================================================

use chrono::NaiveDateTime;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Configuration
pub use config::{HedgeConfig, ScenarioConfig};

// Hedge engine types and operations
pub use hedge::{
    derive_hedge, derive_hedge_now, strike_for_coverage, ContractWindow, HedgeDirection,
    HedgeError, HedgeRequest, HedgeResult, MarketParameters,
};

// Pricing model
pub use models::bs::{bs_call_delta, bs_call_price, bs_put_delta, bs_put_price};
pub use models::gbm::{expected_price_path, gbm_price, PricePathPoint};

// Scenario simulation
pub use simulation::{
    display_histogram, Histogram, HistogramBin, PercentileLadder, PriceScenario,
    ScenarioRng, ScenarioSimulator, ScenarioStatistics, DEFAULT_SEED,
};

// Sensitivity analysis
pub use analysis::{coverage_sweep, horizon_sweep, volatility_sweep, SensitivityPoint};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured settings for common use cases.
///
/// All presets share the same market defaults (0% rate, 25% volatility, 75th
/// percentile coverage) and the documented seed; they differ in the number of
/// simulated scenarios.
pub mod default_configs {
    use crate::config::HedgeConfig;

    /// 10,000 Student-t scenarios plus 1,000 extreme ones.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hedge_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.scenarios.count, 10_000);
    /// ```
    pub fn standard() -> HedgeConfig {
        HedgeConfig::standard()
    }

    /// 1,000 scenarios; fast enough for unit tests and interactive checks.
    pub fn quick() -> HedgeConfig {
        HedgeConfig::quick()
    }

    /// 50,000 scenarios for stable tail percentiles.
    pub fn high_resolution() -> HedgeConfig {
        HedgeConfig::high_resolution()
    }
}

/// Derive the hedge recommendation for a contract.
///
/// # Arguments
///
/// * `request` - Market parameters, contract window and coverage percentile
/// * `as_of` - Evaluation instant; time to delivery and holding period are
///   measured from here in whole days
///
/// # Returns
///
/// A [`HedgeResult`] holding the delivery price, the price delta against spot
/// and the Black-Scholes price and delta of the call and put struck at the
/// delivery price with maturity at the delivery midpoint.
///
/// # Errors
///
/// * [`HedgeError::DeliveryNotInFuture`] if the contract end date is not
///   strictly after `as_of`.  This is the only failure; zero volatility,
///   extreme percentiles and a passed delivery midpoint all produce numbers.
///
/// # Methodology
///
/// ```text
/// z      = N^{-1}(coverage / 100)
/// strike = S * exp((r - σ²/2) h + z σ √h)
/// ```
///
/// where `h` is the holding period from `as_of` to the delivery midpoint.
pub fn calculate_price_hedge(
    request: &HedgeRequest,
    as_of: NaiveDateTime,
) -> Result<HedgeResult, HedgeError> {
    derive_hedge(request, as_of)
}

/// Simulate future prices over a contract window with a fresh seeded stream.
///
/// Draws `config.count` Student-t shocks followed by
/// `config.count / config.extreme_divisor` normal shocks and maps them through
/// the GBM transform over half the window's span.  The stream is seeded with
/// `config.seed` on every call, so identical inputs give identical output.
///
/// # Returns
///
/// Scenarios in draw order, or an empty vector when the contract end date is
/// not in the future at `as_of`.
///
/// # Errors
///
/// * [`HedgeError::InvalidScenarioConfig`] if the shock distribution
///   parameters in `config` cannot be sampled from.
pub fn calculate_price_scenarios(
    params: &MarketParameters,
    window: &ContractWindow,
    config: &ScenarioConfig,
    as_of: NaiveDateTime,
) -> Result<Vec<PriceScenario>, HedgeError> {
    let simulator = ScenarioSimulator::new(config)?;
    Ok(simulator.simulate_seeded(params, window, config.count, as_of))
}
