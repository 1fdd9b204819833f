//! Geometric Brownian motion price transform.
//!
//! Under risk-neutral GBM the log price at horizon `t` is normal with mean
//! `ln S + (r - σ²/2) t` and standard deviation `σ √t`.  Mapping a standard
//! shock `z` through [`gbm_price`] therefore gives the `N(z)` quantile of the
//! forward price distribution.  The same transform turns sampled shocks into
//! simulated future prices.

/// Two-sided 95% normal multiplier used for the expected-price band.
pub const BAND_Z_95: f64 = 1.96;

/// Future price reached by a standardised shock `z` after `horizon` years.
///
/// `S · exp((r − σ²/2)·t + z·σ·√t)`.  A negative horizon yields NaN through
/// the square root rather than an error.
pub fn gbm_price(spot: f64, risk_free_rate: f64, volatility: f64, horizon: f64, z: f64) -> f64 {
    let drift = (risk_free_rate - 0.5 * volatility * volatility) * horizon;
    let diffusion = z * volatility * horizon.sqrt();
    spot * (drift + diffusion).exp()
}

/// One point of the expected price path with its 95% confidence band
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricePathPoint {
    /// Time from the evaluation instant, in years
    pub t: f64,
    /// Median GBM price `S · exp((r − σ²/2) t)`
    pub expected_price: f64,
    /// Lower edge of the band, `expected · exp(−1.96 σ √t)`
    pub lower_band: f64,
    /// Upper edge of the band, `expected · exp(+1.96 σ √t)`
    pub upper_band: f64,
}

impl PricePathPoint {
    /// Elapsed calendar days for display
    pub fn days(&self) -> f64 {
        self.t * crate::models::utils::DAYS_PER_YEAR
    }
}

/// Expected price trajectory over `[0, time_to_delivery]` sampled at `steps`
/// evenly spaced times (both ends included).
///
/// Returns an empty path for `steps == 0` and a single point at `t = 0` for
/// `steps == 1`.
pub fn expected_price_path(
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_delivery: f64,
    steps: usize,
) -> Vec<PricePathPoint> {
    let mut path = Vec::with_capacity(steps);
    for i in 0..steps {
        let t = if steps > 1 {
            time_to_delivery * i as f64 / (steps - 1) as f64
        } else {
            0.0
        };
        let expected_price = spot * ((risk_free_rate - 0.5 * volatility * volatility) * t).exp();
        let half_width = BAND_Z_95 * volatility * t.sqrt();
        path.push(PricePathPoint {
            t,
            expected_price,
            lower_band: expected_price * (-half_width).exp(),
            upper_band: expected_price * half_width.exp(),
        });
    }
    path
}
