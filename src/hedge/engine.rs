use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::hedge::error::HedgeError;
use crate::hedge::types::{HedgeRequest, HedgeResult};
use crate::models::bs::{bs_call_delta, bs_call_price, bs_put_delta, bs_put_price};
use crate::models::gbm::gbm_price;
use crate::models::utils::norm_inv_cdf;

/// Delivery price at a given coverage percentile.
///
/// The `coverage_percentile / 100` quantile of the lognormal forward price
/// after `holding_period` years.
pub fn strike_for_coverage(
    spot: f64,
    risk_free_rate: f64,
    volatility: f64,
    holding_period: f64,
    coverage_percentile: f64,
) -> f64 {
    let z = norm_inv_cdf(coverage_percentile / 100.0);
    gbm_price(spot, risk_free_rate, volatility, holding_period, z)
}

/// Derive the hedge recommendation for `request`, evaluated at `as_of`.
///
/// Fails only when the contract end date is not strictly in the future.
/// A delivery midpoint that has already passed gives a negative holding
/// period; it is not rejected and simply flows through the formulas.
pub fn derive_hedge(request: &HedgeRequest, as_of: NaiveDateTime) -> Result<HedgeResult, HedgeError> {
    let market = &request.market;
    let window = &request.window;

    let time_to_delivery = window.time_to_delivery(as_of);
    let holding_period = window.holding_period(as_of);

    if time_to_delivery <= 0.0 {
        warn!(
            end_date = %window.end_date,
            as_of = %as_of,
            "contract end date is not in the future"
        );
        return Err(HedgeError::DeliveryNotInFuture {
            spot_price: market.spot_price,
            start_date: window.start_date,
            end_date: window.end_date,
            time_to_delivery: 0.0,
        });
    }

    let s = market.spot_price;
    let r = market.risk_free_rate;
    let sigma = market.volatility;

    let strike_price =
        strike_for_coverage(s, r, sigma, holding_period, request.coverage_percentile);

    // Hedge options mature at the delivery midpoint
    let call_price = bs_call_price(s, strike_price, holding_period, r, sigma);
    let put_price = bs_put_price(s, strike_price, holding_period, r, sigma);
    let call_delta = bs_call_delta(s, strike_price, holding_period, r, sigma);
    let put_delta = bs_put_delta(s, strike_price, holding_period, r, sigma);

    let result = HedgeResult {
        spot_price: s,
        start_date: window.start_date,
        end_date: window.end_date,
        time_to_delivery,
        holding_period,
        volatility: sigma,
        coverage_percentile: request.coverage_percentile,
        risk_free_rate: r,
        strike_price,
        price_delta: strike_price - s,
        call_price,
        put_price,
        call_delta,
        put_delta,
    };

    debug!(
        spot = s,
        strike = strike_price,
        holding_period,
        time_to_delivery,
        coverage = request.coverage_percentile,
        "hedge derived"
    );

    Ok(result)
}

/// [`derive_hedge`] evaluated at the current local time.
pub fn derive_hedge_now(request: &HedgeRequest) -> Result<HedgeResult, HedgeError> {
    derive_hedge(request, chrono::Local::now().naive_local())
}
