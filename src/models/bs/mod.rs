// Closed-form Black-Scholes pricing for European calls and puts, plus the
// first-order delta.  Degenerate inputs (expired or zero-volatility options)
// collapse to intrinsic values instead of dividing by zero in d1/d2.

use crate::models::utils::norm_cdf;

/// `max(x, 0)` that keeps a NaN payoff instead of flooring it to zero.
fn intrinsic(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else {
        x
    }
}

/// d1 and d2 terms of the Black-Scholes formula.
///
/// Only meaningful for `T > 0` and `sigma > 0`; callers handle the
/// degenerate cases before reaching this point.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// * `T <= 0`: intrinsic value `max(S - K, 0)`.
/// * `sigma <= 0`: discounted intrinsic value `max(S - K e^{-rT}, 0)`.
///
/// A NaN strike yields a NaN price in both boundary cases.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    if T <= 0.0 {
        return intrinsic(S - K);
    }
    let discount = (-r * T).exp();
    if sigma <= 0.0 {
        return intrinsic(S - K * discount);
    }
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    S * norm_cdf(d1) - K * discount * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// * `T <= 0`: intrinsic value `max(K - S, 0)`.
/// * `sigma <= 0`: discounted intrinsic value `max(K e^{-rT} - S, 0)`.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    if T <= 0.0 {
        return intrinsic(K - S);
    }
    let discount = (-r * T).exp();
    if sigma <= 0.0 {
        return intrinsic(K * discount - S);
    }
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    K * discount * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// Delta of a European call, `N(d1)`.
///
/// Collapses to a {0, 1} step at the boundaries: against the strike once
/// expired, against the discounted strike when volatility is zero.
#[allow(non_snake_case)]
pub fn bs_call_delta(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    if T <= 0.0 {
        return if S > K { 1.0 } else { 0.0 };
    }
    if sigma <= 0.0 {
        return if S > K * (-r * T).exp() { 1.0 } else { 0.0 };
    }
    let (d1, _) = d1_d2(S, K, T, r, sigma);
    norm_cdf(d1)
}

/// Delta of a European put, `N(d1) - 1`, with a {-1, 0} step at the boundaries.
#[allow(non_snake_case)]
pub fn bs_put_delta(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    if T <= 0.0 {
        return if S < K { -1.0 } else { 0.0 };
    }
    if sigma <= 0.0 {
        return if S < K * (-r * T).exp() { -1.0 } else { 0.0 };
    }
    let (d1, _) = d1_d2(S, K, T, r, sigma);
    norm_cdf(d1) - 1.0
}
