use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::hedge::{derive_hedge, ContractWindow, HedgeError, HedgeRequest, HedgeResult};

/// Hedge outcome for one value of the swept input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Value of the swept input (volatility, percentile or days)
    pub input: f64,
    pub strike_price: f64,
    pub price_delta: f64,
    pub call_price: f64,
    pub put_price: f64,
}

impl From<(f64, &HedgeResult)> for SensitivityPoint {
    fn from((input, result): (f64, &HedgeResult)) -> Self {
        Self {
            input,
            strike_price: result.strike_price,
            price_delta: result.price_delta,
            call_price: result.call_price,
            put_price: result.put_price,
        }
    }
}

/// Derive the hedge for each `(input, request)` pair.
fn sweep<I>(requests: I, as_of: NaiveDateTime) -> Result<Vec<SensitivityPoint>, HedgeError>
where
    I: IntoIterator<Item = (f64, HedgeRequest)>,
{
    requests
        .into_iter()
        .map(|(input, request)| {
            let result = derive_hedge(&request, as_of)?;
            Ok(SensitivityPoint::from((input, &result)))
        })
        .collect()
}

/// Re-derive the hedge for each volatility in `volatilities`.
pub fn volatility_sweep(
    base: &HedgeRequest,
    volatilities: &[f64],
    as_of: NaiveDateTime,
) -> Result<Vec<SensitivityPoint>, HedgeError> {
    sweep(
        volatilities.iter().map(|&v| (v, base.with_volatility(v))),
        as_of,
    )
}

/// Re-derive the hedge for each coverage percentile in `percentiles`.
pub fn coverage_sweep(
    base: &HedgeRequest,
    percentiles: &[f64],
    as_of: NaiveDateTime,
) -> Result<Vec<SensitivityPoint>, HedgeError> {
    sweep(
        percentiles.iter().map(|&p| (p, base.with_coverage(p))),
        as_of,
    )
}

/// Re-derive the hedge for windows of `days` calendar days starting on the
/// base window's start date.
///
/// Fails with `DeliveryNotInFuture` as soon as one window already ended.
pub fn horizon_sweep(
    base: &HedgeRequest,
    days: &[u32],
    as_of: NaiveDateTime,
) -> Result<Vec<SensitivityPoint>, HedgeError> {
    let start = base.window.start_date;
    sweep(
        days.iter().map(|&d| {
            let window = ContractWindow::from_start(start, d);
            (f64::from(d), base.with_window(window))
        }),
        as_of,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hedge::MarketParameters;
    use crate::models::utils::start_of_day;
    use chrono::NaiveDate;

    fn base() -> (HedgeRequest, NaiveDateTime) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let request = HedgeRequest::new(
            MarketParameters::new(100.0, 0.02, 0.2).unwrap(),
            ContractWindow::from_start(today, 90),
            95.0,
        );
        (request, start_of_day(today))
    }

    #[test]
    fn test_volatility_raises_strike() {
        let (request, as_of) = base();
        let points = volatility_sweep(&request, &[0.1, 0.2, 0.3, 0.4, 0.5], as_of).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[2].input, 0.3);
        for pair in points.windows(2) {
            assert!(pair[1].strike_price > pair[0].strike_price);
        }
    }

    #[test]
    fn test_coverage_sweep_matches_direct_call() {
        let (request, as_of) = base();
        let points = coverage_sweep(&request, &[80.0, 90.0, 99.0], as_of).unwrap();
        let direct = derive_hedge(&request.with_coverage(90.0), as_of).unwrap();
        assert_eq!(points[1].strike_price, direct.strike_price);
        assert_eq!(points[1].call_price, direct.call_price);
    }

    #[test]
    fn test_horizon_sweep() {
        let (request, as_of) = base();
        let points = horizon_sweep(&request, &[30, 90, 180], as_of).unwrap();
        assert_eq!(points[0].input, 30.0);
        // Longer horizons widen the 95% quantile
        assert!(points[2].price_delta > points[0].price_delta);
        assert!(horizon_sweep(&request, &[0], as_of).is_err());
    }

    #[test]
    fn test_horizon_sweep_windows_start_on_base_date() {
        let (request, as_of) = base();
        let points = horizon_sweep(&request, &[45, 120], as_of).unwrap();
        for (point, days) in points.iter().zip([45u32, 120]) {
            let window = ContractWindow::from_start(request.window.start_date, days);
            let direct = derive_hedge(&request.with_window(window), as_of).unwrap();
            assert_eq!(point.input, f64::from(days));
            assert_eq!(point.strike_price, direct.strike_price);
            assert_eq!(point.put_price, direct.put_price);
        }
    }
}
