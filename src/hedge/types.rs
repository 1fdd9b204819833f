use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hedge::error::HedgeError;
use crate::models::utils::{days_to_years, start_of_day, whole_days_between};

/// Market inputs shared by the hedge engine and the scenario simulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Current price of the underlying (must be > 0)
    pub spot_price: f64,
    /// Continuously compounded risk-free rate (may be 0)
    pub risk_free_rate: f64,
    /// Annualised volatility (as decimal, e.g., 0.25 for 25%)
    pub volatility: f64,
}

impl MarketParameters {
    /// Build market parameters, rejecting a non-positive spot price.
    pub fn new(spot_price: f64, risk_free_rate: f64, volatility: f64) -> Result<Self, HedgeError> {
        let params = Self {
            spot_price,
            risk_free_rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the `spot_price > 0` invariant.
    pub fn validate(&self) -> Result<(), HedgeError> {
        if self.spot_price > 0.0 && self.spot_price.is_finite() {
            Ok(())
        } else {
            Err(HedgeError::InvalidSpot {
                spot_price: self.spot_price,
            })
        }
    }
}

/// Delivery window of a forward physical-delivery contract.
///
/// Dates are calendar days; every time measure treats them as midnight at
/// the start of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ContractWindow {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, HedgeError> {
        if end_date < start_date {
            return Err(HedgeError::InvalidWindow {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Window starting on `start_date` and lasting `days` calendar days.
    pub fn from_start(start_date: NaiveDate, days: u32) -> Self {
        Self {
            start_date,
            end_date: start_date + chrono::Duration::days(i64::from(days)),
        }
    }

    /// Calendar days between start and end.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Middle of the delivery window (noon when the span is an odd number of days).
    pub fn delivery_midpoint(&self) -> NaiveDateTime {
        let start = start_of_day(self.start_date);
        let end = start_of_day(self.end_date);
        start + (end - start) / 2
    }

    /// Years from `as_of` to the end date, counted in whole days.
    ///
    /// Zero or negative once the end date is no longer in the future.
    pub fn time_to_delivery(&self, as_of: NaiveDateTime) -> f64 {
        days_to_years(whole_days_between(as_of, start_of_day(self.end_date)))
    }

    /// Years from `as_of` to the delivery midpoint, counted in whole days.
    ///
    /// Used as the option maturity and strike horizon.  Goes negative when
    /// the midpoint has already passed.
    pub fn holding_period(&self, as_of: NaiveDateTime) -> f64 {
        days_to_years(whole_days_between(as_of, self.delivery_midpoint()))
    }

    /// Half of the window's own span, in years.
    ///
    /// Horizon of the scenario simulator: it describes dispersion over the
    /// contract duration itself and does not depend on the evaluation instant.
    pub fn scenario_holding_period(&self) -> f64 {
        days_to_years(self.span_days()) / 2.0
    }
}

/// Inputs of a single hedge computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgeRequest {
    pub market: MarketParameters,
    pub window: ContractWindow,
    /// Confidence level in percent; the future price should stay below the
    /// strike with this probability.  0 and 100 are accepted and produce
    /// infinite quantiles.
    pub coverage_percentile: f64,
}

impl HedgeRequest {
    pub fn new(market: MarketParameters, window: ContractWindow, coverage_percentile: f64) -> Self {
        Self {
            market,
            window,
            coverage_percentile,
        }
    }

    /// Same request with a different volatility
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.market.volatility = volatility;
        self
    }

    /// Same request with a different coverage percentile
    pub fn with_coverage(mut self, coverage_percentile: f64) -> Self {
        self.coverage_percentile = coverage_percentile;
        self
    }

    /// Same request with a different contract window
    pub fn with_window(mut self, window: ContractWindow) -> Self {
        self.window = window;
        self
    }
}

/// Direction of the recommended hedge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HedgeDirection {
    /// Delivery price above spot: protect against rising prices with calls
    Upside,
    /// Delivery price at or below spot: protect against falling prices with puts
    Downside,
}

impl fmt::Display for HedgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HedgeDirection::Upside => write!(f, "upside hedge: buy calls against a price rise"),
            HedgeDirection::Downside => write!(f, "downside hedge: buy puts against a price fall"),
        }
    }
}

/// Hedge recommendation produced by [`derive_hedge`](crate::hedge::derive_hedge)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgeResult {
    pub spot_price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Years from the evaluation instant to the end date
    pub time_to_delivery: f64,
    /// Years from the evaluation instant to the delivery midpoint
    pub holding_period: f64,
    pub volatility: f64,
    pub coverage_percentile: f64,
    pub risk_free_rate: f64,
    /// Delivery price at the coverage percentile, also the hedge options' strike
    pub strike_price: f64,
    /// `strike_price - spot_price`
    pub price_delta: f64,
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
}

impl HedgeResult {
    pub fn direction(&self) -> HedgeDirection {
        if self.price_delta > 0.0 {
            HedgeDirection::Upside
        } else {
            HedgeDirection::Downside
        }
    }

    /// Price delta as a percentage of spot
    pub fn price_delta_pct(&self) -> f64 {
        self.price_delta / self.spot_price * 100.0
    }

    /// Model probability that the future price ends above the strike
    pub fn exceedance_probability(&self) -> f64 {
        1.0 - self.coverage_percentile / 100.0
    }
}
