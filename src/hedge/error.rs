use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the hedging engine and the value-type constructors.
///
/// [`derive_hedge`](crate::hedge::derive_hedge) only ever returns
/// `DeliveryNotInFuture`; every other irregular numeric input is absorbed by
/// the boundary formulas of the pricing model.  The remaining variants come
/// from the validating constructors (`MarketParameters::new`,
/// `ContractWindow::new`) and from building a scenario simulator out of a
/// configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HedgeError {
    /// The contract end date is not strictly after the evaluation instant.
    ///
    /// Echoes the request so callers can render a message alongside the
    /// inputs; `time_to_delivery` is always `0.0`.
    #[error("contract end date must be in the future (end date: {end_date})")]
    DeliveryNotInFuture {
        spot_price: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        time_to_delivery: f64,
    },

    /// Non-positive or non-finite spot price.
    #[error("spot price must be positive: S = {spot_price}")]
    InvalidSpot { spot_price: f64 },

    /// Contract window whose end precedes its start.
    #[error("contract window ends before it starts: {start_date} > {end_date}")]
    InvalidWindow {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    /// Shock distribution parameters that cannot be sampled from.
    #[error("invalid scenario configuration: {reason}")]
    InvalidScenarioConfig { reason: String },
}
