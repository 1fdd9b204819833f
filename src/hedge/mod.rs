//! Hedge derivation for forward physical-delivery contracts
//!
//! Turns a spot price, a delivery window and a coverage percentile into a
//! delivery ("strike") price and the Black-Scholes value and delta of the
//! call and put struck there.

pub mod engine;
pub mod error;
pub mod types;

pub use engine::*;
pub use error::*;
pub use types::*;
