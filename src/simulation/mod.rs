//! Fat-tailed Monte-Carlo scenarios of the future price
//!
//! Shocks are drawn from a Student-t distribution, topped up with a smaller
//! set of wide normal shocks, and mapped through the GBM transform over half
//! the contract window.  Randomness always comes from a caller-owned
//! [`ScenarioRng`].

pub mod rng;
pub mod simulator;
pub mod stats;

pub use rng::{ScenarioRng, DEFAULT_SEED};
pub use simulator::{PriceScenario, ScenarioSimulator, ShockModel};
pub use stats::{
    display_histogram, histogram, quantile, quantile_sorted, Histogram, HistogramBin,
    PercentileLadder, ScenarioStatistics,
};
