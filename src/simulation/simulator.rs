use chrono::NaiveDateTime;
use rand_distr::{Normal, StudentT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{extreme_count, ScenarioConfig};
use crate::hedge::{ContractWindow, HedgeError, MarketParameters};
use crate::models::gbm::gbm_price;
use crate::simulation::rng::ScenarioRng;

/// One simulated future price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScenario {
    /// Price at the end of the scenario horizon
    pub future_price: f64,
    /// `future_price - spot_price`
    pub price_delta: f64,
    /// Standardised shock that produced this scenario
    pub shock: f64,
}

/// Fat-tailed shock generator.
///
/// Student-t shocks for the bulk of the sample, followed by a smaller set of
/// wide normal shocks standing in for jump risk.
#[derive(Debug, Clone)]
pub struct ShockModel {
    tail: StudentT<f64>,
    extreme: Normal<f64>,
    extreme_divisor: usize,
}

impl ShockModel {
    pub fn new(
        degrees_of_freedom: f64,
        extreme_std_dev: f64,
        extreme_divisor: usize,
    ) -> Result<Self, HedgeError> {
        let tail = StudentT::new(degrees_of_freedom).map_err(|e| {
            HedgeError::InvalidScenarioConfig {
                reason: format!("Student-t with {} degrees of freedom: {}", degrees_of_freedom, e),
            }
        })?;
        let extreme =
            Normal::new(0.0, extreme_std_dev).map_err(|e| HedgeError::InvalidScenarioConfig {
                reason: format!("extreme normal with std dev {}: {}", extreme_std_dev, e),
            })?;
        Ok(Self {
            tail,
            extreme,
            extreme_divisor,
        })
    }

    /// Shock model described by `config`.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self, HedgeError> {
        Self::new(
            config.degrees_of_freedom,
            config.extreme_std_dev,
            config.extreme_divisor,
        )
    }

    /// Draw `count` t shocks, then the extreme shocks, in that order.
    pub fn draw(&self, count: usize, rng: &mut ScenarioRng) -> Vec<f64> {
        let extremes = extreme_count(count, self.extreme_divisor);
        let mut shocks = Vec::with_capacity(count + extremes);
        rng.extend_from(&self.tail, count, &mut shocks);
        rng.extend_from(&self.extreme, extremes, &mut shocks);
        shocks
    }
}

/// Monte-Carlo generator of future prices over a contract window.
///
/// Holds no random state: every call draws from the stream it is given, so a
/// single simulator can be shared across threads.
#[derive(Debug, Clone)]
pub struct ScenarioSimulator {
    shocks: ShockModel,
    seed: u64,
}

impl ScenarioSimulator {
    pub fn new(config: &ScenarioConfig) -> Result<Self, HedgeError> {
        let shocks = ShockModel::from_config(config)?;
        Ok(Self {
            shocks,
            seed: config.seed,
        })
    }

    /// Seed used by [`simulate_seeded`](Self::simulate_seeded)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shock_model(&self) -> &ShockModel {
        &self.shocks
    }

    /// Simulate `count` fat-tailed scenarios plus `count / divisor` extreme ones.
    ///
    /// Returns an empty vector when the end date is not in the future at
    /// `as_of`.  The horizon is half the window's own span, independent of
    /// `as_of`.  Scenarios come back unsorted, in draw order.
    pub fn simulate(
        &self,
        params: &MarketParameters,
        window: &ContractWindow,
        count: usize,
        as_of: NaiveDateTime,
        rng: &mut ScenarioRng,
    ) -> Vec<PriceScenario> {
        if window.time_to_delivery(as_of) <= 0.0 {
            debug!(end_date = %window.end_date, "contract expired, no scenarios");
            return Vec::new();
        }

        let horizon = window.scenario_holding_period();
        let shocks = self.shocks.draw(count, rng);

        debug!(
            count,
            total = shocks.len(),
            horizon,
            seed = rng.seed(),
            "simulating price scenarios"
        );

        let spot = params.spot_price;
        shocks
            .into_iter()
            .map(|shock| {
                let future_price = gbm_price(
                    spot,
                    params.risk_free_rate,
                    params.volatility,
                    horizon,
                    shock,
                );
                PriceScenario {
                    future_price,
                    price_delta: future_price - spot,
                    shock,
                }
            })
            .collect()
    }

    /// [`simulate`](Self::simulate) on a fresh stream seeded with the configured seed.
    ///
    /// Repeated calls with identical inputs return identical scenarios.
    pub fn simulate_seeded(
        &self,
        params: &MarketParameters,
        window: &ContractWindow,
        count: usize,
        as_of: NaiveDateTime,
    ) -> Vec<PriceScenario> {
        let mut rng = ScenarioRng::from_seed(self.seed);
        self.simulate(params, window, count, as_of, &mut rng)
    }
}
