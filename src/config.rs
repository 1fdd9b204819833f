use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::hedge::{ContractWindow, HedgeError, HedgeRequest, MarketParameters};
use crate::simulation::rng::DEFAULT_SEED;
use crate::simulation::simulator::ShockModel;

/// Scenario simulator configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    /// Number of Student-t shocks drawn per simulation
    #[serde(default = "default_scenario_count")]
    pub count: usize,
    /// Seed of the per-call random stream
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Degrees of freedom of the Student-t shock distribution
    #[serde(default = "default_degrees_of_freedom")]
    pub degrees_of_freedom: f64,
    /// One extreme normal shock is appended per `extreme_divisor` t shocks (0 = none)
    #[serde(default = "default_extreme_divisor")]
    pub extreme_divisor: usize,
    /// Standard deviation of the extreme normal shocks
    #[serde(default = "default_extreme_std_dev")]
    pub extreme_std_dev: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            count: default_scenario_count(),
            seed: default_seed(),
            degrees_of_freedom: default_degrees_of_freedom(),
            extreme_divisor: default_extreme_divisor(),
            extreme_std_dev: default_extreme_std_dev(),
        }
    }
}

impl ScenarioConfig {
    /// Total number of scenarios a simulation with this config produces
    pub fn total_scenarios(&self) -> usize {
        self.count + self.extreme_count(self.count)
    }

    /// Number of extreme shocks appended to `count` t shocks
    pub fn extreme_count(&self, count: usize) -> usize {
        extreme_count(count, self.extreme_divisor)
    }

    /// Check that the shock distributions can be sampled from.
    pub fn validate(&self) -> Result<(), HedgeError> {
        ShockModel::from_config(self).map(|_| ())
    }
}

/// One extreme shock per `divisor` t shocks; a zero divisor disables them.
pub(crate) fn extreme_count(count: usize, divisor: usize) -> usize {
    count.checked_div(divisor).unwrap_or(0)
}

/// Top-level configuration: defaults for hedge requests plus the simulator
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HedgeConfig {
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Coverage percentile in percent
    #[serde(default = "default_coverage_percentile")]
    pub coverage_percentile: f64,

    /// Annualised volatility (as decimal)
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            coverage_percentile: default_coverage_percentile(),
            volatility: default_volatility(),
            scenarios: ScenarioConfig::default(),
        }
    }
}

impl HedgeConfig {
    /// Default settings with 10,000 scenarios
    pub fn standard() -> Self {
        Self::default()
    }

    /// Small scenario set for quick checks and tests
    pub fn quick() -> Self {
        Self {
            scenarios: ScenarioConfig {
                count: 1_000,
                ..ScenarioConfig::default()
            },
            ..Self::default()
        }
    }

    /// Large scenario set for smoother distribution estimates
    pub fn high_resolution() -> Self {
        Self {
            scenarios: ScenarioConfig {
                count: 50_000,
                ..ScenarioConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse hedge configuration")?;
        config.scenarios.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Market parameters for `spot_price` using the configured rate and volatility.
    pub fn market(&self, spot_price: f64) -> Result<MarketParameters, HedgeError> {
        MarketParameters::new(spot_price, self.risk_free_rate, self.volatility)
    }

    /// Hedge request for `spot_price` over `window` using the configured defaults.
    pub fn request(&self, spot_price: f64, window: ContractWindow) -> Result<HedgeRequest, HedgeError> {
        Ok(HedgeRequest::new(
            self.market(spot_price)?,
            window,
            self.coverage_percentile,
        ))
    }
}

fn default_scenario_count() -> usize {
    10_000
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_degrees_of_freedom() -> f64 {
    3.0
}

fn default_extreme_divisor() -> usize {
    10
}

fn default_extreme_std_dev() -> f64 {
    2.0
}

fn default_risk_free_rate() -> f64 {
    0.0
}

fn default_coverage_percentile() -> f64 {
    75.0
}

fn default_volatility() -> f64 {
    0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HedgeConfig::default();
        assert_eq!(config.risk_free_rate, 0.0);
        assert_eq!(config.coverage_percentile, 75.0);
        assert_eq!(config.volatility, 0.25);
        assert_eq!(config.scenarios.count, 10_000);
        assert_eq!(config.scenarios.seed, 42);
        assert_eq!(config.scenarios.total_scenarios(), 11_000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = HedgeConfig::from_toml_str(
            r#"
            volatility = 0.35
            coverage_percentile = 90.0

            [scenarios]
            count = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.volatility, 0.35);
        assert_eq!(config.coverage_percentile, 90.0);
        assert_eq!(config.risk_free_rate, 0.0);
        assert_eq!(config.scenarios.count, 5000);
        assert_eq!(config.scenarios.degrees_of_freedom, 3.0);
        assert_eq!(config.scenarios.extreme_count(5000), 500);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(HedgeConfig::from_toml_str("").unwrap(), HedgeConfig::default());
    }

    #[test]
    fn test_invalid_scenarios_rejected() {
        let err = HedgeConfig::from_toml_str("[scenarios]\ndegrees_of_freedom = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("degrees of freedom"));
        assert!(HedgeConfig::from_toml_str("volatility = \"high\"").is_err());
    }

    #[test]
    fn test_zero_divisor_disables_extremes() {
        let scenarios = ScenarioConfig {
            extreme_divisor: 0,
            ..ScenarioConfig::default()
        };
        assert_eq!(scenarios.extreme_count(1000), 0);
        assert_eq!(scenarios.total_scenarios(), 10_000);
    }

    #[test]
    fn test_validation_matches_simulator_construction() {
        let bad_std_dev = ScenarioConfig {
            extreme_std_dev: f64::NAN,
            ..ScenarioConfig::default()
        };
        assert!(bad_std_dev.validate().is_err());
        assert_eq!(
            bad_std_dev.validate().unwrap_err(),
            ShockModel::from_config(&bad_std_dev).unwrap_err()
        );
        assert!(ScenarioConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(HedgeConfig::quick().scenarios.count, 1_000);
        assert_eq!(HedgeConfig::high_resolution().scenarios.count, 50_000);
        assert_eq!(HedgeConfig::standard(), HedgeConfig::default());
    }
}
