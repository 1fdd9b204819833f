//! Dispersion statistics and histogram binning for simulated prices

use serde::{Deserialize, Serialize};

use crate::simulation::simulator::PriceScenario;

/// Lower edge of the display range used for histograms (2nd percentile)
pub const DISPLAY_LOWER_QUANTILE: f64 = 0.02;
/// Upper edge of the display range used for histograms (98th percentile)
pub const DISPLAY_UPPER_QUANTILE: f64 = 0.98;
/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 50;

/// Fixed percentile ladder reported with every scenario set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileLadder {
    pub p02: f64,
    pub p10: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p98: f64,
    pub p99: f64,
}

/// Summary of the simulated future-price distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); NaN for a single scenario
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// `std_dev / mean` in percent
    pub coefficient_of_variation: f64,
    pub percentiles: PercentileLadder,
}

impl ScenarioStatistics {
    /// Statistics of the scenarios' future prices; `None` for an empty set.
    pub fn from_scenarios(scenarios: &[PriceScenario]) -> Option<Self> {
        let prices: Vec<f64> = scenarios.iter().map(|s| s.future_price).collect();
        Self::from_prices(&prices)
    }

    /// Statistics of raw prices; `None` for an empty slice.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }
        let sorted = sorted_copy(prices);
        let n = sorted.len() as f64;

        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let std_dev = variance.sqrt();

        let q = |p: f64| interpolate(&sorted, p);

        Some(Self {
            count: sorted.len(),
            mean,
            std_dev,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: q(0.5),
            coefficient_of_variation: std_dev / mean * 100.0,
            percentiles: PercentileLadder {
                p02: q(0.02),
                p10: q(0.10),
                p25: q(0.25),
                p75: q(0.75),
                p90: q(0.90),
                p95: q(0.95),
                p98: q(0.98),
                p99: q(0.99),
            },
        })
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Quantile `q` (in [0, 1]) of ascending `sorted` values.
///
/// Linear interpolation between the two closest ranks, position
/// `q * (n - 1)`.  `q` is clamped to [0, 1]; `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        None
    } else {
        Some(interpolate(sorted, q))
    }
}

/// Linear-interpolation quantile of a non-empty ascending slice.
fn interpolate(sorted: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Quantile `q` of unsorted `values`.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted_copy(values), q)
}

/// One equal-width histogram bin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Histogram over a trimmed display range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Lower edge of the display range
    pub lower: f64,
    /// Upper edge of the display range
    pub upper: f64,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Whether `x` falls inside the display range (edges included)
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Number of values binned
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Bin `values` between their `lower_q` and `upper_q` quantiles.
///
/// Values outside the trimmed range are dropped.  A degenerate range (all
/// retained values equal) yields a single bin.  `None` when `values` is
/// empty or `bins` is zero.
pub fn histogram(values: &[f64], lower_q: f64, upper_q: f64, bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }
    let sorted = sorted_copy(values);
    let lower = quantile_sorted(&sorted, lower_q)?;
    let upper = quantile_sorted(&sorted, upper_q)?;

    let retained = sorted.iter().filter(|&&x| x >= lower && x <= upper);

    if upper <= lower {
        return Some(Histogram {
            lower,
            upper,
            bins: vec![HistogramBin {
                lower,
                upper,
                count: retained.count(),
            }],
        });
    }

    let width = (upper - lower) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lower + width * i as f64,
            upper: lower + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &x in retained {
        // The upper edge belongs to the last bin
        let idx = (((x - lower) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }

    Some(Histogram {
        lower,
        upper,
        bins: out,
    })
}

/// Histogram of scenario future prices over the 2%-98% display range.
pub fn display_histogram(scenarios: &[PriceScenario], bins: usize) -> Option<Histogram> {
    let prices: Vec<f64> = scenarios.iter().map(|s| s.future_price).collect();
    histogram(
        &prices,
        DISPLAY_LOWER_QUANTILE,
        DISPLAY_UPPER_QUANTILE,
        bins,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolation() {
        let values = [4.0, 1.0, 3.0, 2.0, 5.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 1.0), Some(5.0));
        assert_eq!(quantile(&values, 0.5), Some(3.0));
        // Position 0.1 * 4 = 0.4 between 1 and 2
        assert!((quantile(&values, 0.1).unwrap() - 1.4).abs() < 1e-12);
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_ladder_matches_free_quantile() {
        let prices: Vec<f64> = (1..=37).map(|i| (i * 7 % 37) as f64 + 0.5).collect();
        let stats = ScenarioStatistics::from_prices(&prices).unwrap();
        assert_eq!(Some(stats.median), quantile(&prices, 0.5));
        assert_eq!(Some(stats.percentiles.p02), quantile(&prices, 0.02));
        assert_eq!(Some(stats.percentiles.p99), quantile(&prices, 0.99));
        assert!(!stats.percentiles.p98.is_nan());
    }

    #[test]
    fn test_statistics() {
        let prices = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = ScenarioStatistics::from_prices(&prices).unwrap();
        assert_eq!(stats.count, 8);
        assert_eq!(stats.mean, 5.0);
        // Sample variance: 32 / 7
        assert!((stats.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.median, 4.5);
        assert!((stats.coefficient_of_variation - stats.std_dev / 5.0 * 100.0).abs() < 1e-12);
        assert!(stats.percentiles.p10 <= stats.percentiles.p25);
        assert!(stats.percentiles.p95 <= stats.percentiles.p99);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(ScenarioStatistics::from_prices(&[]).is_none());
        let single = ScenarioStatistics::from_prices(&[42.0]).unwrap();
        assert_eq!(single.median, 42.0);
        assert!(single.std_dev.is_nan());
    }

    #[test]
    fn test_histogram_trims_tails() {
        let values: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        let hist = histogram(&values, 0.02, 0.98, 10).unwrap();
        assert_eq!(hist.lower, 2.0);
        assert_eq!(hist.upper, 98.0);
        assert_eq!(hist.bins.len(), 10);
        // 2..=98 inclusive
        assert_eq!(hist.total(), 97);
        assert!(hist.contains(50.0));
        assert!(!hist.contains(99.0));
        assert_eq!(hist.bins[9].upper, 98.0);
    }

    #[test]
    fn test_histogram_degenerate() {
        let hist = histogram(&[3.0; 20], 0.02, 0.98, 50).unwrap();
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.total(), 20);
        assert!(histogram(&[], 0.02, 0.98, 50).is_none());
        assert!(histogram(&[1.0, 2.0], 0.02, 0.98, 0).is_none());
    }
}
