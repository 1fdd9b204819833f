pub mod bs;
pub mod gbm;

/// Utility functions shared by the pricing engine and the scenario simulator
pub mod utils {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use statrs::function::erf::erfc_inv;

    /// Day-count basis used for every year fraction in the crate.
    pub const DAYS_PER_YEAR: f64 = 365.0;

    const SECONDS_PER_DAY: i64 = 86_400;

    /// Standard normal cumulative distribution function
    pub fn norm_cdf(x: f64) -> f64 {
        // 0.5 * [1 + erf(x / sqrt(2))]
        0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
    }

    /// Standard normal quantile function, `N^{-1}(p)`.
    ///
    /// `p <= 0` maps to `-inf` and `p >= 1` to `+inf`; NaN propagates.
    pub fn norm_inv_cdf(p: f64) -> f64 {
        if p.is_nan() {
            return f64::NAN;
        }
        if p <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }
        -std::f64::consts::SQRT_2 * erfc_inv(2.0 * p)
    }

    /// Midnight at the start of `date`.
    pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN)
    }

    /// Whole days elapsed from `from` to `to`, rounded toward negative infinity.
    ///
    /// Partial days are dropped, so a contract ending tomorrow at midnight is
    /// zero whole days away at any time after midnight today.
    pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
        (to - from).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Convert a whole-day count to a year fraction on the ACT/365 basis.
    pub fn days_to_years(days: i64) -> f64 {
        days as f64 / DAYS_PER_YEAR
    }

}
