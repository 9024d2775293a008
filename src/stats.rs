// Statistical aggregation for measurement results

use crate::units::{convert_from_millis, Units};
use serde::Serialize;
use std::cmp::Ordering;

/// Aggregated timing result for one (function, input, sample count) triple.
/// All timing fields are expressed in the unit the engine was configured
/// with when the record was produced.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub func_name: String,
    pub input_name: String,
    pub samples: usize,
    pub mean: f64,
    pub sigma_squared: f64,
    pub sigma: f64,
}

impl Stats {
    /// Aggregate a sequence of fractional-millisecond timings into a record.
    ///
    /// Variance is the population variance (mean squared deviation, divided
    /// by the full count of observations, not count - 1). Both the mean and
    /// the variance are converted to the target unit with the same linear
    /// factor, and sigma is the square root of the converted variance.
    ///
    /// An empty timing sequence yields NaN mean and variance; callers that
    /// pass a zero sample count get NaN statistics back rather than an error.
    pub fn from_times(
        func_name: impl Into<String>,
        input_name: impl Into<String>,
        times: &[f64],
        units: Units,
    ) -> Self {
        let n = times.len() as f64;
        let mean_ms = times.iter().sum::<f64>() / n;
        let sigma_squared_ms = times.iter().map(|t| (t - mean_ms).powi(2)).sum::<f64>() / n;

        let mean = convert_from_millis(mean_ms, units);
        let sigma_squared = convert_from_millis(sigma_squared_ms, units);

        Self {
            func_name: func_name.into(),
            input_name: input_name.into(),
            samples: times.len(),
            mean,
            sigma_squared,
            sigma: sigma_squared.sqrt(),
        }
    }
}

/// Ranking order for result lists: sample count ascending, then input name,
/// then mean ascending. Records whose means do not compare (NaN) are left
/// where a stable sort finds them.
pub fn rank_order(a: &Stats, b: &Stats) -> Ordering {
    a.samples
        .cmp(&b.samples)
        .then_with(|| a.input_name.cmp(&b.input_name))
        .then_with(|| a.mean.partial_cmp(&b.mean).unwrap_or(Ordering::Equal))
}

/// Format a value expressed in `units` with a readable scale for display.
pub fn format_value(value: f64, units: Units) -> String {
    let nanos = match units {
        Units::Ns => value,
        Units::Ms => value * 1_000_000.0,
        Units::S => value * 1_000_000_000.0,
    };
    if !nanos.is_finite() {
        return format!("{} {}", value, units);
    }
    if nanos < 1_000.0 {
        format!("{:.2} ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2} µs", nanos / 1_000.0)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2} s", nanos / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(samples: usize, input_name: &str, mean: f64) -> Stats {
        Stats {
            func_name: "f".to_string(),
            input_name: input_name.to_string(),
            samples,
            mean,
            sigma_squared: 0.0,
            sigma: 0.0,
        }
    }

    #[test]
    fn test_mean_and_population_variance() {
        let times = [1.0, 2.0, 3.0, 4.0];
        let stats = Stats::from_times("f", "i", &times, Units::Ms);
        assert_eq!(stats.samples, 4);
        assert_eq!(stats.mean, 2.5);
        // population variance: (1.5^2 + 0.5^2 + 0.5^2 + 1.5^2) / 4
        assert_eq!(stats.sigma_squared, 1.25);
        assert_eq!(stats.sigma, 1.25_f64.sqrt());
    }

    #[test]
    fn test_sigma_is_sqrt_of_sigma_squared() {
        let times = [0.5, 0.75, 1.25, 2.0, 3.5];
        let stats = Stats::from_times("f", "i", &times, Units::Ms);
        assert_eq!(stats.sigma, stats.sigma_squared.sqrt());
    }

    #[test]
    fn test_single_sample_has_zero_variance() {
        let stats = Stats::from_times("f", "i", &[3.0], Units::Ms);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.sigma_squared, 0.0);
        assert_eq!(stats.sigma, 0.0);
    }

    #[test]
    fn test_unit_conversion_uses_linear_factor_for_variance() {
        let times = [1.0, 3.0];
        let ms = Stats::from_times("f", "i", &times, Units::Ms);
        let ns = Stats::from_times("f", "i", &times, Units::Ns);
        assert_eq!(ns.mean, ms.mean * 1e6);
        // the variance is converted with the same linear factor as the mean
        assert_eq!(ns.sigma_squared, ms.sigma_squared * 1e6);
        assert_eq!(ns.sigma, (ms.sigma_squared * 1e6).sqrt());
    }

    #[test]
    fn test_seconds_conversion() {
        let stats = Stats::from_times("f", "i", &[1000.0, 3000.0], Units::S);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn test_empty_times_yield_nan() {
        let stats = Stats::from_times("f", "i", &[], Units::Ms);
        assert_eq!(stats.samples, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.sigma_squared.is_nan());
        assert!(stats.sigma.is_nan());
    }

    #[test]
    fn test_rank_order_by_samples_first() {
        let a = record(10, "z", 99.0);
        let b = record(100, "a", 1.0);
        assert_eq!(rank_order(&a, &b), Ordering::Less);
        assert_eq!(rank_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_rank_order_ties_on_input_name() {
        let a = record(10, "alpha", 99.0);
        let b = record(10, "beta", 1.0);
        assert_eq!(rank_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_rank_order_final_tie_break_on_mean() {
        let a = record(10, "alpha", 1.0);
        let b = record(10, "alpha", 2.0);
        assert_eq!(rank_order(&a, &b), Ordering::Less);
        assert_eq!(rank_order(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_rank_order_nan_mean_compares_equal() {
        let a = record(10, "alpha", f64::NAN);
        let b = record(10, "alpha", 2.0);
        assert_eq!(rank_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_format_value_scales() {
        assert_eq!(format_value(500.0, Units::Ns), "500.00 ns");
        assert_eq!(format_value(0.5, Units::Ms), "500.00 µs");
        assert_eq!(format_value(500.0, Units::Ms), "500.00 ms");
        assert_eq!(format_value(5.0, Units::S), "5.00 s");
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let stats = Stats::from_times("sort_a", "random", &[2.0, 2.0], Units::Ms);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"func_name\":\"sort_a\""));
        assert!(json.contains("\"samples\":2"));
    }
}
