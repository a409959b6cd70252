//! Statistics calculation for the model sample.
//!
//! Calculates mean, median, min, max, standard deviation, and quartiles.

use serde::Serialize;

/// Summary statistics for one drawn sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleStats {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean (average)
    pub mean: f64,
    /// Median (middle value)
    pub median: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Standard deviation (population)
    pub std_dev: f64,
    /// First quartile (25th percentile)
    pub quartile_1: f64,
    /// Third quartile (75th percentile)
    pub quartile_3: f64,
}

impl SampleStats {
    /// Calculate statistics for a sample.
    pub fn from_sample(values: &[f64]) -> Self {
        if values.is_empty() {
            return SampleStats {
                count: 0,
                mean: 0.0,
                median: 0.0,
                min: 0.0,
                max: 0.0,
                std_dev: 0.0,
                quartile_1: 0.0,
                quartile_3: 0.0,
            };
        }

        let count = values.len();

        // Sort for median, quartiles, min, max
        let mut sorted: Vec<f64> = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let min = sorted[0];
        let max = sorted[count - 1];

        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;

        let median = calculate_median(&sorted);
        let quartile_1 = calculate_percentile(&sorted, 25.0);
        let quartile_3 = calculate_percentile(&sorted, 75.0);

        // Standard deviation (population formula)
        let variance: f64 = values
            .iter()
            .map(|&v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;
        let std_dev = variance.sqrt();

        SampleStats {
            count,
            mean,
            median,
            min,
            max,
            std_dev,
            quartile_1,
            quartile_3,
        }
    }
}

/// Calculate median from sorted values.
fn calculate_median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        // Even: average of two middle values
        let mid = n / 2;
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        // Odd: middle value
        sorted[n / 2]
    }
}

/// Calculate percentile using linear interpolation.
fn calculate_percentile(sorted: &[f64], percentile: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }

    // Index in range [0, n-1]
    let index = (percentile / 100.0) * (n - 1) as f64;
    let lower_idx = index.floor() as usize;
    let upper_idx = index.ceil() as usize;

    if lower_idx == upper_idx {
        sorted[lower_idx]
    } else {
        let frac = index.fract();
        let lower = sorted[lower_idx];
        let upper = sorted[upper_idx];
        lower + (upper - lower) * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let stats = SampleStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.mean - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_median_odd() {
        let stats = SampleStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.median - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_median_even() {
        let stats = SampleStats::from_sample(&[1.0, 2.0, 3.0, 4.0]);
        assert!((stats.median - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_min_max_unsorted_input() {
        let stats = SampleStats::from_sample(&[5.0, 1.0, 3.0, 9.0, 2.0]);
        assert!((stats.min - 1.0).abs() < 0.001);
        assert!((stats.max - 9.0).abs() < 0.001);
    }

    #[test]
    fn test_std_dev() {
        // Values 1..5: mean 3, population variance 2, std dev sqrt(2)
        let stats = SampleStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.std_dev - 1.414).abs() < 0.01);
    }

    #[test]
    fn test_quartiles() {
        let stats = SampleStats::from_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.quartile_1 - 2.0).abs() < 0.001);
        assert!((stats.quartile_3 - 4.0).abs() < 0.001);
    }

    #[test]
    fn test_single_value() {
        let stats = SampleStats::from_sample(&[42.0]);
        assert!((stats.mean - 42.0).abs() < 0.001);
        assert!((stats.median - 42.0).abs() < 0.001);
        assert!((stats.std_dev - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_sample() {
        let stats = SampleStats::from_sample(&[]);
        assert_eq!(stats.count, 0);
        assert!((stats.mean - 0.0).abs() < 0.001);
    }
}
