//! Histogram bucketing for the model sample.

/// Histogram of a sample, bucketed into a fixed number of equal-width bins
/// spanning the sample range.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Left edge of each bucket.
    pub bucket_starts: Vec<f64>,
    /// Count of values per bucket.
    pub counts: Vec<u32>,
    /// Width of every bucket.
    pub bucket_width: f64,
}

/// Build a histogram with `bins` equal-width buckets.
///
/// Values equal to the maximum land in the last bucket rather than one past
/// the end. A degenerate sample (all values equal) produces one bucket
/// holding everything.
pub fn build_histogram(values: &[f64], bins: usize) -> Histogram {
    if values.is_empty() || bins == 0 {
        return Histogram {
            bucket_starts: vec![],
            counts: vec![],
            bucket_width: 0.0,
        };
    }

    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_val - min_val;

    if range == 0.0 {
        return Histogram {
            bucket_starts: vec![min_val],
            counts: vec![values.len() as u32],
            bucket_width: 1.0,
        };
    }

    let bucket_width = range / bins as f64;
    let mut counts = vec![0u32; bins];

    for &val in values {
        let idx = (((val - min_val) / bucket_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let bucket_starts: Vec<f64> = (0..bins)
        .map(|i| min_val + i as f64 * bucket_width)
        .collect();

    Histogram {
        bucket_starts,
        counts,
        bucket_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_count_and_totals() {
        let values: Vec<f64> = (0..1000).map(|i| i as f64 / 10.0).collect();
        let hist = build_histogram(&values, 40);

        assert_eq!(hist.bucket_starts.len(), 40);
        assert_eq!(hist.counts.len(), 40);
        assert_eq!(hist.counts.iter().sum::<u32>(), 1000);
    }

    #[test]
    fn test_uniform_spread() {
        let values = vec![0.0, 1.0, 2.0, 3.0];
        let hist = build_histogram(&values, 4);

        assert_eq!(hist.counts, vec![1, 1, 1, 1]);
        assert!((hist.bucket_width - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_max_value_lands_in_last_bucket() {
        let values = vec![0.0, 10.0];
        let hist = build_histogram(&values, 5);

        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[4], 1);
    }

    #[test]
    fn test_degenerate_sample() {
        let values = vec![7.0; 50];
        let hist = build_histogram(&values, 40);

        assert_eq!(hist.bucket_starts, vec![7.0]);
        assert_eq!(hist.counts, vec![50]);
    }

    #[test]
    fn test_empty_input() {
        let hist = build_histogram(&[], 40);
        assert!(hist.bucket_starts.is_empty());
        assert!(hist.counts.is_empty());
    }
}
