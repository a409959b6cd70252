//! Over-probability sampling model.
//!
//! Draws a synthetic sample from a normal distribution centered slightly
//! below the parsed line and reports the fraction of values that land above
//! the line. The model is a naive placeholder: it has no statistical basis
//! and no fitting behind it, and the estimate carries sampling noise because
//! the generator is unseeded in production.

use rand::Rng;

use crate::config::ModelConfig;

/// Result of a successful estimation run.
#[derive(Clone, Debug)]
pub struct OverEstimate {
    /// The parsed line value the sample is compared against.
    pub line: f64,
    /// Fraction of the sample strictly greater than the line, in [0, 1].
    pub probability: f64,
    /// Independent second draw with the same parameters, used only for the
    /// histogram display. Deliberately not the draw the probability came
    /// from; the two are separate samples of the same distribution.
    pub histogram_sample: Vec<f64>,
}

/// Estimates the probability of the outcome going over the line.
///
/// Returns `None` when the line string is not numeric. That is an expected
/// condition (OCR picked up a non-numeric token), not an error.
pub fn estimate_over<R: Rng>(
    line: &str,
    config: &ModelConfig,
    rng: &mut R,
) -> Option<OverEstimate> {
    let line: f64 = line.trim().parse().ok()?;

    let mean = line - config.center_offset;

    let sample = draw_sample(mean, config.std_dev, config.sample_size, rng);
    let over_count = sample.iter().filter(|&&v| v > line).count();
    let probability = over_count as f64 / sample.len() as f64;

    let histogram_sample = draw_sample(mean, config.std_dev, config.sample_size, rng);

    Some(OverEstimate {
        line,
        probability,
        histogram_sample,
    })
}

/// Draws `count` values from a normal distribution via the Box-Muller
/// transform over uniform deviates.
pub fn draw_sample<R: Rng>(mean: f64, std_dev: f64, count: usize, rng: &mut R) -> Vec<f64> {
    let mut sample = Vec::with_capacity(count);

    while sample.len() < count {
        // Two uniforms yield two independent normal deviates.
        let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
        let u2: f64 = rng.gen_range(0.0..1.0);
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;

        sample.push(mean + std_dev * radius * theta.cos());
        if sample.len() < count {
            sample.push(mean + std_dev * radius * theta.sin());
        }
    }

    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config() -> ModelConfig {
        ModelConfig::default()
    }

    #[test]
    fn test_numeric_line_yields_estimate() {
        let mut rng = StdRng::seed_from_u64(7);
        let estimate = estimate_over("24.5", &test_config(), &mut rng).unwrap();

        assert!((0.0..=1.0).contains(&estimate.probability));
        assert!((estimate.line - 24.5).abs() < f64::EPSILON);
        assert_eq!(estimate.histogram_sample.len(), 5000);
    }

    #[test]
    fn test_integer_line_accepted() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(estimate_over("24", &test_config(), &mut rng).is_some());
    }

    #[test]
    fn test_non_numeric_line_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(estimate_over("twenty", &test_config(), &mut rng).is_none());
        assert!(estimate_over("", &test_config(), &mut rng).is_none());
        assert!(estimate_over("abc", &test_config(), &mut rng).is_none());
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = estimate_over("24.5", &test_config(), &mut rng_a).unwrap();
        let b = estimate_over("24.5", &test_config(), &mut rng_b).unwrap();

        assert_eq!(a.probability, b.probability);
        assert_eq!(a.histogram_sample, b.histogram_sample);
    }

    #[test]
    fn test_repeated_estimates_agree_within_sampling_noise() {
        // Two unseeded-style runs (different seeds) should differ only by
        // sampling variance. With n = 5000 the frequency estimate has a
        // standard error around 0.007, so 0.05 is a generous bound.
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let a = estimate_over("24.5", &test_config(), &mut rng_a).unwrap();
        let b = estimate_over("24.5", &test_config(), &mut rng_b).unwrap();

        assert!((a.probability - b.probability).abs() < 0.05);
    }

    #[test]
    fn test_probability_reflects_offset_below_line() {
        // Centered half a point below the line with spread 1.5, the over
        // probability should sit near the normal tail value P(Z > 1/3) ≈ 0.37.
        let mut rng = StdRng::seed_from_u64(99);
        let estimate = estimate_over("30", &test_config(), &mut rng).unwrap();

        assert!(estimate.probability > 0.30 && estimate.probability < 0.45);
    }

    #[test]
    fn test_zero_spread_puts_all_mass_below_line() {
        // With no spread every value equals line - offset, which is not
        // strictly greater than the line.
        let config = ModelConfig {
            std_dev: 0.0,
            ..ModelConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let estimate = estimate_over("10", &config, &mut rng).unwrap();

        assert_eq!(estimate.probability, 0.0);
    }

    #[test]
    fn test_draw_sample_moments() {
        let mut rng = StdRng::seed_from_u64(11);
        let sample = draw_sample(24.0, 1.5, 5000, &mut rng);

        let mean: f64 = sample.iter().sum::<f64>() / sample.len() as f64;
        let variance: f64 = sample
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / sample.len() as f64;

        assert!((mean - 24.0).abs() < 0.1);
        assert!((variance.sqrt() - 1.5).abs() < 0.1);
    }

    #[test]
    fn test_draw_sample_odd_count() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(draw_sample(0.0, 1.0, 4999, &mut rng).len(), 4999);
    }
}
