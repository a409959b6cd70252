//! Model configuration.
//!
//! Loads settings from model_config.json at startup. Provides the sampling
//! model parameters and histogram bin count.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<ModelConfig> = OnceLock::new();

/// Parameters of the over-probability sampling model.
///
/// By default the sample is centered half a point below the line with a
/// spread of 1.5. The offset has no statistical basis; it is a fixed
/// modeling assumption, overridable here without changing the default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Amount subtracted from the line to center the sample distribution
    pub center_offset: f64,
    /// Standard deviation of the sample distribution
    pub std_dev: f64,
    /// Number of values drawn per sample
    pub sample_size: usize,
    /// Number of histogram buckets
    pub histogram_bins: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            center_offset: 0.5,
            std_dev: 1.5,
            sample_size: 5000,
            histogram_bins: 40,
        }
    }
}

/// Loads configuration from model_config.json or returns defaults.
/// Looks for model_config.json in the same directory as the executable.
fn load_config() -> ModelConfig {
    let config_path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("model_config.json")))
        .unwrap_or_else(|| Path::new("model_config.json").to_path_buf());

    crate::log(&format!("Looking for config at: {}", config_path.display()));

    if config_path.exists() {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    crate::log("Config loaded from model_config.json");
                    return config;
                }
                Err(e) => {
                    crate::log(&format!(
                        "Failed to parse model_config.json: {}. Using defaults.",
                        e
                    ));
                }
            },
            Err(e) => {
                crate::log(&format!(
                    "Failed to read model_config.json: {}. Using defaults.",
                    e
                ));
            }
        }
    } else {
        crate::log("model_config.json not found. Using default config.");
    }

    ModelConfig::default()
}

/// Initializes the global configuration. Call once at startup.
pub fn init_config() {
    let _ = CONFIG.set(load_config());
}

/// Returns a reference to the global configuration.
/// Panics if called before init_config().
pub fn get_config() -> &'static ModelConfig {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ModelConfig::default();
        assert!((config.center_offset - 0.5).abs() < f64::EPSILON);
        assert!((config.std_dev - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.sample_size, 5000);
        assert_eq!(config.histogram_bins, 40);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ModelConfig = serde_json::from_str(r#"{"std_dev": 2.0}"#).unwrap();
        assert!((config.std_dev - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.sample_size, 5000);
    }
}
