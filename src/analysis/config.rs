//! Chart configuration loaded from chart_config.json.
//!
//! If the config file doesn't exist, default values are used.
//! The config file is read fresh each time a chart is rendered,
//! so changes take effect without rebuilding.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Chart configuration with all customizable values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Font sizes
    pub font: FontConfig,
    /// Colors (RGB values)
    pub colors: ColorConfig,
    /// Layout dimensions
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Title font size
    pub title_size: u32,
    /// Table header font size
    pub table_header_size: u32,
    /// Table value font size
    pub table_value_size: u32,
    /// Legend font size
    pub legend_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Primary bar color [R, G, B]
    pub bar_primary: [u8; 3],
    /// Bar outline / table header color [R, G, B]
    pub bar_outline: [u8; 3],
    /// Line marker color [R, G, B]
    pub line_marker: [u8; 3],
    /// Light gray background [R, G, B]
    pub light_gray_bg: [u8; 3],
    /// Grid line color [R, G, B]
    pub grid_color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Chart image width
    pub chart_width: u32,
    /// Chart image height
    pub chart_height: u32,
    /// Title area height
    pub title_height: u32,
    /// Table area height
    pub table_height: u32,
    /// Table header row height
    pub table_header_height: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            font: FontConfig::default(),
            colors: ColorConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            title_size: 28,
            table_header_size: 20,
            table_value_size: 20,
            legend_size: 14,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            bar_primary: [52, 152, 219],  // #3498DB
            bar_outline: [41, 128, 185],  // #2980B9
            line_marker: [192, 57, 43],   // #C0392B
            light_gray_bg: [245, 245, 245],
            grid_color: [220, 220, 220],
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chart_width: 760,
            chart_height: 480,
            title_height: 44,
            table_height: 64,
            table_header_height: 28,
        }
    }
}

impl ChartConfig {
    /// Load config from file, or return defaults if file doesn't exist.
    pub fn load(config_path: &Path) -> Self {
        if config_path.exists() {
            match fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => {
                        crate::log(&format!(
                            "Loaded chart config from {}",
                            config_path.display()
                        ));
                        return config;
                    }
                    Err(e) => {
                        crate::log(&format!(
                            "Failed to parse chart config: {}. Using defaults.",
                            e
                        ));
                    }
                },
                Err(e) => {
                    crate::log(&format!(
                        "Failed to read chart config: {}. Using defaults.",
                        e
                    ));
                }
            }
        }
        Self::default()
    }

    /// Save default config to file (for reference).
    pub fn save_default(config_path: &Path) -> anyhow::Result<()> {
        let default_config = Self::default();
        let json = serde_json::to_string_pretty(&default_config)?;
        fs::write(config_path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ChartConfig::load(Path::new("does_not_exist.json"));
        assert_eq!(config.layout.chart_width, 760);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart_config.json");
        fs::write(&path, "{ not json").unwrap();

        let config = ChartConfig::load(&path);
        assert_eq!(config.colors.bar_primary, [52, 152, 219]);
    }

    #[test]
    fn test_save_default_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart_config.json");

        ChartConfig::save_default(&path).unwrap();
        let config = ChartConfig::load(&path);
        assert_eq!(config.font.title_size, 28);
    }
}
