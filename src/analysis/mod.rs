//! Analysis pipeline and result visualization.
//!
//! This module provides:
//! - The upload-to-estimate pipeline (OCR → field extraction → model)
//! - Statistics calculation (mean, median, std_dev, quartiles)
//! - Histogram chart rendering with a line marker and statistics table
//! - JSON export of analysis results

pub mod charts;
pub mod config;
pub mod export;
pub mod histogram;
pub mod statistics;

pub use charts::ChartImage;
pub use statistics::SampleStats;

use anyhow::Result;
use image::{ImageBuffer, Rgba};

use crate::config::ModelConfig;
use crate::model::OverEstimate;
use crate::ocr::OcrText;
use crate::parse::{FieldName, ParsedFields};

/// Everything derived from one uploaded screenshot. Lives for a single
/// upload-to-display cycle; nothing is carried over between uploads.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Raw OCR output (or the failure placeholder)
    pub raw_text: OcrText,
    /// Fields parsed out of the raw text
    pub fields: ParsedFields,
    /// Over-probability estimate; `None` when the line field was absent or
    /// not numeric
    pub estimate: Option<OverEstimate>,
    /// Statistics of the histogram sample, present alongside the estimate
    pub sample_stats: Option<SampleStats>,
}

impl Analysis {
    /// True when a line field was parsed out of the text at all.
    pub fn line_detected(&self) -> bool {
        self.fields.contains_key(&FieldName::Line)
    }
}

/// Runs the full pipeline on an uploaded screenshot.
///
/// OCR failures are swallowed into the placeholder text; a missing or
/// non-numeric line simply leaves the estimate empty. The only hard error
/// is an invalid field pattern, which cannot happen with the built-in set.
pub fn analyze_screenshot(
    img: &ImageBuffer<Rgba<u8>, Vec<u8>>,
    model_config: &ModelConfig,
) -> Result<Analysis> {
    let raw_text = crate::ocr::extract_text(img);
    let fields = crate::parse::extract_fields(raw_text.as_str())?;

    let estimate = fields.get(&FieldName::Line).and_then(|line| {
        crate::model::estimate_over(line, model_config, &mut rand::thread_rng())
    });

    let sample_stats = estimate
        .as_ref()
        .map(|e| SampleStats::from_sample(&e.histogram_sample));

    crate::log(&format!(
        "Analysis: {} fields, line {}, probability {}",
        fields.len(),
        fields
            .get(&FieldName::Line)
            .map(|s| s.as_str())
            .unwrap_or("absent"),
        estimate
            .as_ref()
            .map(|e| format!("{:.3}", e.probability))
            .unwrap_or_else(|| "n/a".to_string()),
    ));

    Ok(Analysis {
        raw_text,
        fields,
        estimate,
        sample_stats,
    })
}
