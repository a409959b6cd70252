//! JSON export for analysis results.

use super::statistics::SampleStats;
use super::Analysis;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Serializable summary of one analyzed screenshot.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Local timestamp of the analysis
    pub analyzed_at: String,
    /// Raw OCR output (or the failure placeholder)
    pub raw_text: String,
    /// Parsed fields, keyed by field name
    pub fields: BTreeMap<String, String>,
    /// Parsed line value, when the line field was numeric
    pub line: Option<f64>,
    /// Over-probability, when an estimate was produced
    pub probability: Option<f64>,
    /// Statistics of the histogram sample
    pub sample_stats: Option<SampleStats>,
}

impl AnalysisReport {
    /// Build a report from an analysis result.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let fields: BTreeMap<String, String> = analysis
            .fields
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.clone()))
            .collect();

        AnalysisReport {
            analyzed_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            raw_text: analysis.raw_text.as_str().to_string(),
            fields,
            line: analysis.estimate.as_ref().map(|e| e.line),
            probability: analysis.estimate.as_ref().map(|e| e.probability),
            sample_stats: analysis.sample_stats.clone(),
        }
    }
}

/// Export a report to a JSON file.
///
/// The output is pretty-printed for human readability.
pub fn export_to_json(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize analysis to JSON")?;

    let mut file = File::create(output_path).context(format!(
        "Failed to create JSON file: {}",
        output_path.display()
    ))?;

    file.write_all(json.as_bytes())
        .context("Failed to write JSON data")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OverEstimate;
    use crate::ocr::OcrText;
    use crate::parse::{FieldName, ParsedFields};
    use tempfile::tempdir;

    fn sample_analysis() -> Analysis {
        let mut fields = ParsedFields::new();
        fields.insert(FieldName::Player, "Jordan Clark".to_string());
        fields.insert(FieldName::Line, "24.5".to_string());

        let histogram_sample = vec![23.0, 24.0, 25.0, 26.0];
        let sample_stats = Some(SampleStats::from_sample(&histogram_sample));

        Analysis {
            raw_text: OcrText::Recognized("Jordan Clark 24.5".to_string()),
            fields,
            estimate: Some(OverEstimate {
                line: 24.5,
                probability: 0.37,
                histogram_sample,
            }),
            sample_stats,
        }
    }

    #[test]
    fn test_export_to_json() {
        let report = AnalysisReport::from_analysis(&sample_analysis());

        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.json");

        export_to_json(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"player\": \"Jordan Clark\""));
        assert!(content.contains("\"line\": 24.5"));
        assert!(content.contains("\"probability\": 0.37"));
    }

    #[test]
    fn test_report_without_estimate() {
        let analysis = Analysis {
            raw_text: OcrText::Unavailable,
            fields: ParsedFields::new(),
            estimate: None,
            sample_stats: None,
        };

        let report = AnalysisReport::from_analysis(&analysis);
        assert_eq!(report.raw_text, "OCR ERROR");
        assert!(report.probability.is_none());

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"probability\":null"));
    }
}
