//! GUI application state management.
//!
//! Tracks the path input, the latest analysis, and the display status.

use crate::analysis::Analysis;

/// Outcome of the latest upload, for display in the GUI.
#[derive(Clone, Debug, Default)]
pub enum AnalysisStatus {
    /// Waiting for an upload
    #[default]
    Idle,
    /// Analysis finished with a probability estimate
    Complete,
    /// Text was extracted but no line field was found
    LineNotDetected,
    /// A line field was found but its value was not numeric
    ProbabilityUnavailable,
    /// Upload could not be processed (decode failure etc.)
    Error(String),
}

impl AnalysisStatus {
    /// Get display text for the current status.
    pub fn status_text(&self) -> String {
        match self {
            Self::Idle => "Drop a screenshot here or enter a path below.".to_string(),
            Self::Complete => "Analysis complete.".to_string(),
            Self::LineNotDetected => {
                "LINE not detected — try a clearer screenshot.".to_string()
            }
            Self::ProbabilityUnavailable => "Could not calculate probability.".to_string(),
            Self::Error(msg) => format!("Error: {}", msg),
        }
    }

    /// True for the states rendered as errors.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::LineNotDetected | Self::ProbabilityUnavailable | Self::Error(_)
        )
    }
}

/// GUI application state.
#[derive(Debug, Default)]
pub struct GuiState {
    /// Path text box contents (user input).
    pub path_input: String,
    /// Name of the last uploaded file, for display.
    pub uploaded_name: Option<String>,
    /// Result of analyzing the last upload.
    pub analysis: Option<Analysis>,
    /// Current display status.
    pub status: AnalysisStatus,
}

impl GuiState {
    /// Derive the display status from a finished analysis.
    pub fn status_for(analysis: &Analysis) -> AnalysisStatus {
        if analysis.estimate.is_some() {
            AnalysisStatus::Complete
        } else if analysis.line_detected() {
            AnalysisStatus::ProbabilityUnavailable
        } else {
            AnalysisStatus::LineNotDetected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::OcrText;
    use crate::parse::{FieldName, ParsedFields};

    fn analysis_with(fields: ParsedFields, has_estimate: bool) -> Analysis {
        let estimate = has_estimate.then(|| crate::model::OverEstimate {
            line: 24.5,
            probability: 0.4,
            histogram_sample: vec![24.0],
        });
        Analysis {
            raw_text: OcrText::Recognized(String::new()),
            fields,
            sample_stats: None,
            estimate,
        }
    }

    #[test]
    fn test_status_complete() {
        let mut fields = ParsedFields::new();
        fields.insert(FieldName::Line, "24.5".to_string());
        let status = GuiState::status_for(&analysis_with(fields, true));
        assert!(matches!(status, AnalysisStatus::Complete));
    }

    #[test]
    fn test_status_line_not_detected() {
        let status = GuiState::status_for(&analysis_with(ParsedFields::new(), false));
        assert!(matches!(status, AnalysisStatus::LineNotDetected));
        assert!(status.is_error());
    }

    #[test]
    fn test_status_probability_unavailable() {
        // A line key whose value failed to parse: field present, no estimate.
        let mut fields = ParsedFields::new();
        fields.insert(FieldName::Line, "abc".to_string());
        let status = GuiState::status_for(&analysis_with(fields, false));
        assert!(matches!(status, AnalysisStatus::ProbabilityUnavailable));
    }
}
