pub mod engine;
pub mod preprocess;
pub mod setup;

pub use engine::recognize_image;
pub use preprocess::to_grayscale;
pub use setup::ensure_tesseract;

use image::{ImageBuffer, Rgba};

/// Placeholder text substituted when recognition fails for any reason.
pub const OCR_ERROR_TEXT: &str = "OCR ERROR";

/// Result of running OCR over an uploaded screenshot.
///
/// Recognition failures are not propagated as errors: the rest of the
/// pipeline treats the placeholder like any other extracted text, so a
/// failed OCR run simply produces an empty field set downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OcrText {
    /// Text recognized from the image (may still be noisy or empty).
    Recognized(String),
    /// The OCR engine was unavailable or failed internally.
    Unavailable,
}

impl OcrText {
    /// The text the pipeline and display operate on.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Recognized(text) => text,
            Self::Unavailable => OCR_ERROR_TEXT,
        }
    }
}

/// High-level function: screenshot → raw text.
///
/// Converts to grayscale, runs Tesseract, and swallows any failure into
/// [`OcrText::Unavailable`].
pub fn extract_text(img: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> OcrText {
    let gray = to_grayscale(img);

    match recognize_image(&gray) {
        Ok(text) => OcrText::Recognized(text),
        Err(e) => {
            crate::log(&format!("OCR failed: {}", e));
            OcrText::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_yields_placeholder() {
        assert_eq!(OcrText::Unavailable.as_str(), "OCR ERROR");
    }

    #[test]
    fn test_recognized_passes_text_through() {
        let text = OcrText::Recognized("Jordan Clark 24.5".to_string());
        assert_eq!(text.as_str(), "Jordan Clark 24.5");
    }
}
