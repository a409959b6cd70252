use anyhow::{anyhow, Result};
use image::{ImageBuffer, Luma};
use std::process::Command;
use tempfile::NamedTempFile;

use super::setup::{find_tessdata_dir, find_tesseract_executable};

/// Runs Tesseract on a preprocessed grayscale image and returns the raw
/// recognized text.
///
/// The image is written to a temporary PNG and Tesseract is invoked with
/// stdout output. Page segmentation mode 6 (single uniform block) works well
/// for stat panels and prop-bet cards.
pub fn recognize_image(img: &ImageBuffer<Luma<u8>, Vec<u8>>) -> Result<String> {
    let tesseract_exe = find_tesseract_executable()?;
    let tessdata_dir = find_tessdata_dir()?;

    // Save image to temporary file
    let temp_input = NamedTempFile::with_suffix(".png")?;
    img.save(temp_input.path())?;

    let output = Command::new(&tesseract_exe)
        .arg(temp_input.path())
        .arg("stdout")
        .arg("--tessdata-dir")
        .arg(&tessdata_dir)
        .arg("-l")
        .arg("eng")
        .arg("--psm")
        .arg("6")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("Tesseract failed: {}", stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
