//! GUI module for the application.
//!
//! Provides the single-window interface using egui/eframe: screenshot
//! upload via drag-and-drop or a path box, and display of the extracted
//! text, parsed fields, probability, and histogram.

pub mod render;
pub mod state;

use anyhow::{anyhow, Context, Result};
use eframe::egui::{self, TextureHandle, Vec2};
use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::analysis::charts;
use crate::analysis::config::ChartConfig;
use crate::analysis::export::{self, AnalysisReport};

use state::{AnalysisStatus, GuiState};

/// File extensions accepted for upload.
const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Main GUI application struct.
pub struct GuiApp {
    /// Application state.
    state: GuiState,
    /// Texture of the uploaded screenshot.
    preview_texture: Option<TextureHandle>,
    /// Texture of the rendered histogram chart.
    chart_texture: Option<TextureHandle>,
}

impl GuiApp {
    /// Create a new GUI application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: GuiState::default(),
            preview_texture: None,
            chart_texture: None,
        }
    }

    /// Pick up files dropped onto the window. Only the first acceptable file
    /// is processed; this tool is single-image by design.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        let name = if !file.name.is_empty() {
            file.name.clone()
        } else if let Some(path) = &file.path {
            path.display().to_string()
        } else {
            String::new()
        };

        if !has_accepted_extension(&name) {
            self.state.status =
                AnalysisStatus::Error(format!("Unsupported file type: {}", name));
            return;
        }

        let loaded = if let Some(bytes) = &file.bytes {
            decode_image(bytes)
        } else if let Some(path) = &file.path {
            load_image_file(path)
        } else {
            Err(anyhow!("Dropped file carried no data"))
        };

        self.finish_upload(ctx, name, loaded);
    }

    /// Handle the Load button: read the image at the typed path.
    fn handle_load_path(&mut self, ctx: &egui::Context) {
        let path_text = self.state.path_input.trim().to_string();
        if path_text.is_empty() {
            return;
        }

        if !has_accepted_extension(&path_text) {
            self.state.status =
                AnalysisStatus::Error(format!("Unsupported file type: {}", path_text));
            return;
        }

        let loaded = load_image_file(Path::new(&path_text));
        self.finish_upload(ctx, path_text, loaded);
    }

    /// Common tail of every upload: set the preview, run the pipeline,
    /// render the chart, derive the display status.
    fn finish_upload(
        &mut self,
        ctx: &egui::Context,
        name: String,
        loaded: Result<ImageBuffer<Rgba<u8>, Vec<u8>>>,
    ) {
        self.preview_texture = None;
        self.chart_texture = None;
        self.state.analysis = None;

        let img = match loaded {
            Ok(img) => img,
            Err(e) => {
                crate::log(&format!("Upload failed for {}: {}", name, e));
                self.state.status = AnalysisStatus::Error(e.to_string());
                self.state.uploaded_name = Some(name);
                return;
            }
        };

        crate::log(&format!(
            "Analyzing {} ({}x{})",
            name,
            img.width(),
            img.height()
        ));

        self.preview_texture = Some(load_rgba_texture(ctx, "screenshot_preview", &img));

        match crate::analysis::analyze_screenshot(&img, crate::config::get_config()) {
            Ok(analysis) => {
                self.update_chart(ctx, &analysis);
                self.state.status = GuiState::status_for(&analysis);
                self.state.analysis = Some(analysis);
            }
            Err(e) => {
                crate::log(&format!("Analysis failed: {}", e));
                self.state.status = AnalysisStatus::Error(e.to_string());
            }
        }

        self.state.uploaded_name = Some(name);
    }

    /// Render the histogram chart for a finished analysis, if it produced
    /// an estimate.
    fn update_chart(&mut self, ctx: &egui::Context, analysis: &crate::analysis::Analysis) {
        let (Some(estimate), Some(stats)) = (&analysis.estimate, &analysis.sample_stats) else {
            return;
        };

        let chart_config =
            ChartConfig::load(&crate::paths::get_exe_dir().join("chart_config.json"));
        let bins = crate::config::get_config().histogram_bins;

        match charts::render_over_chart(
            &estimate.histogram_sample,
            estimate.line,
            estimate.probability,
            stats,
            bins,
            &chart_config,
        ) {
            Ok(chart) => {
                let color_image = egui::ColorImage::from_rgb(
                    [chart.width as usize, chart.height as usize],
                    &chart.rgb,
                );
                self.chart_texture = Some(ctx.load_texture(
                    "histogram_chart",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(e) => {
                crate::log(&format!("Chart rendering failed: {}", e));
            }
        }
    }

    /// Handle the Export JSON button.
    fn handle_export(&self) {
        let Some(analysis) = &self.state.analysis else {
            return;
        };

        let report = AnalysisReport::from_analysis(analysis);
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = crate::paths::get_output_dir().join(format!("analysis_{}.json", timestamp));

        match export::export_to_json(&report, &path) {
            Ok(()) => crate::log(&format!("Analysis exported: {}", path.display())),
            Err(e) => crate::log(&format!("Export failed: {}", e)),
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("SCORPION Screenshot Analyzer");
            ui.add_space(12.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let load_clicked = render::render_upload(ui, &mut self.state);
                if load_clicked {
                    self.handle_load_path(ctx);
                }

                render::render_status(ui, &self.state);
                render::render_preview(ui, &self.preview_texture);
                render::render_raw_text(ui, &self.state);
                render::render_fields(ui, &self.state);

                let export_clicked =
                    render::render_estimate(ui, &self.state, &self.chart_texture);
                if export_clicked {
                    self.handle_export();
                }
            });
        });
    }
}

/// True when the file name carries one of the accepted image extensions.
fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Decode an in-memory PNG/JPEG payload into an RGBA image.
fn decode_image(bytes: &[u8]) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let img = image::load_from_memory(bytes).context("Failed to decode image data")?;
    Ok(img.to_rgba8())
}

/// Load a PNG/JPEG file from disk into an RGBA image.
fn load_image_file(path: &Path) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let img = image::open(path)
        .context(format!("Failed to open image: {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Upload an RGBA image as an egui texture.
fn load_rgba_texture(
    ctx: &egui::Context,
    name: &str,
    img: &ImageBuffer<Rgba<u8>, Vec<u8>>,
) -> TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}

/// Run the GUI application.
/// This function blocks until the window is closed.
pub fn run_gui() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(760.0, 900.0))
            .with_min_inner_size(Vec2::new(480.0, 600.0))
            .with_title("SCORPION Screenshot Analyzer")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "SCORPION Screenshot Analyzer",
        options,
        Box::new(|cc| Ok(Box::new(GuiApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(has_accepted_extension("shot.png"));
        assert!(has_accepted_extension("SHOT.PNG"));
        assert!(has_accepted_extension("card.jpeg"));
        assert!(has_accepted_extension("/tmp/card.jpg"));
        assert!(!has_accepted_extension("doc.pdf"));
        assert!(!has_accepted_extension("png"));
    }

    #[test]
    fn test_decode_image_rejects_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }
}
