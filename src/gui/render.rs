//! GUI rendering functions.
//!
//! Contains UI layout and component rendering logic.

use eframe::egui::{self, Color32, RichText, TextureHandle, Vec2};

use super::state::{AnalysisStatus, GuiState};
use crate::parse::FieldName;

/// Render the upload controls: path text box plus Load button.
/// Returns true when a load was requested.
pub fn render_upload(ui: &mut egui::Ui, state: &mut GuiState) -> bool {
    let mut load_clicked = false;

    ui.horizontal(|ui| {
        ui.label("Screenshot path:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.path_input)
                .hint_text("screenshot.png")
                .desired_width(ui.available_width() - 80.0),
        );

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load_clicked = true;
        }
        if ui.button("Load").clicked() {
            load_clicked = true;
        }
    });

    ui.add_space(4.0);
    ui.label(
        RichText::new("PNG and JPEG screenshots can also be dropped anywhere on this window.")
            .weak(),
    );

    load_clicked
}

/// Render the status line with the same color scheme across states.
pub fn render_status(ui: &mut egui::Ui, state: &GuiState) {
    ui.add_space(8.0);

    let status_color = match &state.status {
        AnalysisStatus::Idle => Color32::GRAY,
        AnalysisStatus::Complete => Color32::from_rgb(0, 150, 0),
        AnalysisStatus::LineNotDetected | AnalysisStatus::ProbabilityUnavailable => {
            Color32::from_rgb(200, 150, 0)
        }
        AnalysisStatus::Error(_) => Color32::from_rgb(200, 0, 0),
    };

    ui.horizontal(|ui| {
        ui.label("Status:");
        ui.label(RichText::new(state.status.status_text()).color(status_color));
        if let Some(name) = &state.uploaded_name {
            ui.label(RichText::new(format!("({})", name)).weak());
        }
    });
}

/// Render the uploaded screenshot preview, scaled to the available width.
pub fn render_preview(ui: &mut egui::Ui, preview: &Option<TextureHandle>) {
    let Some(texture) = preview else {
        return;
    };

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Uploaded Screenshot");
    ui.add_space(4.0);

    let size = texture.size_vec2();
    let available_width = ui.available_width().min(640.0);
    let scale = (available_width / size.x).min(1.0);
    ui.image((texture.id(), Vec2::new(size.x * scale, size.y * scale)));
}

/// Render the raw extracted text in a scrollable monospace block.
pub fn render_raw_text(ui: &mut egui::Ui, state: &GuiState) {
    let Some(analysis) = &state.analysis else {
        return;
    };

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Extracted Text");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("raw_text")
        .max_height(140.0)
        .show(ui, |ui| {
            ui.label(RichText::new(analysis.raw_text.as_str()).monospace());
        });
}

/// Render the parsed fields as label/value rows, in display order.
pub fn render_fields(ui: &mut egui::Ui, state: &GuiState) {
    let Some(analysis) = &state.analysis else {
        return;
    };

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Parsed Data");
    ui.add_space(4.0);

    if analysis.fields.is_empty() {
        ui.label(RichText::new("No fields recognized.").weak());
        return;
    }

    egui::Grid::new("parsed_fields").striped(true).show(ui, |ui| {
        for name in FieldName::ALL {
            if let Some(value) = analysis.fields.get(&name) {
                ui.label(RichText::new(name.as_str()).strong());
                ui.label(value);
                ui.end_row();
            }
        }
    });
}

/// Render the probability headline and the histogram chart.
/// Returns true when an export was requested.
pub fn render_estimate(
    ui: &mut egui::Ui,
    state: &GuiState,
    chart: &Option<TextureHandle>,
) -> bool {
    let mut export_clicked = false;

    let Some(analysis) = &state.analysis else {
        return false;
    };
    let Some(estimate) = &analysis.estimate else {
        return false;
    };

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Probability of OVER");
    ui.add_space(4.0);

    ui.label(
        RichText::new(format!(
            "{:.1}% chance of Over {}",
            estimate.probability * 100.0,
            estimate.line
        ))
        .size(20.0)
        .strong(),
    );

    if let Some(texture) = chart {
        ui.add_space(8.0);
        let size = texture.size_vec2();
        let available_width = ui.available_width().min(size.x);
        let scale = available_width / size.x;
        ui.image((texture.id(), Vec2::new(size.x * scale, size.y * scale)));
    }

    ui.add_space(8.0);
    if ui.button("Export JSON").clicked() {
        export_clicked = true;
    }

    export_clicked
}
