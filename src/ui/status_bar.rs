//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying catalog metadata and errors.

use crate::app::AppState;
use caremap::ThemeColors;
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, colors: &ThemeColors) {
    ui.horizontal(|ui| {
        let source = match (state.listings.title(), state.listings.source_path()) {
            (_, Some(path)) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            (Some(title), None) => title.to_string(),
            (None, None) => "Untitled Catalog".to_string(),
        };
        ui.label(RichText::new(source).strong());

        ui.label(RichText::new("|").strong());
        ui.label(format!("{} listings", state.listings.result_count()));

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Sorted by: {}",
            state.listings.store().criterion().label()
        ));

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Zoom: {}  ({:.4}, {:.4})",
            state.map.zoom(),
            state.map.center().lat,
            state.map.center().lon
        ));

        if state.viewport.has_pending_notification() {
            ui.label(RichText::new("| adjusting layout…").color(colors.text_dim));
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new(error).color(colors.error));
        }
    });
}
