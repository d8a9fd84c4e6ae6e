//! Header panel UI rendering
//!
//! Handles the top menu bar with catalog controls, the sidebar toggle,
//! map zoom controls, and the theme selector.

use crate::app::AppState;
use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a catalog file to open
    OpenCatalogRequested(PathBuf),
    /// User clicked "Sample Catalog"
    OpenSampleRequested,
    /// User clicked the sidebar toggle
    SidebarToggled,
}

/// Renders the application header with catalog, sidebar, and map controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Catalog").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Catalog Files", &["json", "br"])
                .add_filter("All Files", &["*"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenCatalogRequested(path));
            }
        }

        if ui.button("🔮 Sample Catalog").clicked() {
            interaction = Some(HeaderInteraction::OpenSampleRequested);
        }

        ui.separator();

        let toggle_label = if state.viewport.is_sidebar_open() {
            "◀ Hide List"
        } else {
            "▶ Show List"
        };
        if ui.button(toggle_label).clicked() {
            interaction = Some(HeaderInteraction::SidebarToggled);
        }

        ui.separator();

        // Zoom controls
        if ui.button("🔍+").clicked() {
            state.map.zoom_in();
        }
        if ui.button("🔍-").clicked() {
            state.map.zoom_out();
        }
        if ui.button("⛶ Fit").clicked() {
            state.map.fit_to_markers();
        }
        if ui.button("↺ Reset View").clicked() {
            state.map.reset_view();
        }

        // Theme selector on the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.theme.current_theme_name().to_string();
            let mut selected = current.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current)
                .show_ui(ui, |ui| {
                    for name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut selected, name.to_string(), name);
                    }
                });
            if selected != current {
                state.theme.set_current_theme(&selected);
            }
            ui.label("Theme:");
        });
    });

    interaction
}
