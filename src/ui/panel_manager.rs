//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, listing sidebar, map canvas,
//! status bar) and manages their layout and interaction bubbling.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, listing_panel, map_panel, status_bar};
use caremap::SortCriterion;
use std::path::PathBuf;

/// Result of panel interactions handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a catalog file
    OpenCatalogRequested(PathBuf),
    /// User requested a generated sample catalog
    OpenSampleRequested,
    /// User toggled the sidebar
    SidebarToggled,
    /// User selected a sort criterion
    SortSelected(SortCriterion),
    /// A listing was clicked (card or marker)
    ListingClicked { catalog_index: usize },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state
            .theme
            .theme_manager()
            .get_theme(state.theme.current_theme_name())
            .map(|t| t.colors.clone())
            .unwrap_or_else(|| state.theme.theme_manager().current_theme().colors.clone());

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenCatalogRequested(path) => {
                        PanelInteraction::OpenCatalogRequested(path)
                    }
                    header::HeaderInteraction::OpenSampleRequested => {
                        PanelInteraction::OpenSampleRequested
                    }
                    header::HeaderInteraction::SidebarToggled => PanelInteraction::SidebarToggled,
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, &theme_colors);
        });

        // Left panel: listing sidebar, animated open/close so the map
        // width transitions rather than jumping
        let sidebar_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        let sidebar_response = egui::SidePanel::left("listing_panel")
            .default_width(state.layout.sidebar_width())
            .resizable(true)
            .frame(sidebar_frame)
            .show_animated(ctx, state.viewport.is_sidebar_open(), |ui| {
                if let Some(panel_interaction) =
                    listing_panel::render_listing_panel(ui, state, &theme_colors)
                {
                    interaction = Some(match panel_interaction {
                        listing_panel::ListingPanelInteraction::CardClicked { catalog_index } => {
                            PanelInteraction::ListingClicked { catalog_index }
                        }
                        listing_panel::ListingPanelInteraction::SortRequested(criterion) => {
                            PanelInteraction::SortSelected(criterion)
                        }
                    });
                }
            });

        // Remember the user-resized width for persistence. Skipped while
        // a toggle transition is still settling so mid-animation widths
        // are never recorded.
        if let Some(response) = sidebar_response {
            if state.viewport.is_sidebar_open() && !state.viewport.has_pending_notification() {
                state.layout.set_sidebar_width(response.response.rect.width());
            }
        }

        // Central panel: map canvas
        let map_frame = egui::Frame::default().fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(map_frame).show(ctx, |ui| {
            if let Some(map_interaction) =
                map_panel::render_map_panel(ui, state, loader, &theme_colors)
            {
                interaction = Some(match map_interaction {
                    map_panel::MapPanelInteraction::MarkerClicked { catalog_index } => {
                        PanelInteraction::ListingClicked { catalog_index }
                    }
                });
            }
        });

        interaction
    }
}
