//! Map panel UI rendering
//!
//! Handles the central map canvas: panning, scroll zoom, marker hit
//! testing, and delegating the actual painting to the map renderer.

use crate::app::AppState;
use crate::domain::projection;
use crate::io::AsyncLoader;
use crate::rendering::map_renderer;
use caremap::ThemeColors;

/// Result of map panel interactions handled by the application.
pub enum MapPanelInteraction {
    /// A marker was clicked
    MarkerClicked { catalog_index: usize },
}

/// Renders the map canvas and handles pointer interaction.
pub fn render_map_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loader: &AsyncLoader,
    colors: &ThemeColors,
) -> Option<MapPanelInteraction> {
    let mut interaction = None;

    let desired_size = ui.available_size();
    let (rect, response) =
        ui.allocate_exact_size(desired_size, egui::Sense::click_and_drag());

    // Re-measure after a resize notification invalidated the cached size.
    if state.map.canvas_size() != Some(rect.size()) {
        state.map.set_canvas_size(rect.size());
    }

    // Drag to pan
    if response.dragged() {
        let center = projection::pan_center(state.map.center(), response.drag_delta(), state.map.zoom());
        state.map.set_center(center);
    }

    // Scroll to zoom
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll > 2.0 {
            state.map.zoom_in();
        } else if scroll < -2.0 {
            state.map.zoom_out();
        }
    }

    let positions = map_renderer::marker_positions(
        state.map.markers(),
        state.map.center(),
        state.map.zoom(),
        rect,
    );

    // Marker hit testing
    let ordered = state.listings.store().ordered_view().to_vec();
    if let Some(pointer) = response.hover_pos() {
        if let Some(hit) = map_renderer::hit_test_marker(&positions, pointer) {
            let catalog_index = ordered[hit];
            state.selection.set_hovered(Some(catalog_index));
            if response.clicked() {
                interaction = Some(MapPanelInteraction::MarkerClicked { catalog_index });
            }
        }
    }

    // Display-order index of the selected/hovered listings
    let selected_display = state
        .selection
        .selected()
        .and_then(|ci| ordered.iter().position(|&i| i == ci));
    let hovered_display = state
        .selection
        .hovered()
        .and_then(|ci| ordered.iter().position(|&i| i == ci));

    // Paint
    let painter = ui.painter_at(rect);
    map_renderer::render_background(&painter, rect, state.map.center(), state.map.zoom(), colors);
    map_renderer::render_markers(&painter, &positions, selected_display, hovered_display, colors);

    if let (Some(display), Some(catalog_index)) = (selected_display, state.selection.selected()) {
        if let Some(record) = state.listings.store().catalog().get(catalog_index) {
            map_renderer::render_popup(&painter, positions[display], &record.name, colors);
        }
    }

    map_renderer::render_attribution(
        &painter,
        rect,
        &state.map.config().tile_provider.attribution,
        colors,
    );

    if loader.is_loading() {
        map_renderer::render_loading_overlay(&painter, rect, colors);
    }

    interaction
}
