//! Map canvas rendering.
//!
//! Paints the map surface: a flat background with the world tile grid as
//! a placeholder for the (out-of-scope) tile imagery, one marker per
//! listing in display order, and a popup naming the selected listing.

use crate::domain::projection;
use caremap::{with_alpha, GeoPoint, Marker, ThemeColors};
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind};

/// Size of one world tile in points.
const TILE_SIZE: f32 = 256.0;

/// Marker head radius in points.
pub const MARKER_RADIUS: f32 = 7.0;

/// Renders the map background and the placeholder tile grid.
///
/// Grid lines are aligned to world tile boundaries so panning and
/// zooming move them like real tiles would.
pub fn render_background(
    painter: &egui::Painter,
    rect: Rect,
    center: GeoPoint,
    zoom: u8,
    colors: &ThemeColors,
) {
    painter.rect_filled(rect, 0.0, colors.map_land);

    // World pixel position of the canvas edges determines grid phase.
    let (cx, cy) = projection::geo_to_world(center, zoom);
    let grid_stroke = Stroke::new(1.0, colors.map_grid);

    let left_world = cx as f32 - (rect.center().x - rect.left());
    let mut x = rect.left() + (TILE_SIZE - left_world.rem_euclid(TILE_SIZE)) % TILE_SIZE;
    while x <= rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid_stroke);
        x += TILE_SIZE;
    }

    let top_world = cy as f32 - (rect.center().y - rect.top());
    let mut y = rect.top() + (TILE_SIZE - top_world.rem_euclid(TILE_SIZE)) % TILE_SIZE;
    while y <= rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid_stroke);
        y += TILE_SIZE;
    }
}

/// Computes canvas positions for a marker set under the current view.
///
/// Positions are returned in marker (display) order; markers outside the
/// canvas still get positions so hit testing and popups stay simple.
pub fn marker_positions(
    markers: &[Marker],
    center: GeoPoint,
    zoom: u8,
    rect: Rect,
) -> Vec<Pos2> {
    markers
        .iter()
        .map(|m| projection::geo_to_canvas(m.location, center, zoom, rect))
        .collect()
}

/// Renders all markers as pin shapes (stem plus round head).
pub fn render_markers(
    painter: &egui::Painter,
    positions: &[Pos2],
    selected: Option<usize>,
    hovered: Option<usize>,
    colors: &ThemeColors,
) {
    for (i, &pos) in positions.iter().enumerate() {
        let color = if selected == Some(i) {
            colors.marker_selected
        } else {
            colors.marker
        };

        // Stem ends at the anchored location; head floats above it.
        let head = Pos2::new(pos.x, pos.y - MARKER_RADIUS * 1.8);
        painter.line_segment([pos, head], Stroke::new(2.5, color));
        painter.circle_filled(head, MARKER_RADIUS, color);
        painter.circle_filled(head, MARKER_RADIUS * 0.4, colors.popup_background);

        if hovered == Some(i) && selected != Some(i) {
            painter.circle_stroke(head, MARKER_RADIUS + 2.0, Stroke::new(1.5, color));
        }
    }
}

/// Renders the popup naming the selected marker.
pub fn render_popup(
    painter: &egui::Painter,
    anchor: Pos2,
    label: &str,
    colors: &ThemeColors,
) {
    let font_id = FontId::proportional(13.0);
    let galley = painter.layout_no_wrap(label.to_string(), font_id.clone(), colors.text);

    let padding = egui::vec2(8.0, 5.0);
    let popup_size = galley.size() + padding * 2.0;
    let popup_rect = Rect::from_center_size(
        Pos2::new(anchor.x, anchor.y - MARKER_RADIUS * 3.2 - popup_size.y / 2.0),
        popup_size,
    );

    painter.rect_filled(popup_rect, 4.0, colors.popup_background);
    painter.rect_stroke(popup_rect, 4.0, Stroke::new(1.0, colors.border), StrokeKind::Outside);
    painter.text(
        popup_rect.center(),
        Align2::CENTER_CENTER,
        label,
        font_id,
        colors.text,
    );

    // Pointer nib from popup to marker head.
    painter.line_segment(
        [Pos2::new(anchor.x, popup_rect.bottom()), Pos2::new(anchor.x, anchor.y - MARKER_RADIUS * 2.2)],
        Stroke::new(1.0, colors.border),
    );
}

/// Renders the attribution overlay in the canvas corner.
pub fn render_attribution(painter: &egui::Painter, rect: Rect, attribution: &str, colors: &ThemeColors) {
    if attribution.is_empty() {
        return;
    }
    let pos = Pos2::new(rect.right() - 6.0, rect.bottom() - 4.0);
    painter.text(
        pos,
        Align2::RIGHT_BOTTOM,
        attribution,
        FontId::proportional(10.0),
        with_alpha(colors.text_dim, 200),
    );
}

/// Renders a dimmed overlay with a message (used while a catalog loads).
pub fn render_loading_overlay(painter: &egui::Painter, rect: Rect, colors: &ThemeColors) {
    painter.rect_filled(rect, 0.0, Color32::from_black_alpha(100));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Loading catalog…",
        FontId::proportional(16.0),
        colors.text,
    );
}

/// Returns the index of the topmost marker whose head contains `pos`.
///
/// Later markers draw on top, so the scan runs in reverse display order.
pub fn hit_test_marker(positions: &[Pos2], pos: Pos2) -> Option<usize> {
    positions.iter().enumerate().rev().find_map(|(i, &p)| {
        let head = Pos2::new(p.x, p.y - MARKER_RADIUS * 1.8);
        (head.distance(pos) <= MARKER_RADIUS + 2.0).then_some(i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_finds_topmost_marker() {
        let positions = vec![
            Pos2::new(100.0, 100.0),
            Pos2::new(101.0, 100.0), // overlaps the first, drawn on top
            Pos2::new(300.0, 300.0),
        ];
        let probe = Pos2::new(100.5, 100.0 - MARKER_RADIUS * 1.8);
        assert_eq!(hit_test_marker(&positions, probe), Some(1));
    }

    #[test]
    fn test_hit_test_misses_empty_space() {
        let positions = vec![Pos2::new(100.0, 100.0)];
        assert_eq!(hit_test_marker(&positions, Pos2::new(200.0, 200.0)), None);
    }
}
