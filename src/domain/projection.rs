//! Web Mercator projection for the map canvas.
//!
//! This module provides pure functions for converting between geographic
//! coordinates and canvas positions for a given center and zoom, plus the
//! inverse transform used when panning.
//!
//! These functions are stateless and can be tested independently.

use caremap::GeoPoint;

/// Pixel size of one world tile (slippy-map convention).
const TILE_SIZE: f64 = 256.0;

/// Converts a geographic point to absolute world pixel coordinates at a
/// zoom level.
///
/// World space spans `256 * 2^zoom` pixels on each axis, x growing east
/// and y growing south.
pub fn geo_to_world(point: GeoPoint, zoom: u8) -> (f64, f64) {
    let world = TILE_SIZE * f64::from(1u32 << zoom);
    let x = (point.lon + 180.0) / 360.0 * world;
    let lat_rad = point.lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI) / 2.0 * world;
    (x, y)
}

/// Converts absolute world pixel coordinates back to a geographic point.
pub fn world_to_geo(x: f64, y: f64, zoom: u8) -> GeoPoint {
    let world = TILE_SIZE * f64::from(1u32 << zoom);
    let lon = x / world * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / world);
    let lat = n.sinh().atan().to_degrees();
    GeoPoint::new(lat, lon)
}

/// Converts a geographic point to a canvas position for a view centered
/// on `center` at `zoom`.
pub fn geo_to_canvas(point: GeoPoint, center: GeoPoint, zoom: u8, rect: egui::Rect) -> egui::Pos2 {
    let (px, py) = geo_to_world(point, zoom);
    let (cx, cy) = geo_to_world(center, zoom);
    egui::pos2(
        rect.center().x + (px - cx) as f32,
        rect.center().y + (py - cy) as f32,
    )
}

/// Computes the new map center after panning by a canvas pixel delta.
///
/// Dragging the map east (positive `delta.x`) moves the center west,
/// hence the subtraction.
pub fn pan_center(center: GeoPoint, delta: egui::Vec2, zoom: u8) -> GeoPoint {
    let (cx, cy) = geo_to_world(center, zoom);
    world_to_geo(cx - f64::from(delta.x), cy - f64::from(delta.y), zoom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        assert!((a - b).abs() < eps, "{} !~ {}", a, b);
    }

    #[test]
    fn test_world_round_trip() {
        let point = GeoPoint::new(40.81, -73.96);
        let (x, y) = geo_to_world(point, 13);
        let back = world_to_geo(x, y, 13);
        assert_close(back.lat, point.lat, 1e-9);
        assert_close(back.lon, point.lon, 1e-9);
    }

    #[test]
    fn test_center_projects_to_rect_center() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0));
        let center = GeoPoint::new(40.81, -73.96);
        let pos = geo_to_canvas(center, center, 13, rect);
        assert_eq!(pos, rect.center());
    }

    #[test]
    fn test_east_of_center_projects_right_of_center() {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let center = GeoPoint::new(40.81, -73.96);
        let east = GeoPoint::new(40.81, -73.90);
        let north = GeoPoint::new(40.85, -73.96);

        let east_pos = geo_to_canvas(east, center, 13, rect);
        assert!(east_pos.x > rect.center().x);

        let north_pos = geo_to_canvas(north, center, 13, rect);
        assert!(north_pos.y < rect.center().y);
    }

    #[test]
    fn test_pan_east_moves_center_west() {
        let center = GeoPoint::new(40.81, -73.96);
        let panned = pan_center(center, egui::vec2(100.0, 0.0), 13);
        assert!(panned.lon < center.lon);
        assert_close(panned.lat, center.lat, 1e-9);
    }

    #[test]
    fn test_higher_zoom_pans_less() {
        let center = GeoPoint::new(40.81, -73.96);
        let coarse = pan_center(center, egui::vec2(100.0, 0.0), 5);
        let fine = pan_center(center, egui::vec2(100.0, 0.0), 15);
        assert!((center.lon - coarse.lon).abs() > (center.lon - fine.lon).abs());
    }
}
