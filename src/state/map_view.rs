//! Map view state management.
//!
//! This module encapsulates the map surface's state: center, zoom, the
//! cached marker set, and the remeasure flag raised by resize
//! notifications. It is the application's implementation of the
//! [`MapSurface`] collaborator contract; rendering happens elsewhere.

use caremap::{GeoPoint, MapConfig, MapSurface, Marker};

/// Zoom bounds in slippy-map convention.
const MIN_ZOOM: u8 = 1;
const MAX_ZOOM: u8 = 19;

/// State related to the map canvas.
///
/// Responsibilities:
/// - Managing map center and zoom level
/// - Caching the marker set pushed by the listing store
/// - Tracking the measured canvas size, invalidated on resize
///   notifications
pub struct MapView {
    config: MapConfig,
    center: GeoPoint,
    zoom: u8,
    markers: Vec<Marker>,
    /// Last measured canvas size in points (None = needs measuring)
    canvas_size: Option<egui::Vec2>,
}

impl MapView {
    /// Creates a map view from configuration.
    pub fn new(config: MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            config,
            markers: Vec::new(),
            canvas_size: None,
        }
    }

    // ===== Queries =====

    /// Returns the current map center.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Returns the current zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Returns the cached marker set in display order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns the map configuration (tile provider, attribution).
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Returns the last measured canvas size, if still valid.
    pub fn canvas_size(&self) -> Option<egui::Vec2> {
        self.canvas_size
    }

    // ===== Mutations =====

    /// Records the measured canvas size for this frame.
    pub fn set_canvas_size(&mut self, size: egui::Vec2) {
        self.canvas_size = Some(size);
    }

    /// Zooms in one level, clamped to the supported range.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    /// Zooms out one level, clamped to the supported range.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Moves the map center.
    pub fn set_center(&mut self, center: GeoPoint) {
        self.center = center;
    }

    /// Resets center and zoom to the configured initial view.
    pub fn reset_view(&mut self) {
        self.center = self.config.center;
        self.zoom = self.config.zoom;
    }

    /// Recenters on the marker set's bounding box midpoint.
    ///
    /// Leaves the view untouched when there are no markers.
    pub fn fit_to_markers(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let (mut min_lat, mut max_lat) = (f64::MAX, f64::MIN);
        let (mut min_lon, mut max_lon) = (f64::MAX, f64::MIN);
        for marker in &self.markers {
            min_lat = min_lat.min(marker.location.lat);
            max_lat = max_lat.max(marker.location.lat);
            min_lon = min_lon.min(marker.location.lon);
            max_lon = max_lon.max(marker.location.lon);
        }
        self.center = GeoPoint::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);
    }
}

impl MapSurface for MapView {
    fn set_markers(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    fn notify_resize(&mut self) {
        // Drop the measured size so the next frame re-measures the canvas
        // after the sidebar transition settled.
        self.canvas_size = None;
        log::debug!("map surface notified of resize; canvas will re-measure");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> MapView {
        MapView::new(MapConfig::default())
    }

    #[test]
    fn test_zoom_clamps_to_bounds() {
        let mut map = view();
        for _ in 0..30 {
            map.zoom_in();
        }
        assert_eq!(map.zoom(), MAX_ZOOM);
        for _ in 0..30 {
            map.zoom_out();
        }
        assert_eq!(map.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_notify_resize_invalidates_canvas_size() {
        let mut map = view();
        map.set_canvas_size(egui::vec2(800.0, 600.0));
        assert!(map.canvas_size().is_some());

        map.notify_resize();
        assert!(map.canvas_size().is_none());
    }

    #[test]
    fn test_fit_to_markers_centers_bounding_box() {
        let mut map = view();
        map.set_markers(vec![
            Marker {
                location: GeoPoint::new(40.0, -74.0),
                label: "A".to_string(),
            },
            Marker {
                location: GeoPoint::new(41.0, -73.0),
                label: "B".to_string(),
            },
        ]);
        map.fit_to_markers();
        assert_eq!(map.center(), GeoPoint::new(40.5, -73.5));
    }

    #[test]
    fn test_fit_to_markers_ignores_empty_set() {
        let mut map = view();
        let before = map.center();
        map.fit_to_markers();
        assert_eq!(map.center(), before);
    }
}
