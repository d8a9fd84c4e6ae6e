//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like catalog loading, sort changes,
//! sidebar toggling, and the per-frame debounce poll, coordinating
//! between the core library and the UI state components.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use caremap::{MapSurface, SortCriterion};
use std::path::PathBuf;
use std::time::Instant;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous catalog loading.
    pub fn open_catalog(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.error_message = None;
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies the result.
    ///
    /// Called once per frame in the update loop. Returns true if a load
    /// operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { catalog, path } => {
                let criterion = state.listings.store().criterion();
                log::info!(
                    "catalog loaded: {} listings from {:?}",
                    catalog.len(),
                    path
                );
                let result = state.listings.load_catalog(catalog, path, criterion);
                state.reset_catalog_state();
                if let Err(err) = result {
                    // Distance labels in the new catalog are malformed;
                    // the store fell back to price ordering.
                    state.error_message = Some(err.to_string());
                }
                true
            }
            LoadResult::Error(error_msg) => {
                log::warn!("catalog load failed: {}", error_msg);
                state.error_message = Some(format!("Error loading catalog: {}", error_msg));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and loads a sample catalog in-memory.
    pub fn open_sample_catalog(state: &mut AppState, loader: &mut AsyncLoader) {
        let catalog = loader.load_sample_catalog(state.map.config().center);
        let criterion = state.listings.store().criterion();
        let result = state.listings.load_catalog(catalog, None, criterion);
        state.reset_catalog_state();
        if let Err(err) = result {
            state.error_message = Some(err.to_string());
        }
    }

    /// Applies a sort criterion selected in the UI.
    ///
    /// On parse failure the previous ordering is kept and the error is
    /// surfaced in the status bar instead of silently mis-sorting.
    pub fn handle_sort_selected(state: &mut AppState, criterion: SortCriterion) {
        match state.listings.store_mut().set_sort_criterion(criterion) {
            Ok(()) => state.error_message = None,
            Err(err) => state.error_message = Some(err.to_string()),
        }
        Self::process_store_events(state);
    }

    /// Drains store change events and refreshes the marker set if the
    /// ordering changed. Called once per frame.
    pub fn process_store_events(state: &mut AppState) {
        let events = state.listings.store_mut().take_events();
        if !events.is_empty() {
            state.sync_markers();
        }
    }

    /// Toggles the sidebar and arms the debounced resize notification.
    pub fn handle_sidebar_toggled(state: &mut AppState, now: Instant) {
        state.viewport.toggle_sidebar(now);
    }

    /// Polls the debounce deadline, forwarding the resize notification to
    /// the map surface when it fires. Called once per frame.
    pub fn poll_resize_notification(state: &mut AppState, now: Instant) {
        if state.viewport.poll(now) {
            log::debug!("debounced resize notification fired");
            state.map.notify_resize();
        }
    }

    /// Handles selection of a listing from the sidebar or a map marker.
    pub fn handle_listing_selected(state: &mut AppState, catalog_index: usize) {
        state.selection.toggle_select(catalog_index);
        if let Some(record) = state.listings.store().catalog().get(catalog_index) {
            if state.selection.is_selected(catalog_index) {
                // Bring the selected listing into view.
                state.map.set_center(record.location);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sort_selection_updates_markers() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_sort_selected(&mut state, SortCriterion::ShortestDistance);
        assert_eq!(
            state.listings.store().criterion(),
            SortCriterion::ShortestDistance
        );
        // Nearest listing leads the marker set.
        assert_eq!(state.map.markers()[0].label, "Monroe Regional Hospital");
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_toggle_then_poll_notifies_map_once() {
        let mut state = AppState::new();
        let base = Instant::now();
        state.map.set_canvas_size(egui::vec2(800.0, 600.0));

        ApplicationCoordinator::handle_sidebar_toggled(&mut state, base);
        ApplicationCoordinator::handle_sidebar_toggled(&mut state, base + Duration::from_millis(100));

        // First deadline superseded; canvas size still valid.
        ApplicationCoordinator::poll_resize_notification(&mut state, base + Duration::from_millis(500));
        assert!(state.map.canvas_size().is_some());

        // Second deadline fires and invalidates the measured size.
        ApplicationCoordinator::poll_resize_notification(&mut state, base + Duration::from_millis(600));
        assert!(state.map.canvas_size().is_none());
    }

    #[test]
    fn test_selecting_listing_centers_map() {
        let mut state = AppState::new();
        let target = state.listings.store().catalog().get(2).unwrap().location;
        ApplicationCoordinator::handle_listing_selected(&mut state, 2);
        assert!(state.selection.is_selected(2));
        assert_eq!(state.map.center(), target);
    }
}
