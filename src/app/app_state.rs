//! Centralized application state for the CareMap viewer.
//!
//! This module composes focused state components that each manage one
//! aspect of the application's state. Invariants stay local to each
//! component, access stays borrow-checker friendly, and mutations go
//! through intent-revealing methods.

use crate::state::{LayoutState, ListingState, MapView, SelectionState, ThemeState};
use caremap::{markers_for_store, MapConfig, MapSurface, SortCriterion, ViewportController};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Catalog and listing store state
    pub listings: ListingState,

    /// Sidebar visibility and debounced resize notification
    pub viewport: ViewportController,

    /// Map center, zoom, and marker cache
    pub map: MapView,

    /// Selected and hovered listings
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    ///
    /// The built-in demo catalog is loaded and its markers pushed to the
    /// map surface so the first frame already shows content.
    pub fn new() -> Self {
        Self::with_settings(MapConfig::default(), None, None, SortCriterion::default())
    }

    /// Creates application state from stored preferences.
    pub fn with_settings(
        map_config: MapConfig,
        theme_name: Option<String>,
        sidebar_width: Option<f32>,
        criterion: SortCriterion,
    ) -> Self {
        let mut state = Self {
            listings: ListingState::new(),
            viewport: ViewportController::new(),
            map: MapView::new(map_config),
            selection: SelectionState::new(),
            theme: match theme_name {
                Some(name) => ThemeState::with_theme(name),
                None => ThemeState::new(),
            },
            layout: match sidebar_width {
                Some(width) => LayoutState::with_sidebar_width(width),
                None => LayoutState::new(),
            },
            error_message: None,
        };

        if let Err(err) = state.listings.store_mut().set_sort_criterion(criterion) {
            // Builtin labels are well-formed; a stored criterion failing
            // here means the catalog changed under us. Keep the default
            // ordering and say so.
            state.error_message = Some(err.to_string());
        }
        state.sync_markers();
        state.map.fit_to_markers();
        state
    }

    // ===== High-Level Coordination Methods =====

    /// Pushes the store's current ordered view to the map surface.
    pub fn sync_markers(&mut self) {
        let markers = markers_for_store(self.listings.store());
        self.map.set_markers(markers);
    }

    /// Resets per-catalog state after a new catalog is loaded.
    pub fn reset_catalog_state(&mut self) {
        self.selection.clear();
        self.error_message = None;
        self.sync_markers();
        self.map.fit_to_markers();
    }
}
