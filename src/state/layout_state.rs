//! UI layout state management.

use serde::{Deserialize, Serialize};

/// State related to UI layout and sizing.
///
/// Responsibilities:
/// - Tracking the sidebar width (user-resizable, persisted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Sidebar panel width in points
    sidebar_width: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a new layout state with default values.
    pub fn new() -> Self {
        Self {
            sidebar_width: 340.0,
        }
    }

    /// Creates layout state with a stored sidebar width.
    pub fn with_sidebar_width(sidebar_width: f32) -> Self {
        Self { sidebar_width }
    }

    /// Returns the sidebar width in points.
    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    /// Updates the sidebar width after a user resize.
    pub fn set_sidebar_width(&mut self, width: f32) {
        self.sidebar_width = width.clamp(200.0, 600.0);
    }
}
