//! State management modules for the CareMap viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Listing state (catalog, listing store, source path)
//! - Map view state (center, zoom, marker cache, remeasure flag)
//! - Selection state (selected and hovered listings)
//! - Theme state (theme manager, current theme)
//! - Layout state (sidebar width)

mod layout_state;
mod listing_state;
mod map_view;
mod selection;
mod theme_state;

pub use layout_state::LayoutState;
pub use listing_state::ListingState;
pub use map_view::MapView;
pub use selection::SelectionState;
pub use theme_state::ThemeState;
