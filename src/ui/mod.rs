//! UI panel rendering modules for the CareMap viewer.
//!
//! Panels render from application state and bubble user interactions up
//! to the application coordinator as plain enums.

pub mod header;
pub mod listing_panel;
pub mod map_panel;
pub mod panel_manager;
pub mod status_bar;
