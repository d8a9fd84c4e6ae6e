//! Application-level modules for the CareMap viewer.
//!
//! This module contains the main application coordinator and centralized
//! state management.

mod app_state;
mod application_coordinator;
mod settings_coordinator;
mod theme_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
pub use theme_coordinator::ThemeCoordinator;
