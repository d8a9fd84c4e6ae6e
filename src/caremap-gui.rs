//! CareMap GUI Application
//!
//! Interactive desktop viewer for hospital price/quality listings built
//! with the egui framework. The viewer features:
//! - A collapsible sidebar of listing cards with selectable sort order
//! - A map canvas with one marker per listing, pan and zoom
//! - Debounced map re-measure after sidebar transitions
//! - Asynchronous catalog loading with a loading indicator
//! - Multiple themes with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core business logic (map projection)
//! - `io/` - Catalog file loading
//! - `ui/` - UI panel rendering and interaction
//! - `rendering/` - Low-level map canvas painting
//! - `state/` - Focused state components
//! - `utils/` - Display formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

mod app;
mod domain;
mod io;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use caremap::{MapConfig, SortCriterion};
use io::AsyncLoader;
use ui::panel_manager::PanelManager;

const SIDEBAR_WIDTH_KEY: &str = "sidebar_width";
const SORT_CRITERION_KEY: &str = "sort_criterion";

/// Main application entry point for the CareMap viewer.
fn main() -> eframe::Result {
    env_logger::init();

    // Optional catalog file to load on startup
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_title("CareMap Price Finder"),
        ..Default::default()
    };

    eframe::run_native(
        "CareMap Price Finder",
        options,
        Box::new(move |cc| Ok(Box::new(CareMapApp::new(cc, initial_file)))),
    )
}

/// The main CareMap application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles catalog loading, sorting, sidebar
///   toggling, and the per-frame debounce poll
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct CareMapApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous catalog loader
    loader: AsyncLoader,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl CareMapApp {
    /// Creates a new viewer instance with preferences loaded from
    /// persistent storage. Optionally accepts an initial catalog path.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let sidebar_width: f32 =
            SettingsCoordinator::load_setting_or(cc.storage, SIDEBAR_WIDTH_KEY, 340.0);
        let criterion = SettingsCoordinator::load_setting_or(
            cc.storage,
            SORT_CRITERION_KEY,
            SortCriterion::LowestPrice,
        );

        Self {
            state: AppState::with_settings(
                MapConfig::default(),
                Some(theme_name),
                Some(sidebar_width),
                criterion,
            ),
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: ui::panel_manager::PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            ui::panel_manager::PanelInteraction::OpenCatalogRequested(path) => {
                ApplicationCoordinator::open_catalog(&mut self.state, &mut self.loader, path, ctx);
            }
            ui::panel_manager::PanelInteraction::OpenSampleRequested => {
                ApplicationCoordinator::open_sample_catalog(&mut self.state, &mut self.loader);
            }
            ui::panel_manager::PanelInteraction::SidebarToggled => {
                ApplicationCoordinator::handle_sidebar_toggled(&mut self.state, Instant::now());
            }
            ui::panel_manager::PanelInteraction::SortSelected(criterion) => {
                ApplicationCoordinator::handle_sort_selected(&mut self.state, criterion);
            }
            ui::panel_manager::PanelInteraction::ListingClicked { catalog_index } => {
                ApplicationCoordinator::handle_listing_selected(&mut self.state, catalog_index);
            }
        }
    }
}

impl eframe::App for CareMapApp {
    /// Called on shutdown - persists preferences.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(
            storage,
            SIDEBAR_WIDTH_KEY,
            &self.state.layout.sidebar_width(),
        );
        SettingsCoordinator::save_setting(
            storage,
            SORT_CRITERION_KEY,
            &self.state.listings.store().criterion(),
        );
    }

    /// Called on exit - releases the pending resize notification so no
    /// stale callback outlives the view.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.viewport.cancel_pending();
    }

    /// Main update loop.
    ///
    /// 1. Check for async loading completion
    /// 2. Poll the debounced resize notification
    /// 3. Drain listing store events
    /// 4. Apply the current theme
    /// 5. Render all panels via PanelManager
    /// 6. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        let now = Instant::now();
        ApplicationCoordinator::poll_resize_notification(&mut self.state, now);
        // Keep the loop alive until a pending notification fires.
        if let Some(remaining) = self.state.viewport.time_until_fire(now) {
            ctx.request_repaint_after(remaining);
        }

        ApplicationCoordinator::process_store_events(&mut self.state);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Load initial catalog passed on the command line
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_catalog(&mut self.state, &mut self.loader, path, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader)
        {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
