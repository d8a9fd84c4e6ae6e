//! Asynchronous catalog file loading.
//!
//! This module handles loading catalog files in a background thread,
//! keeping the GUI responsive during file I/O.

use crate::io::LoadingState;
use caremap::{generate_catalog, parse_catalog, Catalog, GeoPoint};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Default seed and size for sample catalogs.
const SAMPLE_SEED: u64 = 42;
const SAMPLE_COUNT: usize = 32;

/// Result of a completed catalog loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        /// The loaded catalog
        catalog: Catalog,
        /// Path to the file that was loaded (None for sample catalogs)
        path: Option<PathBuf>,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages asynchronous loading of catalog files.
///
/// Coordinates background-thread file loading with the main GUI thread so
/// the UI stays responsive while a catalog is read and parsed.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<Catalog, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a catalog file asynchronously from the given path.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - Path to the catalog file to load
    /// * `ctx` - egui context for requesting a repaint when loading completes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        log::info!("loading catalog from {}", path_string);

        thread::spawn(move || {
            let result = parse_catalog(&path_string).map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Generates a sample catalog in-memory.
    ///
    /// Useful for demonstration without a dataset on hand. Generation is
    /// synchronous (no background thread).
    pub fn load_sample_catalog(&mut self, center: GeoPoint) -> Catalog {
        generate_catalog(SAMPLE_SEED, SAMPLE_COUNT, center)
    }

    /// Checks if background loading has completed and returns the result.
    ///
    /// Call once per frame in the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(catalog) => {
                        let path = self.pending_load_path.take();
                        LoadResult::Success { catalog, path }
                    }
                    Err(error_msg) => {
                        self.pending_load_path = None;
                        LoadResult::Error(error_msg)
                    }
                };

                // Clear the receiver after processing
                self.loading_receiver = None;

                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}
