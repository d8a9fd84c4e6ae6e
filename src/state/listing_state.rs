//! Listing catalog and store state management.
//!
//! This module encapsulates the loaded catalog, the listing store built
//! over it, and the path the catalog came from.

use caremap::{Catalog, ListingStore, SortCriterion};
use std::path::PathBuf;

/// State related to the loaded catalog and its sorted view.
///
/// Responsibilities:
/// - Owning the listing store (records + sort criterion + ordered view)
/// - Tracking the source file path (None for builtin/sample catalogs)
pub struct ListingState {
    store: ListingStore,
    /// Path of the loaded catalog file (None for builtin/sample data)
    source_path: Option<PathBuf>,
}

impl ListingState {
    /// Creates listing state over the built-in demo catalog.
    pub fn new() -> Self {
        Self {
            store: ListingStore::new(Catalog::builtin()),
            source_path: None,
        }
    }

    /// Replaces the catalog, rebuilding the store under the given
    /// criterion where possible.
    ///
    /// If the requested criterion cannot be applied (malformed distance
    /// labels), the store falls back to the default price ordering; the
    /// caller decides whether to surface that to the user.
    pub fn load_catalog(
        &mut self,
        catalog: Catalog,
        path: Option<PathBuf>,
        criterion: SortCriterion,
    ) -> Result<(), caremap::ParseError> {
        self.store = ListingStore::new(catalog);
        self.source_path = path;
        if criterion != self.store.criterion() {
            self.store.set_sort_criterion(criterion)?;
        }
        Ok(())
    }

    // ===== Queries =====

    /// Returns the listing store.
    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// Returns the listing store mutably (for sort changes and event draining).
    pub fn store_mut(&mut self) -> &mut ListingStore {
        &mut self.store
    }

    /// Returns the catalog source path, if loaded from a file.
    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    /// Returns the number of listings in the catalog.
    pub fn result_count(&self) -> usize {
        self.store.catalog().len()
    }

    /// Returns the catalog title, if it has one.
    pub fn title(&self) -> Option<&str> {
        self.store.catalog().title.as_deref()
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_builtin_catalog() {
        let state = ListingState::new();
        assert_eq!(state.result_count(), 4);
        assert!(state.source_path().is_none());
        assert_eq!(state.store().criterion(), SortCriterion::LowestPrice);
    }

    #[test]
    fn test_load_catalog_keeps_requested_criterion() {
        let mut state = ListingState::new();
        state
            .load_catalog(
                Catalog::builtin(),
                Some(PathBuf::from("demo.json")),
                SortCriterion::ShortestDistance,
            )
            .unwrap();
        assert_eq!(state.store().criterion(), SortCriterion::ShortestDistance);
        assert_eq!(state.source_path().unwrap().to_str(), Some("demo.json"));
    }
}
