//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting serializable settings (sidebar
//! width, active sort criterion) to eframe storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// Returns the deserialized value if found and valid, otherwise the
    /// provided default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        storage
            .and_then(|s| s.get_string(key))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or(default)
    }

    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json) = serde_json::to_string(value) {
            storage.set_string(key, json);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caremap::SortCriterion;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_sidebar_width() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "sidebar_width", &340.0f32);
        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "sidebar_width", 0.0);
        assert_eq!(loaded, 340.0);
    }

    #[test]
    fn test_save_and_load_sort_criterion() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "sort", &SortCriterion::ShortestDistance);
        let loaded = SettingsCoordinator::load_setting_or(
            Some(&storage),
            "sort",
            SortCriterion::LowestPrice,
        );
        assert_eq!(loaded, SortCriterion::ShortestDistance);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let storage = MockStorage::new();
        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 123.0);
        assert_eq!(loaded, 123.0);
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let mut storage = MockStorage::new();
        storage.set_string("sidebar_width", "not json".to_string());
        let loaded: f32 = SettingsCoordinator::load_setting_or(Some(&storage), "sidebar_width", 7.0);
        assert_eq!(loaded, 7.0);
    }
}
