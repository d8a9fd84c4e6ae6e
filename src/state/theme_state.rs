//! Theme state management.

use caremap::ThemeManager;

/// State related to theming.
///
/// Responsibilities:
/// - Owning the theme manager
/// - Tracking the currently selected theme name
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl ThemeState {
    /// Creates theme state with the default theme.
    pub fn new() -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = theme_manager.current_theme().name.clone();
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    /// Creates theme state with a specific theme selected.
    ///
    /// Unknown names fall back to the manager's default.
    pub fn with_theme(theme_name: String) -> Self {
        let mut state = Self::new();
        state.set_current_theme(&theme_name);
        state
    }

    /// Returns the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the current theme name.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Selects a theme by name; unknown names are ignored.
    pub fn set_current_theme(&mut self, name: &str) {
        if self.theme_manager.set_current_theme(name).is_ok() {
            self.current_theme_name = name.to_string();
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let state = ThemeState::with_theme("Nonexistent".to_string());
        assert_eq!(state.current_theme_name(), "Light");
    }

    #[test]
    fn test_known_theme_is_selected() {
        let state = ThemeState::with_theme("Dracula".to_string());
        assert_eq!(state.current_theme_name(), "Dracula");
    }
}
