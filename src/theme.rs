//! Theme support for the CareMap viewer.
//!
//! Provides color palettes covering both the chrome (panels, text,
//! selection) and the map canvas (land, grid, markers) plus the
//! listing-card accents (price, rating, price-type badges). Built-in
//! themes: Light, Dark, Dracula.

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Listing cards
    pub price: Color32,
    pub rating: Color32,
    pub badge_fixed_bg: Color32,
    pub badge_fixed_fg: Color32,
    pub badge_negotiated_bg: Color32,
    pub badge_negotiated_fg: Color32,

    // Map canvas
    pub map_land: Color32,
    pub map_grid: Color32,
    pub marker: Color32,
    pub marker_selected: Color32,
    pub popup_background: Color32,

    // Status accents
    pub error: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        self.themes.get(&self.current_theme_name).unwrap()
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.price;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.price;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme, matching the original purple-accent mockup.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with purple accents".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(255, 255, 255),
            extreme_background: Color32::from_rgb(248, 248, 250),
            text: Color32::from_rgb(30, 30, 30),
            text_dim: Color32::from_rgb(120, 120, 120),
            selection: Color32::from_rgb(233, 213, 255),
            hover: Color32::from_rgb(240, 240, 245),
            border: Color32::from_rgb(221, 214, 254),

            // Purple price, amber stars, green/red badges
            price: Color32::from_rgb(126, 34, 206),
            rating: Color32::from_rgb(217, 119, 6),
            badge_fixed_bg: Color32::from_rgb(220, 252, 231),
            badge_fixed_fg: Color32::from_rgb(22, 101, 52),
            badge_negotiated_bg: Color32::from_rgb(254, 226, 226),
            badge_negotiated_fg: Color32::from_rgb(153, 27, 27),

            map_land: Color32::from_rgb(241, 245, 238),
            map_grid: Color32::from_rgb(215, 220, 225),
            marker: Color32::from_rgb(126, 34, 206),
            marker_selected: Color32::from_rgb(220, 38, 38),
            popup_background: Color32::from_rgb(255, 255, 255),

            error: Color32::from_rgb(200, 40, 40),
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with muted map tones".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(32, 33, 36),
            extreme_background: Color32::from_rgb(22, 22, 24),
            text: Color32::from_rgb(232, 234, 237),
            text_dim: Color32::from_rgb(154, 160, 166),
            selection: Color32::from_rgb(68, 52, 110),
            hover: Color32::from_rgb(55, 56, 60),
            border: Color32::from_rgb(95, 99, 104),

            price: Color32::from_rgb(192, 132, 252),
            rating: Color32::from_rgb(251, 191, 36),
            badge_fixed_bg: Color32::from_rgb(20, 83, 45),
            badge_fixed_fg: Color32::from_rgb(187, 247, 208),
            badge_negotiated_bg: Color32::from_rgb(127, 29, 29),
            badge_negotiated_fg: Color32::from_rgb(254, 202, 202),

            map_land: Color32::from_rgb(48, 49, 52),
            map_grid: Color32::from_rgb(70, 72, 76),
            marker: Color32::from_rgb(192, 132, 252),
            marker_selected: Color32::from_rgb(248, 113, 113),
            popup_background: Color32::from_rgb(45, 46, 50),

            error: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Creates the Dracula theme.
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            price: hex_to_color32("#bd93f9"),
            rating: hex_to_color32("#f1fa8c"),
            badge_fixed_bg: hex_to_color32("#1e3a2f"),
            badge_fixed_fg: hex_to_color32("#50fa7b"),
            badge_negotiated_bg: hex_to_color32("#3d2330"),
            badge_negotiated_fg: hex_to_color32("#ff5555"),

            map_land: hex_to_color32("#21222c"),
            map_grid: hex_to_color32("#44475a"),
            marker: hex_to_color32("#bd93f9"),
            marker_selected: hex_to_color32("#ff79c6"),
            popup_background: hex_to_color32("#343746"),

            error: hex_to_color32("#ff5555"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_present() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
        assert!(manager.get_theme("Dracula").is_some());
    }

    #[test]
    fn test_set_current_theme() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Dark").is_ok());
        assert_eq!(manager.current_theme().name, "Dark");
        assert!(manager.set_current_theme("Solarized").is_err());
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }
}
