//! Map and tile-provider configuration.
//!
//! The original prototype hardcoded the tile URL and access token at
//! module level. Here configuration is an explicit object handed to the
//! map view at construction time. Tile fetching itself is out of scope;
//! this is validation and passthrough only.

use crate::catalog::GeoPoint;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tile-provider wiring: URL template plus credentials and attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileProviderConfig {
    /// Templated tile URL, e.g.
    /// `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`.
    pub url_template: String,
    /// Access token substituted for `{token}`, if the provider needs one.
    pub api_token: Option<String>,
    /// Attribution string the UI must display.
    pub attribution: String,
}

impl Default for TileProviderConfig {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            api_token: None,
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

impl TileProviderConfig {
    /// Validates the template and credentials.
    ///
    /// The template must carry the `{z}`, `{x}` and `{y}` placeholders,
    /// and a template referencing `{token}` must have a token configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for placeholder in ["{z}", "{x}", "{y}"] {
            if !self.url_template.contains(placeholder) {
                return Err(ConfigError::MissingPlaceholder {
                    template: self.url_template.clone(),
                    placeholder,
                });
            }
        }
        if self.url_template.contains("{token}") && self.api_token.is_none() {
            return Err(ConfigError::MissingToken);
        }
        Ok(())
    }
}

/// Initial map view configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial map center.
    pub center: GeoPoint,
    /// Initial zoom level (slippy-map convention, 1..=19).
    pub zoom: u8,
    pub tile_provider: TileProviderConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(40.81, -73.96),
            zoom: 13,
            tile_provider: TileProviderConfig::default(),
        }
    }
}

impl MapConfig {
    /// Validates zoom bounds and the tile-provider wiring.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=19).contains(&self.zoom) {
            return Err(ConfigError::ZoomOutOfRange { zoom: self.zoom });
        }
        self.tile_provider.validate()
    }
}
