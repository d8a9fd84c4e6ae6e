pub mod catalog;
pub mod config;
pub mod distance;
pub mod error;
pub mod map;
pub mod sample;
pub mod store;
pub mod theme;
pub mod viewport;
pub mod writer;

// Export catalog model
pub use catalog::{parse_catalog, parse_catalog_str, Catalog, GeoPoint, ListingRecord, PriceType};

// Export listing store
pub use store::{ListingStore, SortCriterion, StoreEvent};

// Export viewport controller
pub use viewport::{SidebarState, ViewportController, DEFAULT_RESIZE_DELAY};

// Export map surface seam
pub use map::{markers_for_store, MapSurface, Marker};

// Export configuration
pub use config::{MapConfig, TileProviderConfig};

// Export error taxonomy
pub use error::{ConfigError, ParseError};

// Export distance parsing
pub use distance::parse_distance_label;

// Export writer and sample generation
pub use sample::generate_catalog;
pub use writer::write_catalog;

// Export theme support
pub use theme::{hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};
