//! Listing catalog model and JSON parsing.
//!
//! A catalog is a flat list of hospital price/quality listings loaded from
//! a JSON file. Records are immutable seed data: they have no identity
//! beyond their position in the catalog and live for the process lifetime.
//!
//! # Supported Formats
//!
//! - `.json` — uncompressed catalog
//! - `.json.br` — Brotli-compressed catalog

use anyhow::{Context, Result};
use brotli::Decompressor;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};

/// A geographic point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// How a listed price was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceType {
    /// Published, non-negotiable price.
    Fixed,
    /// Payer-negotiated rate.
    Negotiated,
}

impl PriceType {
    /// Display label, e.g. `"Fixed Price"`.
    pub fn label(&self) -> &'static str {
        match self {
            PriceType::Fixed => "Fixed Price",
            PriceType::Negotiated => "Negotiated Price",
        }
    }
}

/// A single hospital listing.
///
/// `distance_label` is a pre-formatted display string ("1.6 mi"); it is
/// not derived from `location` and the two need not agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub name: String,
    pub rating: f32,
    #[serde(rename = "distance")]
    pub distance_label: String,
    /// Price in whole currency units.
    pub price: i64,
    pub price_type: PriceType,
    pub location: GeoPoint,
    pub address: String,
}

/// An immutable collection of listings plus catalog-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Human-readable catalog title shown in the status bar.
    #[serde(default)]
    pub title: Option<String>,
    pub listings: Vec<ListingRecord>,
}

impl Catalog {
    /// Creates a catalog from a list of records with no title.
    pub fn new(listings: Vec<ListingRecord>) -> Self {
        Self { title: None, listings }
    }

    /// Returns the built-in demo catalog.
    ///
    /// The four records mirror the project's original demo data. Values
    /// are placeholders; only the record shape is contractual.
    pub fn builtin() -> Catalog {
        BUILTIN.clone()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Returns the record at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&ListingRecord> {
        self.listings.get(index)
    }
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    title: Some("Demo Hospitals".to_string()),
    listings: vec![
        ListingRecord {
            name: "Monroe Regional Hospital".to_string(),
            rating: 4.2,
            distance_label: "1.6 mi".to_string(),
            price: 1374,
            price_type: PriceType::Fixed,
            location: GeoPoint::new(40.8106, -73.955),
            address: "400 S Chestnut St, Aberdeen, MS 39730, USA".to_string(),
        },
        ListingRecord {
            name: "Sharp Memorial".to_string(),
            rating: 3.9,
            distance_label: "1.8 mi".to_string(),
            price: 1976,
            price_type: PriceType::Fixed,
            location: GeoPoint::new(40.813, -73.97),
            address: "400 S Chestnut St, Aberdeen, MS 39730, USA".to_string(),
        },
        ListingRecord {
            name: "Riverview Medical Center".to_string(),
            rating: 4.1,
            distance_label: "2.3 mi".to_string(),
            price: 2457,
            price_type: PriceType::Negotiated,
            location: GeoPoint::new(40.817, -73.98),
            address: "400 S Chestnut St, Aberdeen, MS 39730, USA".to_string(),
        },
        ListingRecord {
            name: "Bayshore Community Hospital".to_string(),
            rating: 4.0,
            distance_label: "2.5 mi".to_string(),
            price: 3291,
            price_type: PriceType::Fixed,
            location: GeoPoint::new(40.819, -73.99),
            address: "400 S Chestnut St, Aberdeen, MS 39730, USA".to_string(),
        },
    ],
});

/// Parses a catalog file from disk.
///
/// Automatically decompresses Brotli-compressed catalogs based on the
/// `.br` file extension.
///
/// # Examples
///
/// ```no_run
/// # use caremap::parse_catalog;
/// # fn main() -> anyhow::Result<()> {
/// let catalog = parse_catalog("hospitals.json")?;
/// let compressed = parse_catalog("hospitals.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_catalog(file_path: &str) -> Result<Catalog> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open catalog file: {}", file_path))?;

    let mut reader: Box<dyn Read> = if file_path.ends_with(".br") {
        Box::new(Decompressor::new(BufReader::new(file), 4096))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read catalog file: {}", file_path))?;

    parse_catalog_str(&contents)
        .with_context(|| format!("Failed to parse catalog file: {}", file_path))
}

/// Parses a catalog from a JSON string.
///
/// Accepts either a full catalog object (`{"title": ..., "listings": [...]}`)
/// or a bare array of listings for convenience.
pub fn parse_catalog_str(json: &str) -> Result<Catalog> {
    let trimmed = json.trim_start();
    if trimmed.starts_with('[') {
        let listings: Vec<ListingRecord> =
            serde_json::from_str(trimmed).context("Invalid listing array")?;
        Ok(Catalog::new(listings))
    } else {
        serde_json::from_str(trimmed).context("Invalid catalog object")
    }
}
