//! Error taxonomy for the CareMap core.
//!
//! Two non-recoverable error kinds exist: malformed distance labels
//! discovered while building a sorted view, and invalid tile-provider
//! configuration. Higher layers compose these with `anyhow`.

use thiserror::Error;

/// A distance label could not be parsed into a numeric magnitude.
///
/// Labels are display strings like `"1.6 mi"`; the leading numeral is the
/// only machine-readable part. A label without one leaves ordering
/// ill-defined, so parsing fails loudly instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed distance label: {label:?} (expected a leading numeral, e.g. \"1.6 mi\")")]
pub struct ParseError {
    /// The offending label, verbatim.
    pub label: String,
}

impl ParseError {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// Tile-provider configuration failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The URL template is missing a required placeholder.
    #[error("tile URL template {template:?} is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },

    /// The URL template references `{token}` but no token was supplied.
    #[error("tile URL template requires an access token but none was configured")]
    MissingToken,

    /// Zoom level outside the range tile servers accept.
    #[error("initial zoom {zoom} is outside the supported range 1..=19")]
    ZoomOutOfRange { zoom: u8 },
}
