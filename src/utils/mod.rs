//! Utility modules for the CareMap viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_price, format_rating};
