//! Text formatting utilities for the CareMap viewer.
//!
//! This module provides helper functions for formatting values in a
//! human-readable way.

/// Formats a price in whole currency units with a dollar sign and
/// thousands separators.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_price(1374), "$1,374");
/// assert_eq!(format_price(1234567), "$1,234,567");
/// ```
pub fn format_price(price: i64) -> String {
    let s = price.abs().to_string();
    let mut grouped = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    if price < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a star rating with one decimal place.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_rating(4.2), "⭐ 4.2");
/// ```
pub fn format_rating(rating: f32) -> String {
    format!("⭐ {:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1374), "$1,374");
        assert_eq!(format_price(1234567), "$1,234,567");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-2500), "-$2,500");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.25), "⭐ 4.2");
        assert_eq!(format_rating(4.0), "⭐ 4.0");
    }
}
