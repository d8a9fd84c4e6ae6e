//! Distance label parsing.
//!
//! Listing distances arrive as pre-formatted display strings such as
//! `"1.6 mi"`. Only the leading numeral participates in ordering; the
//! unit suffix is display-only and gets stripped before comparison.

use crate::error::ParseError;

/// Parses the numeric magnitude from the leading numeral of a distance label.
///
/// Leading whitespace is tolerated. Everything after the number (unit
/// suffix, extra text) is ignored.
///
/// # Errors
///
/// Returns [`ParseError`] if the label does not start with a numeral.
/// Downstream comparison would be ill-defined on a default value, so
/// malformed input fails loudly.
///
/// # Examples
///
/// ```
/// # use caremap::parse_distance_label;
/// assert_eq!(parse_distance_label("1.6 mi").unwrap(), 1.6);
/// assert_eq!(parse_distance_label("12 km").unwrap(), 12.0);
/// assert!(parse_distance_label("nearby").is_err());
/// ```
pub fn parse_distance_label(label: &str) -> Result<f64, ParseError> {
    let trimmed = label.trim_start();

    let numeral_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    let numeral = &trimmed[..numeral_len];
    numeral
        .parse::<f64>()
        .map_err(|_| ParseError::new(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_typical_labels() {
        assert_eq!(parse_distance_label("1.6 mi").unwrap(), 1.6);
        assert_eq!(parse_distance_label("2.5 mi").unwrap(), 2.5);
        assert_eq!(parse_distance_label("0.4 km").unwrap(), 0.4);
    }

    #[test]
    fn test_parses_integer_magnitude() {
        assert_eq!(parse_distance_label("3 mi").unwrap(), 3.0);
    }

    #[test]
    fn test_tolerates_leading_whitespace_and_missing_unit() {
        assert_eq!(parse_distance_label("  7.25").unwrap(), 7.25);
    }

    #[test]
    fn test_rejects_label_without_leading_numeral() {
        let err = parse_distance_label("about a mile").unwrap_err();
        assert_eq!(err.label, "about a mile");
    }

    #[test]
    fn test_rejects_empty_label() {
        assert!(parse_distance_label("").is_err());
        assert!(parse_distance_label("   ").is_err());
    }

    #[test]
    fn test_rejects_bare_dot() {
        assert!(parse_distance_label(". mi").is_err());
    }
}
