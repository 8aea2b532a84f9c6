//! Numeric coercion for user-entered values.
//!
//! Every input the engine sees was typed by a person into a form, so it may
//! be blank, textual, negative or not a number at all. None of these are
//! errors: blank and unparseable values count as zero and monetary/time
//! inputs are clamped at zero. Computed outputs may still be negative
//! (a Post-IA scenario can be worse than its Baseline).

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Clamp a monetary/time/count input to a finite, non-negative value.
#[inline]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Replace NaN and infinities with zero, keeping the sign otherwise.
#[inline]
pub fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamp a percentage input to `[0, 100]`.
#[inline]
pub fn percentage(value: f64) -> f64 {
    non_negative(value).min(100.0)
}

/// `numerator / denominator`, or zero when the denominator is not positive.
#[inline]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        finite(numerator / denominator)
    } else {
        0.0
    }
}

/// Parse a user-typed number. Blank or malformed text yields zero.
///
/// A single comma is accepted as the decimal separator when no dot is
/// present, so `"12,5"` reads as `12.5`.
pub fn parse_lenient(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.replace(',', "")
    };

    match normalized.parse::<f64>() {
        Ok(value) => finite(value),
        Err(_) => {
            tracing::warn!(input = raw, "Unparseable numeric input, treating as 0");
            0.0
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Serde adapter for numeric record fields.
///
/// Accepts numbers, numeric strings, blank strings and `null`. Anything else
/// deserializes as `0.0` instead of failing the whole record.
///
/// ```
/// #[derive(serde::Deserialize)]
/// struct Row {
///     #[serde(default, deserialize_with = "roitrack::core::numeric::lenient")]
///     value: f64,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"value": " 12,5 "}"#).unwrap();
/// assert_eq!(row.value, 12.5);
/// let row: Row = serde_json::from_str(r#"{"value": null}"#).unwrap();
/// assert_eq!(row.value, 0.0);
/// ```
pub fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(value)) => finite(value),
        Some(RawNumber::Text(text)) => parse_lenient(&text),
        Some(RawNumber::Other(_)) => {
            tracing::warn!("Non-numeric value in numeric field, treating as 0");
            0.0
        }
        None => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient")]
        value: f64,
    }

    fn parse_row(json: &str) -> f64 {
        serde_json::from_str::<Row>(json).unwrap().value
    }

    #[test]
    fn non_negative_clamps_bad_values() {
        assert_eq!(non_negative(-3.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(f64::INFINITY), 0.0);
        assert_eq!(non_negative(4.5), 4.5);
    }

    #[test]
    fn percentage_is_capped() {
        assert_eq!(percentage(140.0), 100.0);
        assert_eq!(percentage(-1.0), 0.0);
        assert_eq!(percentage(37.5), 37.5);
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, -2.0), 0.0);
        assert_eq!(ratio(10.0, 4.0), 2.5);
    }

    #[test]
    fn parse_lenient_handles_form_input() {
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("   "), 0.0);
        assert_eq!(parse_lenient("42"), 42.0);
        assert_eq!(parse_lenient("12,5"), 12.5);
        assert_eq!(parse_lenient("1,200.50"), 1200.5);
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient("NaN"), 0.0);
    }

    #[test]
    fn lenient_field_accepts_every_shape() {
        assert_eq!(parse_row(r#"{"value": 7}"#), 7.0);
        assert_eq!(parse_row(r#"{"value": 7.25}"#), 7.25);
        assert_eq!(parse_row(r#"{"value": "8"}"#), 8.0);
        assert_eq!(parse_row(r#"{"value": ""}"#), 0.0);
        assert_eq!(parse_row(r#"{"value": null}"#), 0.0);
        assert_eq!(parse_row(r#"{"value": true}"#), 0.0);
        assert_eq!(parse_row(r#"{"value": [1, 2]}"#), 0.0);
        assert_eq!(parse_row(r#"{}"#), 0.0);
    }
}
