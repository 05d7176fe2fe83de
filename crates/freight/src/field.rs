//! Numeric form fields.
//!
//! Line-item fields arrive as free text typed into the editor (or as JSON
//! numbers from an API client). They are read the way a browser's
//! `parseFloat` reads them: leading whitespace is skipped and the longest
//! numeric prefix is used. Calculator inputs must be finite and
//! non-negative; anything else reads as `0`. Weights and money amounts keep
//! their sign and only fall back to `0` when unparsable or non-finite.

use serde::{Deserialize, Serialize};

/// Raw value of a numeric field, either already a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric reading of the field (`0` when unparsable).
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => sanitize(*n),
            FieldValue::Text(s) => coerce_numeric(s),
        }
    }

    /// Numeric reading that keeps negative values (`0` when unparsable).
    pub fn as_signed_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => finite_or_zero(*n),
            FieldValue::Text(s) => coerce_signed(s),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Number(0.0)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Parse free text into a non-negative number, falling back to `0`.
pub fn coerce_numeric(input: &str) -> f64 {
    let prefix = numeric_prefix(input.trim_start());
    if prefix.is_empty() {
        return 0.0;
    }
    prefix.parse::<f64>().map(sanitize).unwrap_or(0.0)
}

/// Parse free text into a finite number, keeping its sign; `0` on failure.
pub fn coerce_signed(input: &str) -> f64 {
    let prefix = numeric_prefix(input.trim_start());
    if prefix.is_empty() {
        return 0.0;
    }
    prefix.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Clamp to the calculator's domain: finite and non-negative, else `0`.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Longest prefix of `s` that reads as a decimal number (sign, digits,
/// optional fraction, optional exponent). Empty when there is none.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits > 0 || frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}
