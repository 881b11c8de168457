//! Price parsing and discount math.
//!
//! Price labels have the shape `"<glyph><current> <glyph><old>"`, where the old
//! price may sit in an inline element whose text is still linearized into the
//! label. Tokens are whitespace separated and each carries exactly one leading
//! currency glyph.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which price token of a label to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    /// First token.
    Current,
    /// Second token, present only for discounted items.
    Old,
}

impl PriceKind {
    fn index(self) -> usize {
        match self {
            Self::Current => 0,
            Self::Old => 1,
        }
    }
}

/// Discount derived from an old and a current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// `old - current`, rounded to 2 decimals.
    pub value: f64,
    /// `value` as a percentage of `old`, e.g. `"20%"`; exactly `"0%"` when
    /// there is no discount.
    pub percent: String,
}

/// Round half away from zero to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Strip the single leading currency glyph from a price token.
#[must_use]
pub fn strip_glyph(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.as_str()
}

/// Parse one price out of a price label.
///
/// # Errors
///
/// Returns `Error::MalformedValue` when the requested token is missing (an
/// `Old` price on a label without a discount) or is not a finite number.
pub fn extract_price(raw_text: &str, which: PriceKind) -> Result<f64> {
    let token = raw_text
        .split_whitespace()
        .nth(which.index())
        .ok_or_else(|| {
            Error::MalformedValue(format!("no {which:?} price in {:?}", raw_text.trim()))
        })?;

    parse_number(strip_glyph(token))
}

/// Coerce a glyph-free price string to a number.
///
/// # Errors
///
/// Returns `Error::MalformedValue` for empty, non-numeric or non-finite input.
pub fn parse_number(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::MalformedValue(format!("not a price: {text:?}")))
}

/// Derive the discount between an old and a current price.
///
/// The percentage is computed from the already rounded `value`, then rounded
/// again before formatting.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn compute_discount(old: f64, current: f64) -> Discount {
    let value = round2(old - current);

    // Exactly zero, also catches -0.0
    if value == 0.0 {
        return Discount {
            value: 0.0,
            percent: "0%".to_string(),
        };
    }

    let percent = round2(value / (old / 100.0));
    Discount {
        value,
        percent: format!("{percent}%"),
    }
}
