//! Currency glyph to ISO code mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-letter currency code, or the `notFound` sentinel for unknown glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[serde(rename = "RUB")]
    Rub,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "notFound")]
    NotFound,
}

impl CurrencyCode {
    /// Map a currency glyph to its code.
    ///
    /// Total: anything other than exactly `₽`, `$` or `€` is `NotFound`.
    #[must_use]
    pub fn encode(glyph: &str) -> Self {
        match glyph {
            "₽" => Self::Rub,
            "$" => Self::Usd,
            "€" => Self::Eur,
            _ => Self::NotFound,
        }
    }

    /// Code of the glyph leading a price label such as `"$42"`.
    #[must_use]
    pub fn from_price_text(text: &str) -> Self {
        text.trim()
            .chars()
            .next()
            .map_or(Self::NotFound, |glyph| Self::encode(glyph.encode_utf8(&mut [0; 4])))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rub => "RUB",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::NotFound => "notFound",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
