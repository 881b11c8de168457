//! Result types for extraction output.
//!
//! Every record is a plain value: built fresh per extraction, no identity
//! beyond its content and no references back into the document. Field names
//! serialize in camelCase.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::price;

/// Everything extracted from one product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub meta: MetaRecord,
    pub product: ProductRecord,
    /// Suggestion cards in document order.
    pub suggested: Vec<SuggestedItem>,
    /// Review cards in document order.
    pub reviews: Vec<ReviewRecord>,
}

/// Page-level metadata from `<html>`, `<title>` and `<meta>` tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
    /// `lang` attribute of the root element, unmodified; empty when absent.
    pub language: String,

    /// Title segment before the title separator, trimmed.
    pub title: String,

    /// Entries of the `keywords` meta tag, trimmed, in document order.
    pub keywords: Vec<String>,

    /// Content of the `description` meta tag, unmodified.
    pub description: String,

    /// `og:*` properties keyed without the `og:` prefix.
    pub opengraph: BTreeMap<String, String>,
}

/// A product preview image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    /// Displayed (`src`) image.
    pub preview: String,
    /// Full-size lazy-load (`data-src`) image.
    pub full: String,
    /// Accessibility text.
    pub alt: String,
}

/// Classification of a product tag by its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagKind {
    Category,
    Label,
    Discount,
    NotFound,
}

impl TagKind {
    /// Map a tag class to its kind. Unknown or missing classes are `NotFound`.
    #[must_use]
    pub fn from_class(class: Option<&str>) -> Self {
        match class.map(str::trim) {
            Some("green") => Self::Category,
            Some("blue") => Self::Label,
            Some("red") => Self::Discount,
            _ => Self::NotFound,
        }
    }
}

/// The main product card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    /// Distinct preview images, first occurrence order.
    pub images: Vec<ImageRef>,
    pub is_liked: bool,
    pub name: String,
    /// One single-element list per tag kind; later tags of a kind win.
    pub tags: BTreeMap<TagKind, Vec<String>>,
    pub price: f64,
    pub old_price: f64,
    /// `old_price - price`, rounded to 2 decimals.
    pub discount: f64,
    pub discount_percent: String,
    pub currency: CurrencyCode,
    /// Property rows; duplicate keys keep the last value.
    pub properties: BTreeMap<String, String>,
    /// Inner markup of the description block.
    pub description: String,
}

/// A related item card. `price` stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedItem {
    pub image: String,
    pub name: String,
    pub price: String,
    pub currency: CurrencyCode,
    pub description: String,
}

impl SuggestedItem {
    /// Numeric price, when the label holds one.
    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        price::parse_number(&self.price).ok()
    }
}

/// Review author block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub avatar: String,
    pub name: String,
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Number of filled stars in the card's rating widget.
    pub rating: usize,
    pub author: Author,
    pub title: String,
    pub description: String,
    /// Source date with `/` replaced by `.`; not validated.
    pub date: String,
}

impl ReviewRecord {
    /// Parse the normalized `dd.mm.yyyy` date.
    ///
    /// Returns `None` for dates that do not follow that layout.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%d.%m.%Y").ok()
    }
}
