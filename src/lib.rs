//! # product-page-extract
//!
//! Structured extraction from rendered product pages.
//!
//! Given a parsed document, the library produces one [`PageRecord`] holding
//! the page metadata, the main product card, the suggested items and the
//! customer reviews, with raw text normalized into typed values: prices with
//! currency glyphs become numbers and ISO codes, discounts are derived, tag
//! classes become keys, star widgets become ratings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_page_extract::extract_html;
//!
//! let html = std::fs::read_to_string("product.html")?;
//! let page = extract_html(&html)?;
//! println!("{} costs {} {}", page.product.name, page.product.price, page.product.currency);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Extraction is whole-record: either every part of the page is read or the
//! call fails with the first [`Error`]. Nothing is fetched, cached or shared
//! between calls.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Currency glyph to ISO code mapping.
pub mod currency;

/// Price parsing and discount math.
pub mod price;

/// Page metadata extraction (title, meta tags, Open Graph).
pub mod metadata;

/// Product, suggested item and review extraction.
pub mod extractor;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use currency::CurrencyCode;
pub use dom::Document;
pub use error::{Error, Result};
pub use options::Options;
pub use price::{compute_discount, extract_price, Discount, PriceKind};
pub use result::{
    Author, ImageRef, MetaRecord, PageRecord, ProductRecord, ReviewRecord, SuggestedItem, TagKind,
};

/// Extracts a page record from a parsed document using default options.
///
/// # Errors
///
/// Returns `Error::NotFound` when a required element or attribute is missing,
/// and `Error::MalformedValue` when a product price cannot be parsed.
///
/// # Example
///
/// ```rust
/// use product_page_extract::{dom, extract_page, Error};
///
/// let doc = dom::parse("<html><head></head><body></body></html>");
/// assert_eq!(extract_page(&doc), Err(Error::NotFound("head title".to_string())));
/// ```
pub fn extract_page(doc: &Document) -> Result<PageRecord> {
    extract_page_with_options(doc, &Options::default())
}

/// Extracts a page record from a parsed document with custom options.
///
/// # Errors
///
/// See [`extract_page`].
pub fn extract_page_with_options(doc: &Document, options: &Options) -> Result<PageRecord> {
    extract::extract_page_record(doc, options)
}

/// Parses an HTML string and extracts its page record.
///
/// # Errors
///
/// See [`extract_page`].
pub fn extract_html(html: &str) -> Result<PageRecord> {
    extract_page(&dom::parse(html))
}

/// Extracts a page record from HTML bytes with automatic encoding detection.
///
/// The charset comes from a byte order mark or the `<meta>` declaration in
/// the first kilobyte, defaulting to UTF-8. Invalid sequences are replaced
/// with U+FFFD rather than causing errors.
///
/// # Errors
///
/// See [`extract_page`].
pub fn extract_bytes(html: &[u8]) -> Result<PageRecord> {
    extract_html(&encoding::transcode_to_utf8(html))
}
