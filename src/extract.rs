//! Page assembly.
//!
//! Runs the four top-level extractors against one document and composes their
//! results. The first failure aborts the page.

use crate::dom::Document;
use crate::error::Result;
use crate::extractor;
use crate::metadata;
use crate::options::Options;
use crate::result::PageRecord;

/// Main entry point for page extraction.
pub(crate) fn extract_page_record(doc: &Document, options: &Options) -> Result<PageRecord> {
    let meta = metadata::extract_meta(doc, options)?;
    let product = extractor::extract_product(doc, options)?;
    let suggested = extractor::extract_suggested(doc)?;
    let reviews = extractor::extract_reviews(doc, options)?;

    tracing::debug!(
        product = %product.id,
        images = product.images.len(),
        suggested = suggested.len(),
        reviews = reviews.len(),
        "assembled page record"
    );

    Ok(PageRecord {
        meta,
        product,
        suggested,
        reviews,
    })
}
