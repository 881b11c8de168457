//! Metadata extraction module.
//!
//! Builds the page-level [`MetaRecord`] from the root language attribute, the
//! `<title>` element, the named meta tags and the Open Graph properties.

pub mod meta_tags;
pub mod open_graph;

use dom_query::Document;

use crate::dom;
use crate::error::Result;
use crate::result::MetaRecord;
use crate::Options;

pub use meta_tags::{
    extract_description, extract_keywords, extract_language, extract_title, split_title,
};
pub use open_graph::extract_open_graph;

/// Extract all page metadata from a document.
///
/// `title` and `opengraph.title` are split independently, each from its own
/// source string.
///
/// # Errors
///
/// Returns `Error::NotFound` when the title, the `keywords` or `description`
/// meta tag, or the content of any of these tags is missing.
pub fn extract_meta(doc: &Document, opts: &Options) -> Result<MetaRecord> {
    let root = dom::root(doc);

    let meta = MetaRecord {
        language: extract_language(&root)?,
        title: extract_title(&root, opts)?,
        keywords: extract_keywords(&root, opts)?,
        description: extract_description(&root)?,
        opengraph: extract_open_graph(&root, opts)?,
    };

    tracing::debug!(
        keywords = meta.keywords.len(),
        opengraph = meta.opengraph.len(),
        "extracted page metadata"
    );

    Ok(meta)
}
