//! HTML Meta Tag Extraction
//!
//! Reads the page language, the `<title>` element and the named `keywords`
//! and `description` meta tags. Every tag read here is required.

use crate::dom::{self, Selection};
use crate::error::Result;
use crate::patterns::{HTML_ROOT, META_DESCRIPTION, META_KEYWORDS, PAGE_TITLE};
use crate::Options;

/// Keep the part of a title before the first separator, trimmed.
///
/// A title without the separator is returned whole, trimmed.
#[must_use]
pub fn split_title(raw: &str, separator: char) -> String {
    raw.split(separator).next().unwrap_or_default().trim().to_string()
}

/// `lang` attribute of the root element, passed through as-is.
///
/// # Errors
///
/// Returns `Error::NotFound` when the document has no `<html>` element.
pub fn extract_language(root: &Selection) -> Result<String> {
    let html = dom::require(root, HTML_ROOT)?;
    Ok(dom::get_attribute(&html, "lang").unwrap_or_default())
}

/// Page title up to the title separator.
///
/// # Errors
///
/// Returns `Error::NotFound` when `<head>` has no `<title>`.
pub fn extract_title(root: &Selection, opts: &Options) -> Result<String> {
    let title = dom::require(root, PAGE_TITLE)?;
    Ok(split_title(&dom::text_content(&title), opts.title_separator))
}

/// Content of the `keywords` meta tag, split and trimmed.
///
/// Empty content yields a single empty keyword.
///
/// # Errors
///
/// Returns `Error::NotFound` when the tag or its `content` is missing.
pub fn extract_keywords(root: &Selection, opts: &Options) -> Result<Vec<String>> {
    let content = meta_content(root, META_KEYWORDS)?;
    Ok(content
        .split(opts.keyword_separator)
        .map(|word| word.trim().to_string())
        .collect())
}

/// Content of the `description` meta tag, unmodified.
///
/// # Errors
///
/// Returns `Error::NotFound` when the tag or its `content` is missing.
pub fn extract_description(root: &Selection) -> Result<String> {
    meta_content(root, META_DESCRIPTION)
}

fn meta_content(root: &Selection, selector: &str) -> Result<String> {
    let meta = dom::require(root, selector)?;
    dom::require_attribute(&meta, "content")
}
