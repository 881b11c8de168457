//! Open Graph Extraction
//!
//! Collects every `og:*` meta property into a map keyed without the prefix.

use std::collections::BTreeMap;

use crate::dom::{self, Selection};
use crate::error::Result;
use crate::metadata::meta_tags::split_title;
use crate::patterns::{META_OPENGRAPH, OPENGRAPH_PREFIX};
use crate::Options;

/// Extract Open Graph properties.
///
/// `og:title` gets the same separator split as the page title. A property
/// repeated on the page keeps its last value.
///
/// # Errors
///
/// Returns `Error::NotFound` when an `og:` meta tag has no `content`.
pub fn extract_open_graph(root: &Selection, opts: &Options) -> Result<BTreeMap<String, String>> {
    let mut opengraph = BTreeMap::new();

    for meta in dom::elements(&dom::query_selector_all(root, META_OPENGRAPH)) {
        let property = dom::require_attribute(&meta, "property")?;
        let Some(key) = property.strip_prefix(OPENGRAPH_PREFIX) else {
            continue;
        };
        let content = dom::require_attribute(&meta, "content")?;

        let value = if key == "title" {
            split_title(&content, opts.title_separator)
        } else {
            content
        };
        opengraph.insert(key.to_string(), value);
    }

    Ok(opengraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_open_graph_tags() {
        let html = r#"<!DOCTYPE html>
        <html>
        <head>
            <meta property="og:title" content="Sneakers Air — Best Shop">
            <meta property="og:description" content="Light and fast">
            <meta property="og:image" content="https://shop.test/air.jpg">
            <meta property="og:type" content="website">
            <meta property="twitter:title" content="Ignored">
            <meta name="og:title" content="Also ignored">
        </head>
        <body></body>
        </html>"#;

        let doc = dom::parse(html);
        let og = extract_open_graph(&dom::root(&doc), &Options::default()).unwrap_or_default();

        assert_eq!(og.len(), 4);
        assert_eq!(og.get("title").map(String::as_str), Some("Sneakers Air"));
        assert_eq!(og.get("description").map(String::as_str), Some("Light and fast"));
        assert_eq!(og.get("image").map(String::as_str), Some("https://shop.test/air.jpg"));
        assert_eq!(og.get("type").map(String::as_str), Some("website"));
    }

    #[test]
    fn test_no_open_graph_is_empty_map() {
        let doc = dom::parse("<html><head><title>T</title></head></html>");
        let og = extract_open_graph(&dom::root(&doc), &Options::default());

        assert_eq!(og, Ok(BTreeMap::new()));
    }

    #[test]
    fn test_only_title_is_split() {
        let html = r#"<head>
            <meta property="og:title" content="A — B">
            <meta property="og:site_name" content="A — B">
        </head>"#;

        let doc = dom::parse(html);
        let og = extract_open_graph(&dom::root(&doc), &Options::default()).unwrap_or_default();

        assert_eq!(og.get("title").map(String::as_str), Some("A"));
        assert_eq!(og.get("site_name").map(String::as_str), Some("A — B"));
    }

    #[test]
    fn test_missing_content_is_not_found() {
        let doc = dom::parse(r#"<head><meta property="og:url"></head>"#);
        let og = extract_open_graph(&dom::root(&doc), &Options::default());

        assert_eq!(og, Err(Error::NotFound("content attribute".to_string())));
    }
}
