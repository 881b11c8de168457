//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the read-only capability set
//! the extractors need: selection, attribute and dataset reads, text and inner
//! markup, class tests and element navigation. Extractors never touch
//! `dom_query` directly, and nothing here mutates the caller's document.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

use crate::error::{Error, Result};

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get a dataset-style custom attribute (`data-<name>`)
#[inline]
#[must_use]
pub fn dataset(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, &format!("data-{name}"))
}

/// Get an attribute that must be present.
///
/// # Errors
///
/// Returns `Error::NotFound` when the selection is empty or lacks the attribute.
pub fn require_attribute(sel: &Selection, name: &str) -> Result<String> {
    get_attribute(sel, name).ok_or_else(|| Error::NotFound(format!("{name} attribute")))
}

/// Check whether the first element carries a class
#[inline]
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.has_class(class)
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Clear all attributes from a selection.
pub fn clear_all_attributes(sel: &Selection) {
    for (key, _) in get_all_attributes(sel) {
        remove_attribute(sel, &key);
    }
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get trimmed text content as owned storage
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// First element child, if any
#[must_use]
pub fn first_element_child<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    children(sel).nodes().first().map(|node| Selection::from(*node))
}

/// Last element child, if any
#[must_use]
pub fn last_element_child<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    children(sel).nodes().last().map(|node| Selection::from(*node))
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

// === Querying ===

/// Selection over the document node, for document-wide queries
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

/// Query single element by CSS selector
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Query all elements by CSS selector
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

/// Query single element that must exist.
///
/// # Errors
///
/// Returns `Error::NotFound` naming the selector when nothing matches.
pub fn require<'a>(sel: &Selection<'a>, selector: &str) -> Result<Selection<'a>> {
    let found = query_selector(sel, selector);
    if found.is_empty() {
        return Err(Error::NotFound(selector.to_string()));
    }
    Ok(found)
}

/// Split a multi-element selection into single-element selections in
/// document order.
#[must_use]
pub fn elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Cloning ===

/// Deep-clone an element into a detached document.
///
/// Edits on the returned document never reach the source tree.
#[must_use]
pub fn clone_element(sel: &Selection) -> Document {
    Document::from(outer_html(sel))
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_attributes() {
        let doc = parse(r#"<div id="main" class="container" data-id="42">content</div>"#);
        let div = doc.select("div");

        assert_eq!(get_attribute(&div, "id"), Some("main".to_string()));
        assert_eq!(dataset(&div, "id"), Some("42".to_string()));
        assert!(has_class(&div, "container"));
        assert!(!has_class(&div, "other"));
    }

    #[test]
    fn test_missing_attributes_return_none() {
        let doc = parse("<div>content</div>");
        let div = doc.select("div");

        assert_eq!(get_attribute(&div, "id"), None);
        assert_eq!(dataset(&div, "src"), None);
        assert_eq!(
            require_attribute(&div, "href"),
            Err(Error::NotFound("href attribute".to_string()))
        );
    }

    #[test]
    fn test_require_reports_selector() {
        let doc = parse("<div><p>text</p></div>");
        let root = doc.select("div");

        assert!(require(&root, "p").is_ok());
        assert_eq!(
            require(&root, ".missing").map(|s| s.length()),
            Err(Error::NotFound(".missing".to_string()))
        );
    }

    #[test]
    fn test_first_and_last_element_child() {
        let doc = parse("<ul><li> <b>Key</b> text <i>Value</i> </li></ul>");
        let li = doc.select("li");

        let first = first_element_child(&li).map(|s| trimmed_text(&s));
        let last = last_element_child(&li).map(|s| trimmed_text(&s));

        assert_eq!(first.as_deref(), Some("Key"));
        assert_eq!(last.as_deref(), Some("Value"));
    }

    #[test]
    fn test_next_element_sibling() {
        let doc = parse("<div><h4>Title</h4>\n  <p>Body</p></div>");
        let h4 = doc.select("h4");

        let next = next_element_sibling(&h4).map(|s| trimmed_text(&s));
        assert_eq!(next.as_deref(), Some("Body"));

        let p = doc.select("p");
        assert!(next_element_sibling(&p).is_none());
    }

    #[test]
    fn test_elements_preserve_document_order() {
        let doc = parse("<ul><li>a</li><li>b</li><li>c</li></ul>");
        let texts: Vec<String> = elements(&doc.select("li"))
            .iter()
            .map(trimmed_text)
            .collect();

        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clone_element_is_detached() {
        let doc = parse(r#"<section><h3 class="head">T</h3></section>"#);
        let copy = clone_element(&doc.select("section"));

        clear_all_attributes(&copy.select("h3"));

        assert!(get_attribute(&copy.select("h3"), "class").is_none());
        assert_eq!(get_attribute(&doc.select("h3"), "class"), Some("head".to_string()));
    }
}
