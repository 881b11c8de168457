//! Product card extraction.
//!
//! All reads except the like button are scoped under the `.product`
//! container. A missing container, name or price block fails the whole card.

use std::collections::{BTreeMap, HashSet};

use dom_query::Document;

use crate::currency::CurrencyCode;
use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::patterns::{
    LIKE_ACTIVE_CLASS, LIKE_BUTTON, PRODUCT, PRODUCT_DESCRIPTION, PRODUCT_IMAGES, PRODUCT_NAME,
    PRODUCT_PRICE, PRODUCT_PROPERTIES, PRODUCT_TAGS,
};
use crate::price::{self, PriceKind};
use crate::result::{ImageRef, ProductRecord, TagKind};
use crate::Options;

/// Extract the main product card.
///
/// # Errors
///
/// Returns `Error::NotFound` for a missing container, `data-id`, like button,
/// name, price block, description block, or property cell, and
/// `Error::MalformedValue` when the price label does not hold both a current
/// and an old price.
pub fn extract_product(doc: &Document, opts: &Options) -> Result<ProductRecord> {
    let root = dom::root(doc);
    let product = dom::require(&root, PRODUCT)?;

    let id = dom::dataset(&product, "id")
        .ok_or_else(|| Error::NotFound(format!("{PRODUCT} data-id")))?;
    let is_liked = dom::has_class(&dom::require(&root, LIKE_BUTTON)?, LIKE_ACTIVE_CLASS);
    let name = dom::trimmed_text(&dom::require(&product, PRODUCT_NAME)?);

    let price_text = dom::text_content(&dom::require(&product, PRODUCT_PRICE)?);
    let current = price::extract_price(&price_text, PriceKind::Current)?;
    let old = price::extract_price(&price_text, PriceKind::Old)?;
    let discount = price::compute_discount(old, current);
    let currency = CurrencyCode::from_price_text(&price_text);

    tracing::debug!(
        %id,
        current,
        old,
        discount = discount.value,
        %currency,
        "parsed product price"
    );

    Ok(ProductRecord {
        id,
        images: extract_images(&product)?,
        is_liked,
        name,
        tags: extract_tags(&product),
        price: current,
        old_price: old,
        discount: discount.value,
        discount_percent: discount.percent,
        currency,
        properties: extract_properties(&product)?,
        description: extract_description(&product, opts)?,
    })
}

/// Preview images, deduplicated by value in first occurrence order.
///
/// # Errors
///
/// Returns `Error::NotFound` for an image without `src`.
pub fn extract_images(product: &Selection) -> Result<Vec<ImageRef>> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for img in dom::elements(&dom::query_selector_all(product, PRODUCT_IMAGES)) {
        let image = ImageRef {
            preview: dom::require_attribute(&img, "src")?,
            full: dom::dataset(&img, "src").unwrap_or_default(),
            alt: dom::get_attribute(&img, "alt").unwrap_or_default(),
        };
        if seen.insert(image.clone()) {
            images.push(image);
        }
    }

    Ok(images)
}

/// Tags keyed by their class. A later tag of the same kind replaces an
/// earlier one.
#[must_use]
pub fn extract_tags(product: &Selection) -> BTreeMap<TagKind, Vec<String>> {
    let mut tags = BTreeMap::new();

    for span in dom::elements(&dom::query_selector_all(product, PRODUCT_TAGS)) {
        let kind = TagKind::from_class(dom::get_attribute(&span, "class").as_deref());
        tags.insert(kind, vec![dom::trimmed_text(&span)]);
    }

    tags
}

/// Property rows: first cell is the key, last cell the value.
///
/// # Errors
///
/// Returns `Error::NotFound` for a row without element children.
pub fn extract_properties(product: &Selection) -> Result<BTreeMap<String, String>> {
    let mut properties = BTreeMap::new();

    for row in dom::elements(&dom::query_selector_all(product, PRODUCT_PROPERTIES)) {
        let (Some(key), Some(value)) = (dom::first_element_child(&row), dom::last_element_child(&row))
        else {
            return Err(Error::NotFound(format!("{PRODUCT_PROPERTIES} cells")));
        };
        properties.insert(dom::trimmed_text(&key), dom::trimmed_text(&value));
    }

    Ok(properties)
}

/// Inner markup of the description block with the attributes of its
/// heading removed.
///
/// Works on a detached copy; the source document is left untouched.
///
/// # Errors
///
/// Returns `Error::NotFound` when the description block is missing.
pub fn extract_description(product: &Selection, opts: &Options) -> Result<String> {
    let block = dom::require(product, PRODUCT_DESCRIPTION)?;
    let copy = dom::clone_element(&block);
    let copy_root = dom::root(&copy);
    let copy_block = dom::require(&copy_root, PRODUCT_DESCRIPTION)?;

    let heading = dom::query_selector(&copy_block, &opts.description_heading);
    dom::clear_all_attributes(&heading);

    Ok(dom::inner_html(&copy_block).trim().to_string())
}
