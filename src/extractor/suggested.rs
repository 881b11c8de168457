//! Suggested item cards.

use dom_query::Document;

use crate::currency::CurrencyCode;
use crate::dom::{self, Selection};
use crate::error::Result;
use crate::patterns::{
    SUGGESTED_CARDS, SUGGESTED_DESCRIPTION, SUGGESTED_IMAGE, SUGGESTED_NAME, SUGGESTED_PRICE,
};
use crate::price::strip_glyph;
use crate::result::SuggestedItem;

/// Extract every suggestion card in document order.
///
/// The price stays a string with only the currency glyph stripped.
///
/// # Errors
///
/// Returns `Error::NotFound` when a card lacks its image, heading, price
/// label or description paragraph.
pub fn extract_suggested(doc: &Document) -> Result<Vec<SuggestedItem>> {
    let cards = dom::elements(&dom::query_selector_all(&dom::root(doc), SUGGESTED_CARDS));
    tracing::debug!(count = cards.len(), "extracting suggested items");

    cards.iter().map(extract_card).collect()
}

fn extract_card(card: &Selection) -> Result<SuggestedItem> {
    let image = dom::require_attribute(&dom::require(card, SUGGESTED_IMAGE)?, "src")?;
    let name = dom::trimmed_text(&dom::require(card, SUGGESTED_NAME)?);
    let label = dom::trimmed_text(&dom::require(card, SUGGESTED_PRICE)?);
    let description = dom::trimmed_text(&dom::require(card, SUGGESTED_DESCRIPTION)?);

    Ok(SuggestedItem {
        image,
        name,
        price: strip_glyph(&label).to_string(),
        currency: CurrencyCode::from_price_text(&label),
        description,
    })
}
