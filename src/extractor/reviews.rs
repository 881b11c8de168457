//! Review cards.

use dom_query::Document;

use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::patterns::{
    REVIEW_AUTHOR_AVATAR, REVIEW_AUTHOR_NAME, REVIEW_CARDS, REVIEW_DATE, REVIEW_FILLED_STARS,
    REVIEW_TITLE,
};
use crate::result::{Author, ReviewRecord};
use crate::Options;

/// Extract every review card in document order.
///
/// # Errors
///
/// Returns `Error::NotFound` when a card lacks its author block, title, the
/// element following the title, or the date.
pub fn extract_reviews(doc: &Document, opts: &Options) -> Result<Vec<ReviewRecord>> {
    let cards = dom::elements(&dom::query_selector_all(&dom::root(doc), REVIEW_CARDS));
    tracing::debug!(count = cards.len(), "extracting reviews");

    cards.iter().map(|card| extract_review(card, opts)).collect()
}

fn extract_review(card: &Selection, opts: &Options) -> Result<ReviewRecord> {
    // Stars are counted within this card only
    let rating = dom::query_selector_all(card, REVIEW_FILLED_STARS).length();

    let avatar = dom::require_attribute(&dom::require(card, REVIEW_AUTHOR_AVATAR)?, "src")?;
    let name = dom::trimmed_text(&dom::require(card, REVIEW_AUTHOR_NAME)?);

    let title = dom::require(card, REVIEW_TITLE)?;
    let body = dom::next_element_sibling(&title)
        .ok_or_else(|| Error::NotFound(format!("{REVIEW_TITLE} sibling")))?;

    let date = dom::trimmed_text(&dom::require(card, REVIEW_DATE)?)
        .replace(opts.date_separator, &opts.date_replacement.to_string());

    Ok(ReviewRecord {
        rating,
        author: Author { avatar, name },
        title: dom::trimmed_text(&title),
        description: dom::trimmed_text(&body),
        date,
    })
}
