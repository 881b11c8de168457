//! CSS selectors describing the product page layout.
//!
//! Selectors are grouped by the extractor that uses them. Selectors under a
//! container (`PRODUCT`, a suggestion card, a review card) are relative to it.

// =============================================================================
// Page metadata
// =============================================================================

pub const HTML_ROOT: &str = "html";
pub const PAGE_TITLE: &str = "head title";
pub const META_KEYWORDS: &str = "meta[name=keywords]";
pub const META_DESCRIPTION: &str = "meta[name=description]";
pub const META_OPENGRAPH: &str = r#"meta[property^="og:"]"#;
pub const OPENGRAPH_PREFIX: &str = "og:";

// =============================================================================
// Product card
// =============================================================================

pub const PRODUCT: &str = ".product";
pub const LIKE_BUTTON: &str = "button.like";
pub const LIKE_ACTIVE_CLASS: &str = "active";
pub const PRODUCT_IMAGES: &str = ".preview nav img";
pub const PRODUCT_NAME: &str = ".about .title";
pub const PRODUCT_TAGS: &str = ".tags span";
pub const PRODUCT_PRICE: &str = ".about .price";
pub const PRODUCT_PROPERTIES: &str = ".properties li";
pub const PRODUCT_DESCRIPTION: &str = ".description";

// =============================================================================
// Suggestion cards
// =============================================================================

pub const SUGGESTED_CARDS: &str = ".suggested article";
pub const SUGGESTED_IMAGE: &str = "img";
pub const SUGGESTED_NAME: &str = "h3";
pub const SUGGESTED_PRICE: &str = "b";
pub const SUGGESTED_DESCRIPTION: &str = "p";

// =============================================================================
// Review cards
// =============================================================================

pub const REVIEW_CARDS: &str = ".reviews article";
pub const REVIEW_FILLED_STARS: &str = ".rating .filled";
pub const REVIEW_AUTHOR_AVATAR: &str = ".author img";
pub const REVIEW_AUTHOR_NAME: &str = ".author span";
pub const REVIEW_DATE: &str = ".author i";
pub const REVIEW_TITLE: &str = ".title";
