//! Body extractors: the product card, suggestion cards and review cards.
//!
//! Each extractor reads the shared document independently and either returns
//! a complete value or the first error it meets.

pub mod product;
pub mod reviews;
pub mod suggested;

pub use product::{
    extract_description, extract_images, extract_product, extract_properties, extract_tags,
};
pub use reviews::extract_reviews;
pub use suggested::extract_suggested;
