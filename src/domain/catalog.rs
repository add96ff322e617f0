//! Static category catalog.
//!
//! There is no content backend: the browser offers a fixed set of
//! categories, and every category's detail view features the same
//! sample webtoon with a category-specific description.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::favorite::FavoriteItem;

/// Id of the sample webtoon featured on every detail view.
pub const FEATURED_WEBTOON_ID: &str = "1";

const FEATURED_WEBTOON_TITLE: &str = "Sample Webtoon";
const FEATURED_WEBTOON_IMAGE: &str = "https://example.com/sample-webtoon.jpg";

/// A browsable content category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub image: String,
}

impl Category {
    fn new(id: &str, title: &str, slug: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            image: format!("https://example.com/{slug}.jpg"),
        }
    }

    /// The webtoon shown on this category's detail view.
    pub fn featured_webtoon(&self) -> FavoriteItem {
        FavoriteItem::new(
            FEATURED_WEBTOON_ID,
            FEATURED_WEBTOON_TITLE,
            FEATURED_WEBTOON_IMAGE,
            format!("This is a sample webtoon in the {} category.", self.title),
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Categories in display order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Action", "action"),
        Category::new("2", "Romance", "romance"),
        Category::new("3", "Comedy", "comedy"),
    ]
}

/// Look a category up by id, falling back to a case-insensitive title match.
pub fn find_category(key: &str) -> Result<Category, CatalogError> {
    default_categories()
        .into_iter()
        .find(|c| c.id == key || c.title.eq_ignore_ascii_case(key))
        .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))
}
