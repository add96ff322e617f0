//! Favorite domain types.
//!
//! `FavoritesCollection` is an ordered list with set semantics on `id`:
//! insertion order is kept for display, but no two entries share an id.
//! Every mutation returns a new collection; nothing here touches storage.

use serde::{Deserialize, Serialize};

/// Stable content identifier.
pub type ItemId = String;

/// A favorited content entry.
///
/// Field names are part of the persisted format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Display name.
    pub title: String,
    /// Image URI (display only).
    pub image: String,
    /// Free-form description (display only).
    pub description: String,
}

impl FavoriteItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            description: description.into(),
        }
    }
}

/// Ordered, id-unique sequence of favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoritesCollection {
    items: Vec<FavoriteItem>,
}

impl FavoritesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from raw items, keeping the first entry per id.
    ///
    /// Returns the collection and the number of dropped duplicates.
    pub fn from_items(items: Vec<FavoriteItem>) -> (Self, usize) {
        let mut collection = Self::new();
        let mut dropped = 0;
        for item in items {
            if collection.contains(&item.id) {
                dropped += 1;
            } else {
                collection.items.push(item);
            }
        }
        (collection, dropped)
    }

    /// Membership check by id (linear scan).
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&FavoriteItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Collection with `item` appended, or an unchanged clone if its id
    /// is already present.
    #[must_use]
    pub fn with_item(&self, item: FavoriteItem) -> Self {
        if self.contains(&item.id) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(item);
        Self { items }
    }

    /// Collection with every entry matching `id` filtered out.
    #[must_use]
    pub fn without(&self, id: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        }
    }

    pub fn items(&self) -> &[FavoriteItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a FavoritesCollection {
    type Item = &'a FavoriteItem;
    type IntoIter = std::slice::Iter<'a, FavoriteItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pure membership check, usable without a repository handle.
pub fn is_favorite(collection: &FavoritesCollection, id: &str) -> bool {
    collection.contains(id)
}
