//! Favorites wire format.
//!
//! The persisted value is a JSON array of `{id, title, image, description}`
//! objects. Blank input decodes to an empty collection. Anything else that
//! is not such an array is reported as `CodecError::Corrupt`; callers
//! decide whether that is fatal.

use thiserror::Error;
use tracing::warn;

use super::favorite::{FavoriteItem, FavoritesCollection};

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Persisted favorites are not a valid favorites list: {0}")]
    Corrupt(String),
    #[error("Failed to serialize favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serialize the full collection.
pub fn encode_collection(collection: &FavoritesCollection) -> Result<String, CodecError> {
    Ok(serde_json::to_string(collection)?)
}

/// Parse a persisted value.
///
/// Duplicate ids in stored data are collapsed to their first occurrence.
pub fn decode_collection(raw: &str) -> Result<FavoritesCollection, CodecError> {
    if raw.trim().is_empty() {
        return Ok(FavoritesCollection::new());
    }

    let items: Vec<FavoriteItem> =
        serde_json::from_str(raw).map_err(|e| CodecError::Corrupt(e.to_string()))?;

    let (collection, dropped) = FavoritesCollection::from_items(items);
    if dropped > 0 {
        warn!(dropped, "Collapsed duplicate favorite ids in stored data");
    }
    Ok(collection)
}
