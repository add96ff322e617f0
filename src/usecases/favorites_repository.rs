//! Favorites Repository - Single Source of Truth for Favorites
//!
//! Owns the favorites collection persisted under one `LocalStore` key:
//! - Lenient load (absent or corrupt value reads as empty)
//! - Idempotent add/remove with write-through persistence
//! - All operations serialized per repository instance
//!
//! The mutex guards the last confirmed collection. Holding it across the
//! store call means at most one write is in flight and a load can never
//! interleave with a write. Mutations build on the confirmed collection,
//! so two rapid toggles cannot lose an update.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::domain::codec::{self, CodecError};
use crate::domain::favorite::{FavoriteItem, FavoritesCollection};
use crate::ports::local_store::{LocalStore, StoreError};

/// Failure surfaced at the repository boundary.
#[derive(Debug, Error)]
pub enum FavoritesError {
  /// The store could not be read or written.
  #[error("Favorites storage unavailable (key {key:?}): {source}")]
  StorageUnavailable {
    key: String,
    #[source]
    source: StoreError,
  },
  /// The stored value is not a favorites list.
  #[error("Stored favorites under {key:?} are corrupt: {reason}")]
  CorruptData { key: String, reason: String },
  /// The item cannot be stored.
  #[error("Invalid favorite item: {0}")]
  InvalidItem(String),
  /// The collection could not be encoded.
  #[error("Failed to serialize favorites: {0}")]
  Serialization(#[source] CodecError),
}

/// Write-through favorites repository over a `LocalStore`.
pub struct FavoritesRepository<S: LocalStore + ?Sized = dyn LocalStore> {
  /// Backing store.
  store: Arc<S>,
  /// Storage key of the collection.
  key: String,
  /// Last collection confirmed by a read or a successful write.
  confirmed: Mutex<Option<FavoritesCollection>>,
}

impl<S: LocalStore + ?Sized> FavoritesRepository<S> {
  /// Create a repository storing its collection under `key`.
  pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
    Self {
      store,
      key: key.into(),
      confirmed: Mutex::new(None),
    }
  }

  /// Storage key of the collection.
  pub fn key(&self) -> &str {
    &self.key
  }

  /// Read the persisted collection.
  ///
  /// A missing or blank value is an empty collection. A value that does
  /// not decode is logged as corrupt and also read as empty.
  #[instrument(skip(self), fields(key = %self.key))]
  pub async fn load(&self) -> Result<FavoritesCollection, FavoritesError> {
    let mut confirmed = self.confirmed.lock().await;
    let collection = self.read_store().await?;
    *confirmed = Some(collection.clone());
    info!(count = collection.len(), "Favorites loaded");
    Ok(collection)
  }

  /// Append `item` unless its id is already favorited.
  ///
  /// Returns the collection as persisted. On a storage failure nothing
  /// changes, in the store or in memory.
  #[instrument(skip(self, item), fields(key = %self.key, id = %item.id))]
  pub async fn add(&self, item: FavoriteItem) -> Result<FavoritesCollection, FavoritesError> {
    if item.id.trim().is_empty() {
      return Err(FavoritesError::InvalidItem(
        "favorite id must not be empty".to_string(),
      ));
    }

    let mut confirmed = self.confirmed.lock().await;
    let current = self.current(&mut confirmed).await?;

    if current.contains(&item.id) {
      debug!("Already a favorite, nothing to persist");
      return Ok(current);
    }

    let next = current.with_item(item);
    self.persist(&next).await?;
    *confirmed = Some(next.clone());

    info!(count = next.len(), "Favorite added");
    Ok(next)
  }

  /// Remove every entry with `id`; removing an absent id succeeds.
  #[instrument(skip(self), fields(key = %self.key))]
  pub async fn remove(&self, id: &str) -> Result<FavoritesCollection, FavoritesError> {
    let mut confirmed = self.confirmed.lock().await;
    let current = self.current(&mut confirmed).await?;

    if !current.contains(id) {
      debug!("Not a favorite, nothing to persist");
      return Ok(current);
    }

    let next = current.without(id);
    self.persist(&next).await?;
    *confirmed = Some(next.clone());

    info!(count = next.len(), "Favorite removed");
    Ok(next)
  }

  /// Last confirmed collection, if any operation has completed yet.
  pub async fn snapshot(&self) -> Option<FavoritesCollection> {
    self.confirmed.lock().await.clone()
  }

  /// Check if the backing store accepts writes.
  pub async fn is_healthy(&self) -> bool {
    self.store.is_healthy().await
  }

  /// Confirmed collection, reading the store on first use.
  async fn current(
    &self,
    confirmed: &mut Option<FavoritesCollection>,
  ) -> Result<FavoritesCollection, FavoritesError> {
    if let Some(collection) = confirmed {
      return Ok(collection.clone());
    }
    let collection = self.read_store().await?;
    *confirmed = Some(collection.clone());
    Ok(collection)
  }

  async fn read_store(&self) -> Result<FavoritesCollection, FavoritesError> {
    let raw = self
      .store
      .get(&self.key)
      .await
      .map_err(|source| self.unavailable(source))?;

    let Some(raw) = raw else {
      debug!("No stored favorites, starting empty");
      return Ok(FavoritesCollection::new());
    };

    match codec::decode_collection(&raw) {
      Ok(collection) => Ok(collection),
      Err(e) => {
        let corrupt = FavoritesError::CorruptData {
          key: self.key.clone(),
          reason: e.to_string(),
        };
        warn!(error = %corrupt, bytes = raw.len(), "Discarding unreadable favorites");
        Ok(FavoritesCollection::new())
      }
    }
  }

  async fn persist(&self, collection: &FavoritesCollection) -> Result<(), FavoritesError> {
    let encoded = codec::encode_collection(collection).map_err(FavoritesError::Serialization)?;
    self
      .store
      .set(&self.key, &encoded)
      .await
      .map_err(|source| self.unavailable(source))
  }

  fn unavailable(&self, source: StoreError) -> FavoritesError {
    warn!(key = %self.key, error = %source, "Favorites storage operation failed");
    FavoritesError::StorageUnavailable {
      key: self.key.clone(),
      source,
    }
  }
}
