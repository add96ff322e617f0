//! Local Store Port - Durable Key-Value Interface
//!
//! The favorites core only needs a narrow string-to-string store:
//! read a key, overwrite a key. Values are opaque serialized text;
//! the store never interprets them.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
  /// Underlying I/O failed.
  #[error("Store I/O error: {0}")]
  Io(#[from] std::io::Error),
  /// Key cannot be mapped onto the backing medium.
  #[error("Invalid store key: {0:?}")]
  InvalidKey(String),
  /// Store is reachable but refused the operation.
  #[error("Store unavailable: {0}")]
  Unavailable(String),
}

/// Trait for durable, asynchronous key-value storage.
///
/// `set` is a full overwrite: after it returns `Ok`, a subsequent `get`
/// for the same key observes exactly the written value.
#[async_trait]
pub trait LocalStore: Send + Sync + 'static {
  /// Read the value stored under `key`, `None` if never written.
  async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

  /// Replace the value stored under `key`.
  async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

  /// Check whether the store can currently accept writes.
  async fn is_healthy(&self) -> bool;
}

/// Keys are restricted to `[A-Za-z0-9_-]` so every adapter can use them
/// verbatim (file names included).
pub fn validate_key(key: &str) -> Result<(), StoreError> {
  let valid = !key.is_empty()
    && key
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
  if valid {
    Ok(())
  } else {
    Err(StoreError::InvalidKey(key.to_string()))
  }
}
