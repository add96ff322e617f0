//! Configuration Module - TOML-based App Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! Every field has a default, so a missing file or a partial file
//! still yields a usable configuration.

pub mod loader;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// App identity and logging.
  pub app: AppSection,
  /// Favorites persistence.
  pub storage: StorageConfig,
  /// Session vote candidates.
  pub votes: VotesConfig,
}

/// App identity configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSection {
  /// Human-readable app name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  pub log_level: String,
}

/// Which `LocalStore` adapter backs the favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
  /// One JSON file per key under `data_dir`.
  #[default]
  File,
  /// Process memory; nothing survives the process.
  Memory,
}

/// Persistence configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  /// Store adapter.
  pub backend: StoreBackend,
  /// Directory for the file store.
  pub data_dir: String,
  /// Key the favorites collection is stored under.
  pub favorites_key: String,
}

/// Vote screen configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VotesConfig {
  /// Candidate labels, in display order.
  pub candidates: Vec<String>,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      backend: StoreBackend::default(),
      data_dir: default_data_dir(),
      favorites_key: default_favorites_key(),
    }
  }
}

impl Default for VotesConfig {
  fn default() -> Self {
    Self {
      candidates: crate::domain::votes::DEFAULT_CANDIDATES
        .iter()
        .map(|c| (*c).to_string())
        .collect(),
    }
  }
}

// Default value functions

fn default_name() -> String {
  "webtoon-favorites".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_data_dir() -> String {
  "data".to_string()
}

fn default_favorites_key() -> String {
  "favorites".to_string()
}
