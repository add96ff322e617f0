//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::domain::votes::VoteTally;
use crate::ports::local_store::validate_key;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    backend = ?config.storage.backend,
    key = %config.storage.favorites_key,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Load configuration, falling back to defaults when the file is absent.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();
  if path.exists() {
    load_config(path)
  } else {
    let config = AppConfig::default();
    validate_config(&config)?;
    Ok(config)
  }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).context("Failed to parse config TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.name.trim().is_empty(),
    "app.name must not be empty"
  );
  anyhow::ensure!(
    !config.app.log_level.trim().is_empty(),
    "app.log_level must not be empty"
  );

  validate_key(&config.storage.favorites_key).with_context(|| {
    format!(
      "storage.favorites_key must match [A-Za-z0-9_-]+, got {:?}",
      config.storage.favorites_key
    )
  })?;
  anyhow::ensure!(
    !config.storage.data_dir.trim().is_empty(),
    "storage.data_dir must not be empty"
  );

  VoteTally::new(config.votes.candidates.iter().cloned())
    .context("Invalid votes.candidates")?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::StoreBackend;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_missing_file_yields_defaults() {
    let config = load_or_default("nonexistent.toml").unwrap();
    assert_eq!(config.storage.favorites_key, "favorites");
    assert_eq!(config.storage.backend, StoreBackend::File);
    assert_eq!(config.votes.candidates.len(), 3);
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let config = parse_config(
      r#"
      [storage]
      backend = "memory"
      "#,
    )
    .unwrap();
    assert_eq!(config.storage.backend, StoreBackend::Memory);
    assert_eq!(config.storage.data_dir, "data");
    assert_eq!(config.app.log_level, "info");
  }

  #[test]
  fn test_full_file() {
    let config = parse_config(
      r#"
      [app]
      name = "shelf"
      log_level = "debug"

      [storage]
      backend = "file"
      data_dir = "/tmp/shelf"
      favorites_key = "favs_v1"

      [votes]
      candidates = ["One", "Two"]
      "#,
    )
    .unwrap();
    assert_eq!(config.app.name, "shelf");
    assert_eq!(config.storage.favorites_key, "favs_v1");
    assert_eq!(config.votes.candidates, ["One", "Two"]);
  }

  #[test]
  fn test_rejects_bad_key() {
    let result = parse_config(
      r#"
      [storage]
      favorites_key = "../favorites"
      "#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn test_rejects_duplicate_candidates() {
    let result = parse_config(
      r#"
      [votes]
      candidates = ["A", "A"]
      "#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn test_rejects_unknown_backend() {
    let result = parse_config(
      r#"
      [storage]
      backend = "sqlite"
      "#,
    );
    assert!(result.is_err());
  }
}
