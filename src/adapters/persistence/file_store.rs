//! File Store - One JSON File per Key
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go to a temporary
//! file first and are then renamed over the target, so a reader only
//! ever sees the old or the new value, never a partial write. Each write
//! gets its own temporary name, so concurrent writers never share one.
//!
//! Reads are byte-level: a value that is not valid UTF-8 is handed back
//! lossily converted, leaving the decision about its contents to the caller.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::ports::local_store::{LocalStore, StoreError, validate_key};

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// File-backed `LocalStore`.
pub struct FileStore {
    /// Directory holding one file per key.
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`, creating the directory if needed.
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).await?;
        info!(path = %data_dir.display(), "File store ready");
        Ok(Self { data_dir })
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// `<key>.json.<pid>.<seq>.tmp`, unique per write within the process.
    fn tmp_path(&self, key: &str) -> PathBuf {
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        self.data_dir
            .join(format!("{key}.json.{}.{seq}.tmp", std::process::id()))
    }
}

#[async_trait]
impl LocalStore for FileStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let path = self.value_path(key);

        match fs::read(&path).await {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "Value read");
                let content = String::from_utf8(bytes).unwrap_or_else(|e| {
                    warn!(path = %path.display(), error = %e, "Stored value is not valid UTF-8");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                });
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored value");
                Ok(None)
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let tmp = self.tmp_path(key);
        let path = self.value_path(key);

        // Atomic rename
        let written = match fs::write(&tmp, value).await {
            Ok(()) => fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::Io(e));
        }

        debug!(path = %path.display(), "Value written");
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        let probe = self.data_dir.join(".health_check");
        let result = fs::write(&probe, b"ok").await;
        let _ = fs::remove_file(&probe).await;
        result.is_ok()
    }
}
