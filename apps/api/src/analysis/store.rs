//! Result Store: the single "latest analysis" slot.
//!
//! The backing file is a JSON object of key → value. The latest successful
//! analysis lives under `LATEST_RESULTS_KEY` and is overwritten on every new
//! analysis. Other keys in the file are preserved.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::analysis::models::StoredAnalysis;

/// Well-known key of the latest analysis.
pub const LATEST_RESULTS_KEY: &str = "analysisResults";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub struct ResultStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the backing file.
    write_lock: Mutex<()>,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the latest slot with `record`.
    ///
    /// A backing file that is not a JSON object is replaced rather than
    /// blocking the write.
    pub async fn save_latest(&self, record: &StoredAnalysis) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut document = match self.load_document().await {
            Ok(document) => document,
            Err(StoreError::Json(e)) => {
                warn!(
                    "Store file {} is not a JSON object ({e}); starting a new document",
                    self.path.display()
                );
                Map::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(LATEST_RESULTS_KEY.to_string(), serde_json::to_value(record)?);
        let bytes = serde_json::to_vec_pretty(&document)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes)).await??;

        info!(
            "Saved latest analysis (role '{}', overall {}) to {}",
            record.job_role,
            record.analysis.overall_score,
            self.path.display()
        );
        Ok(())
    }

    /// Reads the latest slot. `None` if nothing has been stored yet.
    pub async fn load_latest(&self) -> Result<Option<StoredAnalysis>, StoreError> {
        let mut document = self.load_document().await?;
        match document.remove(LATEST_RESULTS_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    async fn load_document(&self) -> Result<Map<String, Value>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {} does not exist yet", self.path.display());
                Ok(Map::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes `bytes` to a temp file next to `path`, then renames it over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
