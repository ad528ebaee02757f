pub mod collection;

pub use collection::Collection;

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::models::{DesignsDocument, HistoryDocument, SchedulesDocument};

/// A JSON document persisted as one file
pub trait Document: Serialize + DeserializeOwned + Send + 'static {
    /// File name inside the data directory
    const FILE_NAME: &'static str;

    /// Document written on first run and served when the file is unreadable
    fn empty() -> Self;
}

/// Failure reading or writing a collection file
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to create data directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read and parse a document
///
/// `Ok(None)` means the file does not exist. A file that exists but cannot
/// be read or does not match the document schema is an error.
pub fn read_document<D: Document>(path: &Path) -> Result<Option<D>, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Read and parse a document for serving
///
/// Returns `None` for a missing file, a parse error or any other I/O failure;
/// the cause is logged and never propagated.
pub fn load_document<D: Document>(path: &Path) -> Option<D> {
    match read_document(path) {
        Ok(Some(doc)) => Some(doc),
        Ok(None) => {
            tracing::warn!("{} does not exist", path.display());
            None
        }
        Err(e) => {
            tracing::warn!("Error loading document: {}", e);
            None
        }
    }
}

/// Pretty-print a document and overwrite the file
pub fn save_document<D: Document>(path: &Path, document: &D) -> Result<(), StoreError> {
    let rendered =
        serde_json::to_string_pretty(document).map_err(|source| StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    std::fs::write(path, rendered).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Create the file with `empty` if it does not exist yet
pub fn ensure_document<D: Document>(path: &Path, empty: D) -> Result<(), StoreError> {
    if path.exists() {
        return Ok(());
    }
    tracing::info!("Creating {}", path.display());
    save_document(path, &empty)
}

/// The three collections backing the API
#[derive(Debug)]
pub struct RecordStore {
    pub designs: Collection<DesignsDocument>,
    pub schedules: Collection<SchedulesDocument>,
    pub history: Collection<HistoryDocument>,
}

/// Store handle type (Arc-wrapped for sharing across handlers)
pub type Store = Arc<RecordStore>;

/// Open or create the collection files under `data_dir`
pub fn open_store(data_dir: impl AsRef<Path>) -> Result<Store, StoreError> {
    let data_dir = data_dir.as_ref();
    tracing::info!("Opening data directory at: {:?}", data_dir);

    if !data_dir.exists() {
        std::fs::create_dir_all(data_dir).map_err(|source| {
            tracing::error!("Failed to create data directory: {}", source);
            StoreError::CreateDir {
                path: data_dir.to_path_buf(),
                source,
            }
        })?;
    }

    let store = RecordStore {
        designs: Collection::new(data_dir),
        schedules: Collection::new(data_dir),
        history: Collection::new(data_dir),
    };

    ensure_document(store.designs.path(), DesignsDocument::empty())?;
    ensure_document(store.schedules.path(), SchedulesDocument::empty())?;
    ensure_document(store.history.path(), HistoryDocument::empty())?;

    tracing::info!("Data files initialized successfully");

    Ok(Arc::new(store))
}
