use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::store::{load_document, read_document, save_document, Document};

/// Handle to one JSON collection file
///
/// Reads go straight to disk. Writes hold `write_lock` for the whole
/// load-modify-save cycle so concurrent writers cannot lose updates.
#[derive(Debug)]
pub struct Collection<D> {
    path: Arc<PathBuf>,
    write_lock: Mutex<()>,
    _document: PhantomData<fn() -> D>,
}

impl<D: Document> Collection<D> {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: Arc::new(data_dir.join(D::FILE_NAME)),
            write_lock: Mutex::new(()),
            _document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, `None` if missing or unreadable
    pub async fn load(&self) -> Option<D> {
        let path = self.path.clone();
        match tokio::task::spawn_blocking(move || load_document::<D>(&path)).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!("Load task for {} failed: {:?}", self.path.display(), e);
                None
            }
        }
    }

    /// Load the document, substituting the empty default when unreadable
    pub async fn load_or_empty(&self) -> D {
        self.load().await.unwrap_or_else(D::empty)
    }

    /// Overwrite the whole document
    pub async fn replace(&self, document: D) -> Result<D> {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<D> {
            save_document(&path, &document)?;
            Ok(document)
        })
        .await?
    }

    /// Read-modify-write under the collection lock
    ///
    /// A missing file starts from the empty document. A file that exists but
    /// cannot be read or parsed is left untouched and reported as a storage
    /// error. Nothing is written when `f` returns an error.
    pub async fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut D) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<T> {
            let mut document = read_document::<D>(&path)?.unwrap_or_else(D::empty);
            let output = f(&mut document)?;
            save_document(&path, &document)?;
            Ok(output)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{HistoryDocument, HistoryRecord, SchedulesDocument};
    use chrono::Utc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_or_empty_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let collection: Collection<SchedulesDocument> = Collection::new(dir.path());

        assert!(collection.load().await.is_none());
        assert!(collection.load_or_empty().await.schedules.is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let collection: Collection<SchedulesDocument> = Collection::new(dir.path());

        let result = collection
            .update(|_doc| -> Result<()> { Err(AppError::ScheduleNotFound) })
            .await;

        assert!(matches!(result, Err(AppError::ScheduleNotFound)));
        assert!(!collection.path().exists());
    }

    #[tokio::test]
    async fn test_update_keeps_unparseable_file() {
        let dir = TempDir::new().unwrap();
        let collection: Collection<HistoryDocument> = Collection::new(dir.path());
        let original = r#"{"history": [{"id": "keep", "status": "archived"}]}"#;
        std::fs::write(collection.path(), original).unwrap();

        let result = collection
            .update(|doc| {
                doc.history.clear();
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(std::fs::read_to_string(collection.path()).unwrap(), original);
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let collection: Arc<Collection<HistoryDocument>> = Arc::new(Collection::new(dir.path()));

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let collection = collection.clone();
                tokio::spawn(async move {
                    collection
                        .update(move |doc| {
                            doc.history.push(HistoryRecord::pending_instagram(
                                format!("d{}", i),
                                None,
                                Utc::now(),
                            ));
                            Ok(())
                        })
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(collection.load().await.unwrap().history.len(), 20);
    }
}
