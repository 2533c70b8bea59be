use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs as tokio_fs, io::AsyncWriteExt as _};
use tracing::{debug, error, trace};

use crate::{Document, Result};
use super::DocumentStore;

/// Document store backed by a single JSON file.
///
/// The path is injected at construction; the file itself is only touched by
/// [`load`](DocumentStore::load) and [`save`](DocumentStore::save).
///
/// # Examples
///
/// ```no_run
/// use mockbase::{DocumentStore, FileStore};
///
/// # async fn example() -> mockbase::Result<()> {
/// let store = FileStore::new("./data.json");
/// let document = store.load().await?;
/// store.save(&document).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path of the backing JSON file.
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the file at `path`. The file is not opened until the
    /// first load.
    pub fn new<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Writes a brand-new backing file containing `document` and returns a store
    /// for it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MockbaseError::Io`] with kind `AlreadyExists` if a file is
    /// already present at `path`; an existing document is never overwritten.
    pub async fn create<P>(path: P, document: &Document) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        trace!("Creating new backing file at {:?}", path);
        let content = document.to_json_pretty()?;

        let mut file = tokio_fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                error!("Failed to create backing file {:?}: {}", path, e);
                e
            })?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        debug!(
            "Backing file {:?} created with {} collections",
            path,
            document.len()
        );

        Ok(Self {
            path,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path { &self.path }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn load(&self) -> Result<Document> {
        trace!("Loading document from {:?}", self.path);
        let content = tokio_fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Failed to read backing file {:?}: {}", self.path, e);
            e
        })?;
        let document = Document::from_json(&content).map_err(|e| {
            error!("Backing file {:?} is not a JSON object: {}", self.path, e);
            e
        })?;
        debug!(
            "Loaded {} collections from {:?}",
            document.len(),
            self.path
        );
        Ok(document)
    }

    async fn save(&self, document: &Document) -> Result<()> {
        trace!("Saving document to {:?}", self.path);
        let content = document.to_json_pretty()?;
        tokio_fs::write(&self.path, content.as_bytes())
            .await
            .map_err(|e| {
                error!("Failed to write backing file {:?}: {}", self.path, e);
                e
            })?;
        debug!("Saved {} bytes to {:?}", content.len(), self.path);
        Ok(())
    }
}
