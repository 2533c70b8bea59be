use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
        MutexGuard,
        PoisonError,
    },
};

use async_trait::async_trait;
use tracing::{debug, trace, warn};

use crate::{Document, Result};
use super::DocumentStore;

/// Document store that keeps the raw JSON text in memory.
///
/// It behaves like [`super::FileStore`]: the text is parsed on every load and
/// replaced on every save, so malformed contents and a missing document fail the
/// same way. It exists so record operations can be exercised without a
/// filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Serialized document, or `None` when no document exists.
    contents:  Mutex<Option<String>>,
    /// When set, every save fails with a permission error.
    read_only: AtomicBool,
}

impl MemoryStore {
    /// Creates a store holding an empty document (`{}`).
    pub fn new() -> Self { Self::with_json("{}") }

    /// Creates a store holding the given raw text. The text is not validated
    /// until it is loaded.
    pub fn with_json<T>(text: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            contents:  Mutex::new(Some(text.into())),
            read_only: AtomicBool::new(false),
        }
    }

    /// Creates a store with no document at all; loading it fails like a missing
    /// file.
    pub fn missing() -> Self { Self::default() }

    /// The current raw text, if any.
    pub fn contents(&self) -> Option<String> { self.lock().clone() }

    /// Makes subsequent saves fail (`true`) or succeed again (`false`).
    pub fn set_read_only(&self, read_only: bool) { self.read_only.store(read_only, Ordering::SeqCst); }

    /// Locks the contents, recovering the data if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, Option<String>> { self.contents.lock().unwrap_or_else(PoisonError::into_inner) }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self) -> Result<Document> {
        trace!("Loading document from memory");
        let Some(text) = self.contents()
        else {
            warn!("No in-memory document to load");
            return Err(io::Error::new(io::ErrorKind::NotFound, "no document in memory").into());
        };
        let document = Document::from_json(&text)?;
        debug!("Loaded {} collections from memory", document.len());
        Ok(document)
    }

    async fn save(&self, document: &Document) -> Result<()> {
        trace!("Saving document to memory");
        if self.read_only.load(Ordering::SeqCst) {
            warn!("Rejecting save: in-memory store is read-only");
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "in-memory store is read-only").into());
        }
        let text = document.to_json_pretty()?;
        *self.lock() = Some(text);
        Ok(())
    }
}
