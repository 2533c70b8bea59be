//! The document store: loads the backing JSON document and writes it back.
//!
//! Every call to [`DocumentStore::load`] reads the backing storage again; nothing
//! is cached between operations, so edits made to the file by hand are picked up
//! on the next request.

use async_trait::async_trait;

use crate::{Document, Result};

/// File-backed document store.
pub mod file;
/// In-memory document store.
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Backing storage for the whole document.
///
/// Implementations hand out a fresh, independently owned [`Document`] on every
/// `load` and replace the stored document wholesale on every `save`. There is no
/// locking: two operations that load before either saves will race, and the last
/// save wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads and parses the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MockbaseError::Io`] if the backing storage is missing or
    /// unreadable, and [`crate::MockbaseError::Json`] if its contents are not a
    /// JSON object.
    async fn load(&self) -> Result<Document>;

    /// Overwrites the backing storage with `document`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MockbaseError::Io`] if the write cannot complete.
    async fn save(&self, document: &Document) -> Result<()>;
}
