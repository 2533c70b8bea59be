//! # Mockbase
//!
//! The record store behind the Mockbase REST mock server. A single JSON document
//! is read as a set of named collections, each an array of records identified by
//! a numeric `id`; [`Records`] lists, finds, inserts, replaces and deletes those
//! records and writes the whole document back after every change.
//!
//! ```no_run
//! use mockbase::{FileStore, Records};
//!
//! # async fn example() -> mockbase::Result<()> {
//! let records = Records::new(FileStore::new("./data.json"));
//! let note = records.insert("notes", br#"{"title":"hello"}"#).await?;
//! println!("stored {}", note.id()?);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod document;
pub mod error;
pub mod id;
pub mod records;
pub mod store;

pub use document::{Document, Record};
pub use error::{MockbaseError, Result};
pub use id::RecordId;
pub use records::Records;
pub use store::{DocumentStore, FileStore, MemoryStore};
