//! Record operations over a [`DocumentStore`].
//!
//! Every operation is a self-contained load, compute, save cycle: the document is
//! loaded at the start, mutating operations save it at the end, and nothing is
//! kept in between. An operation either succeeds completely or returns an error
//! without having saved anything.
//!
//! There is no locking. When requests run concurrently, two inserts that load
//! before either saves compute the same next identifier, and the later save
//! discards the earlier one's record. Callers that need stronger guarantees must
//! serialize access themselves.

use serde_json::Value;
use tracing::warn;

use crate::{constants::ID_FIELD, DocumentStore, MockbaseError, RecordId, Result};

/// Record operations.
mod operations;

/// The record operations of one document store.
///
/// # Examples
///
/// ```no_run
/// use mockbase::{FileStore, Records};
///
/// # async fn example() -> mockbase::Result<()> {
/// let records = Records::new(FileStore::new("./data.json"));
///
/// let created = records.insert("notes", br#"{"title":"b"}"#).await?;
/// let id = created.id()?.to_string();
/// let found = records.find("notes", &id).await?;
/// assert_eq!(found, created);
///
/// records.delete("notes", &id).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Records<S> {
    /// Backing document store.
    store: S,
}

impl<S: DocumentStore> Records<S> {
    /// Wraps a document store.
    pub const fn new(store: S) -> Self {
        Self {
            store,
        }
    }

    /// The underlying document store.
    pub const fn store(&self) -> &S { &self.store }
}

/// Reads the identifier of a stored record.
///
/// # Errors
///
/// Returns [`MockbaseError::MalformedRecord`] naming `collection` if the value is
/// not an object carrying a numeric `id`.
fn stored_id(collection: &str, value: &Value) -> Result<RecordId> {
    value
        .get(ID_FIELD)
        .and_then(RecordId::from_value)
        .ok_or_else(|| {
            warn!(
                "Record without numeric id in collection '{}': {}",
                collection, value
            );
            MockbaseError::MalformedRecord {
                collection: collection.to_owned(),
                reason:     format!("record has no numeric '{}' field: {}", ID_FIELD, value),
            }
        })
}

/// Finds the position of the first record whose identifier equals `id`.
///
/// Records are scanned in document order, so if identifiers were ever duplicated
/// the earliest one shadows the rest.
fn position_of(collection: &str, records: &[Value], id: RecordId) -> Result<Option<usize>> {
    for (index, value) in records.iter().enumerate() {
        if stored_id(collection, value)? == id {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// The identifier the next inserted record would receive: the largest stored
/// identifier plus one, or [`RecordId::FIRST`] for an empty collection.
fn next_id_in(collection: &str, records: &[Value]) -> Result<RecordId> {
    let mut max = 0.0_f64;
    for value in records {
        let id = stored_id(collection, value)?.get();
        if id > max {
            max = id;
        }
    }
    RecordId::new(max)
        .map(RecordId::next)
        .ok_or_else(|| {
            MockbaseError::MalformedRecord {
                collection: collection.to_owned(),
                reason:     "largest identifier is not finite".to_owned(),
            }
        })
}

/// Attaches the collection name to errors raised by record-level accessors.
fn in_collection(collection: &str, err: MockbaseError) -> MockbaseError {
    match err {
        MockbaseError::MalformedRecord {
            reason, ..
        } => {
            MockbaseError::MalformedRecord {
                collection: collection.to_owned(),
                reason,
            }
        },
        other => other,
    }
}
