use tracing::{debug, trace, warn};

use crate::{Document, DocumentStore, MockbaseError, Record, RecordId, Result};
use super::{in_collection, next_id_in, position_of, Records};

impl<S: DocumentStore> Records<S> {
    /// Loads and returns the whole document.
    ///
    /// # Errors
    ///
    /// Propagates any load failure from the document store.
    pub async fn document(&self) -> Result<Document> {
        trace!("Loading whole document");
        self.store.load().await
    }

    /// Lists every record of a collection in document order.
    ///
    /// # Errors
    ///
    /// - [`MockbaseError::CollectionNotFound`] if the collection is absent or is not
    ///   an array.
    /// - [`MockbaseError::MalformedRecord`] if an element is not an object.
    /// - Any load failure from the document store.
    pub async fn list(&self, collection: &str) -> Result<Vec<Record>> {
        trace!("Listing collection '{}'", collection);
        let document = self.store.load().await?;
        let records = document
            .collection(collection)
            .ok_or_else(|| collection_not_found(collection))?;

        let records = records
            .iter()
            .cloned()
            .map(|value| Record::try_from(value).map_err(|e| in_collection(collection, e)))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Listed {} records from collection '{}'",
            records.len(),
            collection
        );
        Ok(records)
    }

    /// Returns the first record of `collection` whose identifier equals `id`.
    ///
    /// The identifier is parsed before anything is loaded, so an unparsable id
    /// fails without touching the store.
    ///
    /// # Errors
    ///
    /// - [`MockbaseError::InvalidRecordId`] if `id` is not a number.
    /// - [`MockbaseError::CollectionNotFound`] if the collection is absent.
    /// - [`MockbaseError::RecordNotFound`] if no record matches.
    /// - [`MockbaseError::MalformedRecord`] if a scanned record has no numeric id.
    pub async fn find(&self, collection: &str, id: &str) -> Result<Record> {
        trace!("Finding record '{}' in collection '{}'", id, collection);
        let id: RecordId = id.parse()?;
        let document = self.store.load().await?;
        let records = document
            .collection(collection)
            .ok_or_else(|| collection_not_found(collection))?;

        let Some(index) = position_of(collection, records, id)?
        else {
            return Err(record_not_found(collection, id));
        };
        let record = Record::try_from(records[index].clone()).map_err(|e| in_collection(collection, e))?;
        debug!("Found record {} in collection '{}'", id, collection);
        Ok(record)
    }

    /// Computes the identifier the next inserted record of `collection` would
    /// receive: the largest existing identifier plus one, or 1 if the collection
    /// is empty or absent.
    ///
    /// Nothing is reserved. Two callers asking before either inserts get the same
    /// answer.
    ///
    /// # Errors
    ///
    /// - [`MockbaseError::MalformedRecord`] if a record has no numeric id.
    /// - Any load failure from the document store.
    pub async fn next_id(&self, collection: &str) -> Result<RecordId> {
        trace!("Computing next id for collection '{}'", collection);
        let document = self.store.load().await?;
        let records = document
            .collection(collection)
            .map(Vec::as_slice)
            .unwrap_or_default();
        next_id_in(collection, records)
    }

    /// Parses `body` as a record, assigns it the next identifier, appends it to
    /// `collection` (creating the collection if needed) and saves the document.
    ///
    /// Any `id` present in the body is replaced by the assigned one. Returns the
    /// record exactly as stored.
    ///
    /// # Errors
    ///
    /// - [`MockbaseError::InvalidBody`] if the body is not a JSON object.
    /// - [`MockbaseError::InvalidCollection`] if the member exists but is not an
    ///   array.
    /// - [`MockbaseError::MalformedRecord`] if an existing record has no numeric id.
    /// - Any load or save failure from the document store.
    pub async fn insert(&self, collection: &str, body: &[u8]) -> Result<Record> {
        trace!("Inserting record into collection '{}'", collection);
        let mut record = Record::from_body(body).map_err(|e| {
            warn!("Rejected insert into '{}': {}", collection, e);
            e
        })?;

        let mut document = self.store.load().await?;
        let id = next_id_in(
            collection,
            document
                .collection(collection)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        )?;
        record.set_id(id);

        document
            .collection_or_create(collection)?
            .push(record.clone().into_value());
        self.store.save(&document).await?;
        debug!("Inserted record {} into collection '{}'", id, collection);
        Ok(record)
    }

    /// Replaces the record of `collection` whose identifier equals `id` with the
    /// record parsed from `body`.
    ///
    /// This is a full replacement: fields of the old record missing from `body`
    /// are dropped. The stored `id` is always the path `id`, whatever the body
    /// says. The record keeps its position; no other record changes.
    ///
    /// # Errors
    ///
    /// - [`MockbaseError::InvalidRecordId`] if `id` is not a number.
    /// - [`MockbaseError::InvalidBody`] if the body is not a JSON object.
    /// - [`MockbaseError::CollectionNotFound`] or [`MockbaseError::RecordNotFound`]
    ///   if there is nothing to replace; nothing is saved in that case.
    /// - Any load or save failure from the document store.
    pub async fn replace(&self, collection: &str, id: &str, body: &[u8]) -> Result<Record> {
        trace!("Replacing record '{}' in collection '{}'", id, collection);
        let id: RecordId = id.parse()?;
        let mut record = Record::from_body(body).map_err(|e| {
            warn!("Rejected replacement of {} in '{}': {}", id, collection, e);
            e
        })?;
        record.set_id(id);

        let mut document = self.store.load().await?;
        let records = document
            .collection_mut(collection)
            .ok_or_else(|| collection_not_found(collection))?;
        let Some(index) = position_of(collection, records, id)?
        else {
            return Err(record_not_found(collection, id));
        };
        records[index] = record.clone().into_value();

        self.store.save(&document).await?;
        debug!("Replaced record {} in collection '{}'", id, collection);
        Ok(record)
    }

    /// Removes the record of `collection` whose identifier equals `id` and saves
    /// the document. Later records shift down one position.
    ///
    /// Returns the removed record.
    ///
    /// # Errors
    ///
    /// - [`MockbaseError::InvalidRecordId`] if `id` is not a number.
    /// - [`MockbaseError::CollectionNotFound`] or [`MockbaseError::RecordNotFound`]
    ///   if there is nothing to delete; nothing is saved in that case.
    /// - Any load or save failure from the document store.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<Record> {
        trace!("Deleting record '{}' from collection '{}'", id, collection);
        let id: RecordId = id.parse()?;

        let mut document = self.store.load().await?;
        let records = document
            .collection_mut(collection)
            .ok_or_else(|| collection_not_found(collection))?;
        let Some(index) = position_of(collection, records, id)?
        else {
            return Err(record_not_found(collection, id));
        };
        let removed = Record::try_from(records.remove(index)).map_err(|e| in_collection(collection, e))?;

        self.store.save(&document).await?;
        debug!("Deleted record {} from collection '{}'", id, collection);
        Ok(removed)
    }
}

/// Error for a collection that is absent or not an array.
fn collection_not_found(collection: &str) -> MockbaseError {
    debug!("Collection '{}' not found", collection);
    MockbaseError::CollectionNotFound {
        name: collection.to_owned(),
    }
}

/// Error for an identifier that matches no record.
fn record_not_found(collection: &str, id: RecordId) -> MockbaseError {
    debug!("Record {} not found in collection '{}'", id, collection);
    MockbaseError::RecordNotFound {
        id:         id.to_string(),
        collection: collection.to_owned(),
    }
}
