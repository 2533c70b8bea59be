//! Route handlers. Each one performs a single record operation and turns its
//! outcome into a JSON response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mockbase::{DocumentStore, MockbaseError, Records};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::response::{empty_response, error_status, json_response, Access};

/// Shared handler state: the record operations over the configured store.
pub type AppState<S> = State<Arc<Records<S>>>;

/// `GET /`: the whole document.
pub async fn read_document<S: DocumentStore>(State(records): AppState<S>) -> Response {
    match records.document().await {
        Ok(document) => json_response(StatusCode::OK, &document.to_value()),
        Err(e) => {
            warn!("Failed to load document: {}", e);
            empty_response(StatusCode::NOT_FOUND)
        },
    }
}

/// `GET /{collection}`: every record of the collection.
pub async fn list_records<S: DocumentStore>(
    State(records): AppState<S>,
    Path(collection): Path<String>,
) -> Response {
    match records.list(&collection).await {
        Ok(list) => {
            let list = Value::Array(list.into_iter().map(Value::from).collect());
            json_response(StatusCode::OK, &list)
        },
        Err(e) => failure(&e, Access::Read),
    }
}

/// `GET /{collection}/{id}`: a single record.
pub async fn find_record<S: DocumentStore>(
    State(records): AppState<S>,
    Path((collection, id)): Path<(String, String)>,
) -> Response {
    match records.find(&collection, &id).await {
        Ok(record) => json_response(StatusCode::OK, &record.into_value()),
        Err(e) => failure(&e, Access::Read),
    }
}

/// `POST /{collection}`: append the body as a new record.
pub async fn create_record<S: DocumentStore>(
    State(records): AppState<S>,
    Path(collection): Path<String>,
    body: Bytes,
) -> Response {
    match records.insert(&collection, &body).await {
        Ok(record) => json_response(StatusCode::CREATED, &record.into_value()),
        Err(e) => failure(&e, Access::Write),
    }
}

/// `PUT /{collection}/{id}` and `PATCH /{collection}/{id}`: replace a record.
pub async fn replace_record<S: DocumentStore>(
    State(records): AppState<S>,
    Path((collection, id)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    match records.replace(&collection, &id, &body).await {
        Ok(record) => json_response(StatusCode::OK, &record.into_value()),
        Err(e) => failure(&e, Access::Write),
    }
}

/// `DELETE /{collection}/{id}`: remove a record and echo it back.
pub async fn delete_record<S: DocumentStore>(
    State(records): AppState<S>,
    Path((collection, id)): Path<(String, String)>,
) -> Response {
    match records.delete(&collection, &id).await {
        Ok(record) => json_response(StatusCode::OK, &record.into_value()),
        Err(e) => failure(&e, Access::Write),
    }
}

/// Any path no route matches.
pub async fn not_found() -> Response { empty_response(StatusCode::NOT_FOUND) }

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed() -> Response { empty_response(StatusCode::METHOD_NOT_ALLOWED) }

/// Logs a failed operation and answers with the status it maps to.
fn failure(err: &MockbaseError, access: Access) -> Response {
    let status = error_status(err, access);
    if status.is_server_error() {
        error!("Request failed: {}", err);
    }
    else {
        debug!("Request rejected with {}: {}", status, err);
    }
    empty_response(status)
}
