use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use mockbase::{DocumentStore, Records};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{handlers, response::application_json};

/// Builds the application router over `records`.
///
/// Routes:
///
/// | Method                  | Path                   | Operation        |
/// |-------------------------|------------------------|------------------|
/// | `GET`                   | `/`                    | whole document   |
/// | `GET`                   | `/{collection}`        | list records     |
/// | `POST`                  | `/{collection}`        | insert a record  |
/// | `GET`                   | `/{collection}/{id}`   | find a record    |
/// | `PUT`, `PATCH`          | `/{collection}/{id}`   | replace a record |
/// | `DELETE`                | `/{collection}/{id}`   | delete a record  |
///
/// Every response allows any origin and is labelled `application/json`.
/// `OPTIONS` requests are answered as CORS preflights.
pub fn create_router<S: DocumentStore + 'static>(records: Arc<Records<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::DELETE, Method::POST, Method::PUT, Method::PATCH])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::read_document::<S>))
        .route(
            "/{collection}",
            get(handlers::list_records::<S>).post(handlers::create_record::<S>),
        )
        .route(
            "/{collection}/{id}",
            get(handlers::find_record::<S>)
                .put(handlers::replace_record::<S>)
                .patch(handlers::replace_record::<S>)
                .delete(handlers::delete_record::<S>),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    CONTENT_TYPE,
                    application_json(),
                ))
                .layer(cors),
        )
        .with_state(records)
}
