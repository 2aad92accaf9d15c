//! HTTP dispatcher for the book catalog.
//!
//! # Design
//! Routes map one-to-one onto `Catalog` handlers. Each route extracts the
//! path, query, or body, takes the catalog lock for the whole handler call,
//! and sends back the returned descriptor as `{status, message?, data?}`
//! with its status code. Reads share the lock; writes hold it exclusively so
//! lookup, validation and mutation happen in one critical section.

pub mod config;

use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use bookshelf_core::{BookPayload, Catalog, ListQuery, Response};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::ServerConfig;

/// Message for a request body that does not decode into a book payload.
pub const INVALID_PAYLOAD: &str = "Invalid request payload JSON format";

pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// A catalog `Response` ready to be sent by axum.
#[derive(Debug)]
pub struct Reply(pub Response);

impl IntoResponse for Reply {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.0.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.body)).into_response()
    }
}

/// Router over a fresh, empty catalog.
pub fn app() -> Router {
    router(Arc::new(RwLock::new(Catalog::new())))
}

pub fn router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/books", get(get_all_books).post(add_book))
        .route(
            "/books/{bookId}",
            get(get_book_by_id).put(edit_book_by_id).delete(delete_book_by_id),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve until `shutdown` resolves, then finish in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app()).with_graceful_shutdown(shutdown).await
}

/// An empty body counts as an empty payload, so it fails the name check
/// rather than the JSON decode.
fn parse_payload(body: &[u8]) -> Result<BookPayload, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(BookPayload::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        warn!(%err, "rejecting book payload");
        Response::fail(400, INVALID_PAYLOAD)
    })
}

async fn add_book(State(catalog): State<SharedCatalog>, body: Bytes) -> Reply {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(response) => return Reply(response),
    };
    let response = catalog.write().await.add_book(payload);
    info!(code = response.code, "add book");
    Reply(response)
}

/// Query pairs are taken raw so a repeated key cannot fail extraction.
async fn get_all_books(
    State(catalog): State<SharedCatalog>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Reply {
    let query = ListQuery::from_pairs(pairs);
    Reply(catalog.read().await.get_all_books(&query))
}

async fn get_book_by_id(State(catalog): State<SharedCatalog>, Path(book_id): Path<String>) -> Reply {
    Reply(catalog.read().await.get_book_by_id(&book_id))
}

async fn edit_book_by_id(
    State(catalog): State<SharedCatalog>,
    Path(book_id): Path<String>,
    body: Bytes,
) -> Reply {
    let payload = match parse_payload(&body) {
        Ok(payload) => payload,
        Err(response) => return Reply(response),
    };
    let response = catalog.write().await.edit_book_by_id(&book_id, payload);
    info!(%book_id, code = response.code, "edit book");
    Reply(response)
}

async fn delete_book_by_id(State(catalog): State<SharedCatalog>, Path(book_id): Path<String>) -> Reply {
    let response = catalog.write().await.delete_book_by_id(&book_id);
    info!(%book_id, code = response.code, "delete book");
    Reply(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::ResponseStatus;

    #[test]
    fn empty_body_is_empty_payload() {
        assert_eq!(parse_payload(b"").unwrap(), BookPayload::default());
        assert_eq!(parse_payload(b" \n").unwrap(), BookPayload::default());
    }

    #[test]
    fn json_body_is_decoded() {
        let payload = parse_payload(br#"{"name":"Buku","readPage":3}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Buku"));
        assert_eq!(payload.read_page, Some(3.into()));
    }

    #[test]
    fn malformed_body_is_400_fail() {
        let response = parse_payload(b"{not json").unwrap_err();
        assert_eq!(response.code, 400);
        assert_eq!(response.status(), ResponseStatus::Fail);
        assert_eq!(response.message(), Some(INVALID_PAYLOAD));
    }

    #[test]
    fn fractional_and_negative_numbers_are_decoded() {
        let payload = parse_payload(br#"{"name":"Buku","year":1999.5,"pageCount":10.5,"readPage":-1}"#).unwrap();
        assert_eq!(payload.page_count.and_then(|n| n.as_f64()), Some(10.5));
        assert_eq!(payload.read_page.and_then(|n| n.as_i64()), Some(-1));
    }

    #[test]
    fn wrongly_typed_field_is_rejected() {
        let response = parse_payload(br#"{"name":"Buku","pageCount":"banyak"}"#).unwrap_err();
        assert_eq!(response.code, 400);
    }

    #[test]
    fn reply_keeps_descriptor_code() {
        let reply = Reply(Response::fail(404, "Buku tidak ditemukan")).into_response();
        assert_eq!(reply.status(), StatusCode::NOT_FOUND);
    }
}
