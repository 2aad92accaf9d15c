//! Response descriptors produced by catalog handlers.
//!
//! # Design
//! Handlers never touch the transport. They return a `Response` as plain
//! data: an HTTP status code plus a JSON-ready body. The dispatcher (the
//! axum server, or a test) decides how to transmit it.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{Book, BookSummary};

/// Outcome category carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
    Error,
}

/// Payload attached to successful responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    #[serde(rename_all = "camelCase")]
    BookId { book_id: String },
    Books { books: Vec<BookSummary> },
    Book { book: Book },
}

/// JSON body of a response: `{status, message?, data?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

/// A response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u16,
    pub body: ResponseBody,
}

impl Response {
    /// A success response with a message and no data.
    pub fn success(code: u16, message: &str) -> Self {
        Self {
            code,
            body: ResponseBody {
                status: ResponseStatus::Success,
                message: Some(message.to_string()),
                data: None,
            },
        }
    }

    /// A success response with data and no message.
    pub fn data(code: u16, data: ResponseData) -> Self {
        Self {
            code,
            body: ResponseBody {
                status: ResponseStatus::Success,
                message: None,
                data: Some(data),
            },
        }
    }

    pub fn with_data(mut self, data: ResponseData) -> Self {
        self.body.data = Some(data);
        self
    }

    /// A `fail` response outside the catalog taxonomy, such as a body the
    /// dispatcher could not decode.
    pub fn fail(code: u16, message: &str) -> Self {
        Self {
            code,
            body: ResponseBody {
                status: ResponseStatus::Fail,
                message: Some(message.to_string()),
                data: None,
            },
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.body.status
    }

    pub fn message(&self) -> Option<&str> {
        self.body.message.as_deref()
    }

    pub fn to_json(&self) -> serde_json::Value {
        // ResponseBody holds only strings, numbers and booleans.
        serde_json::to_value(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

impl From<CatalogError> for Response {
    fn from(err: CatalogError) -> Self {
        Self {
            code: err.code(),
            body: ResponseBody {
                status: err.status(),
                message: Some(err.to_string()),
                data: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;

    #[test]
    fn error_converts_to_fail_body() {
        let response = Response::from(CatalogError::MissingName(Operation::Add));
        assert_eq!(response.code, 400);
        assert_eq!(
            response.to_json(),
            serde_json::json!({
                "status": "fail",
                "message": "Gagal menambahkan buku. Mohon isi nama buku"
            })
        );
    }

    #[test]
    fn internal_error_uses_error_status() {
        let response = Response::from(CatalogError::InsertFailed);
        assert_eq!(response.code, 500);
        assert_eq!(response.to_json()["status"], "error");
    }

    #[test]
    fn book_id_data_uses_camel_case() {
        let response = Response::success(201, "Buku berhasil ditambahkan").with_data(ResponseData::BookId {
            book_id: "abcdefghijklmnop".to_string(),
        });
        assert_eq!(
            response.to_json(),
            serde_json::json!({
                "status": "success",
                "message": "Buku berhasil ditambahkan",
                "data": { "bookId": "abcdefghijklmnop" }
            })
        );
    }

    #[test]
    fn data_response_omits_message() {
        let response = Response::data(200, ResponseData::Books { books: Vec::new() });
        assert_eq!(
            response.to_json(),
            serde_json::json!({ "status": "success", "data": { "books": [] } })
        );
        assert!(response.message().is_none());
    }
}
