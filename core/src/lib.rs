//! In-memory book catalog core.
//!
//! # Overview
//! Holds book records in an ordered in-memory store and implements the five
//! catalog handlers (create, list, get, update, delete) as plain functions
//! from request data to a `Response` descriptor. No network, no async
//! runtime: the dispatcher that receives HTTP requests lives in
//! `bookshelf-server`.
//!
//! # Design
//! - `Catalog` owns the `BookStore`; nothing is global, so each test or
//!   server gets its own isolated store.
//! - Id generation and timestamps sit behind the `IdGenerator` and `Clock`
//!   traits, so handlers are deterministic under test.
//! - Handlers never fail: every `CatalogError` is turned into a `fail` or
//!   `error` response before it leaves the catalog.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod id;
pub mod response;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use clock::{Clock, SystemClock};
pub use error::{CatalogError, Operation};
pub use id::{IdGenerator, NanoIdGenerator};
pub use response::{Response, ResponseBody, ResponseData, ResponseStatus};
pub use store::BookStore;
pub use types::{Book, BookPayload, BookSummary, ListFilter, ListQuery};
