//! The five book handlers over an owned store.
//!
//! # Design
//! `Catalog` owns the `BookStore` together with its id generator and clock,
//! all injected at construction. Each public handler maps one request to
//! exactly one `Response`: the work happens in a private `try_*` method
//! returning `Result<_, CatalogError>`, and the handler converts the error at
//! its boundary. Every check runs before the store is touched, so a failed
//! request never leaves a partial mutation behind.
//!
//! Reads take `&self` and writes take `&mut self`; a concurrent dispatcher
//! wraps the catalog in a lock and holds it for the whole call.

use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{CatalogError, Operation};
use crate::id::{IdGenerator, NanoIdGenerator};
use crate::response::{Response, ResponseData};
use crate::store::BookStore;
use crate::types::{Book, BookPayload, BookSummary, ListQuery};

/// How many generated ids may collide with stored ones before `add_book`
/// gives up with an internal error.
pub const MAX_ID_ATTEMPTS: usize = 8;

#[derive(Debug)]
pub struct Catalog<G = NanoIdGenerator, C = SystemClock> {
    store: BookStore,
    ids: G,
    clock: C,
}

impl Catalog {
    /// An empty catalog with random ids and the system clock.
    pub fn new() -> Self {
        Self::with_parts(NanoIdGenerator, SystemClock)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: Clock> Catalog<G, C> {
    pub fn with_parts(ids: G, clock: C) -> Self {
        Self {
            store: BookStore::new(),
            ids,
            clock,
        }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// `POST /books`
    pub fn add_book(&mut self, payload: BookPayload) -> Response {
        match self.try_add(payload) {
            Ok(book_id) => Response::success(201, "Buku berhasil ditambahkan")
                .with_data(ResponseData::BookId { book_id }),
            Err(err) => err.into(),
        }
    }

    /// `GET /books`
    pub fn get_all_books(&self, query: &ListQuery) -> Response {
        let filter = query.filter();
        let books: Vec<BookSummary> = self
            .store
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary_view)
            .collect();
        debug!(?filter, matched = books.len(), "listing books");
        Response::data(200, ResponseData::Books { books })
    }

    /// `GET /books/{bookId}`
    pub fn get_book_by_id(&self, book_id: &str) -> Response {
        match self.store.find(book_id) {
            Some(book) => Response::data(200, ResponseData::Book { book: book.clone() }),
            None => CatalogError::BookNotFound.into(),
        }
    }

    /// `PUT /books/{bookId}`
    pub fn edit_book_by_id(&mut self, book_id: &str, payload: BookPayload) -> Response {
        match self.try_edit(book_id, payload) {
            Ok(()) => Response::success(200, "Buku berhasil diperbarui"),
            Err(err) => err.into(),
        }
    }

    /// `DELETE /books/{bookId}`
    pub fn delete_book_by_id(&mut self, book_id: &str) -> Response {
        match self.store.position(book_id) {
            Some(index) => {
                self.store.remove_at(index);
                Response::success(200, "Buku berhasil dihapus")
            }
            None => CatalogError::DeleteTargetNotFound.into(),
        }
    }

    fn try_add(&mut self, payload: BookPayload) -> Result<String, CatalogError> {
        let name = validate(&payload, Operation::Add)?;
        let id = self.fresh_id()?;
        let inserted_at = self.clock.now();
        let finished = payload.is_finished();

        self.store.append(Book {
            id: id.clone(),
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished,
            reading: payload.reading,
            updated_at: inserted_at.clone(),
            inserted_at,
        });

        if !self.store.contains(&id) {
            warn!(%id, "book missing right after insert");
            return Err(CatalogError::InsertFailed);
        }
        Ok(id)
    }

    fn try_edit(&mut self, book_id: &str, payload: BookPayload) -> Result<(), CatalogError> {
        let index = self
            .store
            .position(book_id)
            .ok_or(CatalogError::UpdateTargetNotFound)?;
        let name = validate(&payload, Operation::Update)?;

        let mut book = self
            .store
            .get(index)
            .cloned()
            .ok_or(CatalogError::UpdateTargetNotFound)?;
        book.overwrite(name, payload, self.clock.now());
        self.store
            .replace_at(index, book)
            .ok_or(CatalogError::UpdateTargetNotFound)?;
        Ok(())
    }

    fn fresh_id(&mut self) -> Result<String, CatalogError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if !self.store.contains(&id) {
                return Ok(id);
            }
            debug!(%id, "generated id already in use");
        }
        warn!(attempts = MAX_ID_ATTEMPTS, "could not generate an unused book id");
        Err(CatalogError::InsertFailed)
    }
}

/// Checks shared by create and update, in order. Returns the required name.
fn validate(payload: &BookPayload, operation: Operation) -> Result<String, CatalogError> {
    let name = payload
        .name
        .clone()
        .ok_or(CatalogError::MissingName(operation))?;
    if payload.read_page_exceeds_page_count() {
        return Err(CatalogError::ReadPageExceedsPageCount(operation));
    }
    Ok(name)
}
