//! Ordered in-memory book storage.
//!
//! A plain `Vec` keeps insertion order for listing; lookups are linear scans
//! by id. The store does no validation of its own: the catalog checks every
//! record before it gets here.

use tracing::debug;

use crate::types::Book;

#[derive(Debug, Default, Clone)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, book: Book) {
        debug!(id = %book.id, "appending book");
        self.books.push(book);
    }

    /// Index of the first record with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Replace the record at `index`, returning the previous one, or `None`
    /// when `index` is out of bounds.
    pub fn replace_at(&mut self, index: usize, book: Book) -> Option<Book> {
        let slot = self.books.get_mut(index)?;
        debug!(id = %book.id, index, "replacing book");
        Some(std::mem::replace(slot, book))
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Book {
        let book = self.books.remove(index);
        debug!(id = %book.id, "removed book");
        book
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
