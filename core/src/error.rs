//! Error taxonomy for catalog handlers.
//!
//! # Design
//! The `Display` text of every variant is the exact message sent to clients,
//! so converting an error into a `Response` never needs a second lookup
//! table. Validation messages share a per-operation prefix.

use thiserror::Error;

use crate::response::ResponseStatus;

/// The write operation a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Add => "Gagal menambahkan buku",
            Operation::Update => "Gagal memperbarui buku",
        }
    }
}

/// Failures a handler can hit. None of them leave the store modified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{}. Mohon isi nama buku", .0.failure_prefix())]
    MissingName(Operation),

    #[error("{}. readPage tidak boleh lebih besar dari pageCount", .0.failure_prefix())]
    ReadPageExceedsPageCount(Operation),

    #[error("Buku tidak ditemukan")]
    BookNotFound,

    #[error("Gagal memperbarui buku. Id tidak ditemukan")]
    UpdateTargetNotFound,

    #[error("Buku gagal dihapus. Id tidak ditemukan")]
    DeleteTargetNotFound,

    /// The inserted record could not be found again, or no unused id could
    /// be generated.
    #[error("Buku gagal ditambahkan")]
    InsertFailed,
}

impl CatalogError {
    pub fn code(&self) -> u16 {
        match self {
            CatalogError::MissingName(_) | CatalogError::ReadPageExceedsPageCount(_) => 400,
            CatalogError::BookNotFound
            | CatalogError::UpdateTargetNotFound
            | CatalogError::DeleteTargetNotFound => 404,
            CatalogError::InsertFailed => 500,
        }
    }

    pub fn status(&self) -> ResponseStatus {
        match self {
            CatalogError::InsertFailed => ResponseStatus::Error,
            _ => ResponseStatus::Fail,
        }
    }
}
