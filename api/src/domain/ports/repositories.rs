//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Book, BookFilter, BookId, Page, PageRequest};
use crate::error::DomainError;

/// Repository for Book entities
///
/// Implementations must enforce ISBN uniqueness and report a violation as
/// `DomainError::DuplicateIsbn`.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persist a book.
    ///
    /// A book without an id is inserted and receives a store-assigned id.
    /// A book with an id overwrites the row with that id (upsert).
    async fn save(&self, book: &Book) -> Result<Book, DomainError>;

    /// Find a book by ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;

    /// Delete the book with the given ID. Deleting a missing row is a no-op.
    async fn delete_by_id(&self, id: &BookId) -> Result<(), DomainError>;

    /// Check whether any book already uses this ISBN
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DomainError>;

    /// Find one page of books matching the filter, ordered by ascending id
    async fn find_by_example(
        &self,
        filter: &BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, DomainError>;
}
