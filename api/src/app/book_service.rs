//! Book service
//!
//! Handles the catalog lifecycle of a book: creation with ISBN uniqueness,
//! lookup, update, deletion and filtered listing.

use std::sync::Arc;

use crate::domain::entities::{Book, BookFilter, BookId, Page, PageRequest};
use crate::domain::ports::BookRepository;
use crate::error::{AppError, DomainError};

/// Service for managing books
pub struct BookService<BR>
where
    BR: BookRepository,
{
    books: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(books: Arc<BR>) -> Self {
        Self { books }
    }

    /// Create a new book
    ///
    /// Fails with `DuplicateIsbn` without writing if the ISBN is already used.
    pub async fn create(&self, book: &Book) -> Result<Book, AppError> {
        tracing::debug!(isbn = %book.isbn, "Creating book");

        if self.books.exists_by_isbn(&book.isbn).await? {
            tracing::warn!(isbn = %book.isbn, "Rejected book with duplicate ISBN");
            return Err(DomainError::DuplicateIsbn.into());
        }

        let saved = self.books.save(book).await?;
        if let Some(id) = saved.id {
            tracing::info!(book_id = %id, isbn = %saved.isbn, "Book created");
        }

        Ok(saved)
    }

    /// Find a book by ID
    pub async fn get_by_id(&self, id: &BookId) -> Result<Option<Book>, AppError> {
        Ok(self.books.find_by_id(id).await?)
    }

    /// Delete a persisted book
    pub async fn delete(&self, book: &Book) -> Result<(), AppError> {
        let id = require_id(book, "delete")?;

        self.books.delete_by_id(&id).await?;
        tracing::info!(book_id = %id, "Book deleted");

        Ok(())
    }

    /// Overwrite a persisted book with the given state
    ///
    /// ISBN uniqueness is only pre-checked on create; here it is left to the
    /// store's unique index.
    pub async fn update(&self, book: &Book) -> Result<Book, AppError> {
        let id = require_id(book, "update")?;

        let updated = self.books.save(book).await?;
        tracing::info!(book_id = %id, "Book updated");

        Ok(updated)
    }

    /// Find one page of books matching every constrained filter field
    pub async fn find(
        &self,
        filter: &BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, AppError> {
        tracing::debug!(
            ?filter,
            unconstrained = filter.is_unconstrained(),
            page = page.page(),
            size = page.size(),
            offset = page.offset(),
            "Searching books"
        );

        Ok(self.books.find_by_example(filter, page).await?)
    }
}

fn require_id(book: &Book, operation: &str) -> Result<BookId, DomainError> {
    book.id.ok_or_else(|| {
        DomainError::InvalidArgument(format!("Cannot {} a book without an id", operation))
    })
}
