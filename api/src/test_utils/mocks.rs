//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Book, BookFilter, BookId, Page, PageRequest};
use crate::domain::ports::BookRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Book Repository
// ============================================================================

/// Book store keyed by id, iterated in ascending id order
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<BTreeMap<BookId, Book>>>,
    next_id: Arc<RwLock<i64>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a book for testing. Unsaved books receive the next id.
    pub fn with_book(self, book: Book) -> Self {
        {
            let mut books = self.books.write().unwrap();
            let mut next_id = self.next_id.write().unwrap();

            let id = match book.id {
                Some(id) => id,
                None => {
                    *next_id += 1;
                    BookId(*next_id)
                }
            };
            *next_id = (*next_id).max(id.0);
            books.insert(id, book.with_id(id));
        }
        self
    }

    /// Number of stored books using this ISBN
    pub fn count_by_isbn(&self, isbn: &str) -> usize {
        self.books
            .read()
            .unwrap()
            .values()
            .filter(|b| b.isbn == isbn)
            .count()
    }

    /// Get all books for inspection in tests
    pub fn get_all_books(&self) -> Vec<Book> {
        self.books.read().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn save(&self, book: &Book) -> Result<Book, DomainError> {
        let mut books = self.books.write().unwrap();

        // Mirrors the unique index on isbn
        let conflict = books
            .values()
            .any(|existing| existing.isbn == book.isbn && existing.id != book.id);
        if conflict {
            return Err(DomainError::DuplicateIsbn);
        }

        let id = match book.id {
            Some(id) => id,
            None => {
                let mut next_id = self.next_id.write().unwrap();
                *next_id += 1;
                BookId(*next_id)
            }
        };

        let saved = book.clone().with_id(id);
        books.insert(id, saved.clone());

        Ok(saved)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let books = self.books.read().unwrap();
        Ok(books.get(id).cloned())
    }

    async fn delete_by_id(&self, id: &BookId) -> Result<(), DomainError> {
        let mut books = self.books.write().unwrap();
        books.remove(id);
        Ok(())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DomainError> {
        let books = self.books.read().unwrap();
        Ok(books.values().any(|b| b.isbn == isbn))
    }

    async fn find_by_example(
        &self,
        filter: &BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, DomainError> {
        let books = self.books.read().unwrap();
        let matching: Vec<_> = books.values().filter(|b| filter.matches(b)).collect();

        let total = matching.len() as u64;
        let content = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, total, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryBookRepository::new();

        let first = repo.save(&Book::new("A", "X", "1")).await.unwrap();
        let second = repo.save(&Book::new("B", "Y", "2")).await.unwrap();

        assert_eq!(first.id, Some(BookId(1)));
        assert_eq!(second.id, Some(BookId(2)));
    }

    #[tokio::test]
    async fn save_rejects_duplicate_isbn_from_other_row() {
        let repo = InMemoryBookRepository::new().with_book(Book::new("A", "X", "1"));

        let result = repo.save(&Book::new("B", "Y", "1")).await;

        assert!(matches!(result, Err(DomainError::DuplicateIsbn)));
        assert_eq!(repo.get_all_books().len(), 1);
    }

    #[tokio::test]
    async fn save_with_id_keeps_own_isbn() {
        let repo = InMemoryBookRepository::new().with_book(Book::new("A", "X", "1"));
        let mut book = repo.get_all_books().remove(0);
        book.title = "A2".to_string();

        let saved = repo.save(&book).await.unwrap();

        assert_eq!(saved.title, "A2");
        assert_eq!(repo.get_all_books(), vec![saved]);
    }

    #[tokio::test]
    async fn with_book_respects_explicit_ids() {
        let repo = InMemoryBookRepository::new()
            .with_book(Book::new("A", "X", "1").with_id(BookId(10)))
            .with_book(Book::new("B", "Y", "2"));

        let ids: Vec<_> = repo.get_all_books().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![Some(BookId(10)), Some(BookId(11))]);
    }

    #[tokio::test]
    async fn find_by_example_past_last_page_is_empty() {
        let repo = InMemoryBookRepository::new()
            .with_book(Book::new("A", "X", "1"))
            .with_book(Book::new("B", "X", "2"));

        let page = repo
            .find_by_example(&BookFilter::default(), PageRequest::new(5, 10).unwrap())
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 2);
    }
}
