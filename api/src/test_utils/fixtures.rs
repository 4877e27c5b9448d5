//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Book;

/// Create an unsaved test book with default values
pub fn test_book() -> Book {
    Book::new("As aventuras", "Fulano", "123")
}

/// Create an unsaved test book with a specific ISBN
pub fn test_book_with_isbn(isbn: &str) -> Book {
    Book::new("As aventuras", "Fulano", isbn)
}
