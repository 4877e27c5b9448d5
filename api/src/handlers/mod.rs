//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod books;

pub use books::{create_book, delete_book, find_books, get_book, update_book};
