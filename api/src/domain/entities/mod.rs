//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod book;
pub mod page;

pub use book::{Book, BookFilter, BookId};
pub use page::{Page, PageRequest};
