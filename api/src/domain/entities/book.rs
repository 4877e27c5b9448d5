//! Book domain entity
//!
//! Represents a catalog entry. The `isbn` is unique across the catalog.

/// Store-assigned identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub i64);

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the catalog
///
/// `id` is `None` until the book has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    /// Build a book that has not been persisted yet
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    pub fn with_id(mut self, id: BookId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Query-by-example filter over the filterable book fields
///
/// Unset fields are wildcards; set fields must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

impl BookFilter {
    /// Build a filter from the non-empty fields of an example book
    pub fn from_example(example: &Book) -> Self {
        Self::default()
            .title(&example.title)
            .author(&example.author)
            .isbn(&example.isbn)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = non_empty(isbn.into());
        self
    }

    /// True when no field constrains the query
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.isbn.is_none()
    }

    /// Exact-match conjunction over every constrained field
    pub fn matches(&self, book: &Book) -> bool {
        field_matches(&self.title, &book.title)
            && field_matches(&self.author, &book.author)
            && field_matches(&self.isbn, &book.isbn)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn field_matches(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().map_or(true, |e| e == actual)
}
