//! Book handlers
//!
//! Endpoints for the book catalog under `/api/books`.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Book, BookFilter, BookId, Page, PageRequest};
use crate::domain::ports::BookRepository;
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Book representation on the wire
///
/// `id` is assigned by the server and ignored on input.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

impl BookDto {
    /// Check required fields, returning one message per violation
    pub fn validate(&self) -> Result<(), AppError> {
        let errors: Vec<String> = [
            ("title", &self.title),
            ("author", &self.author),
            ("isbn", &self.isbn),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| format!("{} must not be empty", field))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    /// Convert a validated DTO into an unsaved book, dropping any client id
    fn into_new_book(self) -> Book {
        Book::new(
            self.title.unwrap_or_default(),
            self.author.unwrap_or_default(),
            self.isbn.unwrap_or_default(),
        )
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.map(|id| id.0),
            title: Some(book.title),
            author: Some(book.author),
            isbn: Some(book.isbn),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Query parameters for searching books
#[derive(Debug, Default, Deserialize)]
pub struct FindBooksQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl FindBooksQuery {
    /// Query-by-example: the parameters form a sample book
    fn filter(&self) -> BookFilter {
        let example = Book::new(
            self.title.clone().unwrap_or_default(),
            self.author.clone().unwrap_or_default(),
            self.isbn.clone().unwrap_or_default(),
        );
        BookFilter::from_example(&example)
    }

    /// Resolve paging, using the default for a missing or zero size and
    /// clamping oversized requests. A page index whose offset cannot be
    /// addressed is a client error.
    fn page_request(&self, default_size: u64, max_size: u64) -> Result<PageRequest, AppError> {
        let size = match self.size {
            None | Some(0) => default_size,
            Some(size) => size.min(max_size),
        };

        PageRequest::new(self.page.unwrap_or(0), size).map_err(|e| match e {
            DomainError::InvalidArgument(msg) => AppError::BadRequest(msg),
            other => other.into(),
        })
    }
}

/// Paging parameters echoed back in the page envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableResponse {
    pub page_number: u64,
    pub page_size: u64,
}

/// Page envelope for book searches
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPageResponse {
    pub content: Vec<BookDto>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub pageable: PageableResponse,
}

impl From<Page<Book>> for BookPageResponse {
    fn from(page: Page<Book>) -> Self {
        let page = page.map(BookDto::from);

        Self {
            total_pages: page.total_pages(),
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            last: page.is_last(),
            pageable: PageableResponse {
                page_number: page.page_request.page(),
                page_size: page.page_request.size(),
            },
            total_elements: page.total_elements,
            content: page.content,
        }
    }
}

/// POST /api/books
///
/// Create a book. Responds 201 with the stored book.
pub async fn create_book<BR: BookRepository + 'static>(
    State(state): State<AppState<BR>>,
    payload: Result<Json<BookDto>, JsonRejection>,
) -> Result<(StatusCode, Json<BookDto>), AppError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let book = state.book_service.create(&dto.into_new_book()).await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// GET /api/books/:id
pub async fn get_book<BR: BookRepository + 'static>(
    State(state): State<AppState<BR>>,
    Path(id): Path<i64>,
) -> Result<Json<BookDto>, AppError> {
    let book = state
        .book_service
        .get_by_id(&BookId(id))
        .await?
        .ok_or_else(|| book_not_found(id))?;

    Ok(Json(book.into()))
}

/// PUT /api/books/:id
///
/// Update title and author of an existing book. The stored ISBN is kept.
pub async fn update_book<BR: BookRepository + 'static>(
    State(state): State<AppState<BR>>,
    Path(id): Path<i64>,
    payload: Result<Json<BookDto>, JsonRejection>,
) -> Result<Json<BookDto>, AppError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let mut book = state
        .book_service
        .get_by_id(&BookId(id))
        .await?
        .ok_or_else(|| book_not_found(id))?;

    book.title = dto.title.unwrap_or_default();
    book.author = dto.author.unwrap_or_default();

    let updated = state.book_service.update(&book).await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/books/:id
pub async fn delete_book<BR: BookRepository + 'static>(
    State(state): State<AppState<BR>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let book = state
        .book_service
        .get_by_id(&BookId(id))
        .await?
        .ok_or_else(|| book_not_found(id))?;

    state.book_service.delete(&book).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/books?title=&author=&isbn=&page=&size=
///
/// Search books; empty parameters are wildcards.
pub async fn find_books<BR: BookRepository + 'static>(
    State(state): State<AppState<BR>>,
    Query(query): Query<FindBooksQuery>,
) -> Result<Json<BookPageResponse>, AppError> {
    let page_request =
        query.page_request(state.config.default_page_size, state.config.max_page_size)?;

    let page = state
        .book_service
        .find(&query.filter(), page_request)
        .await?;

    Ok(Json(page.into()))
}

fn book_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
