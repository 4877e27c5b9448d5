//! Pagination types
//!
//! `PageRequest` is the zero-based pagination input, `Page` the result envelope.

use crate::error::DomainError;

/// Zero-based page index and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    /// Create a page request. `size` must be at least 1 and the offset of
    /// the page must fit in a signed 64-bit row offset.
    pub fn new(page: u64, size: u64) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidArgument(
                "Page size must not be less than one".to_string(),
            ));
        }

        let max_offset = i64::MAX as u64;
        if page.checked_mul(size).map_or(true, |offset| offset > max_offset) {
            return Err(DomainError::InvalidArgument(format!(
                "Page index {} is out of range for page size {}",
                page, size
            )));
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of rows to skip before this page
    pub fn offset(&self) -> u64 {
        self.page * self.size
    }
}

/// One page of results plus the total count across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub page_request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, page_request: PageRequest) -> Self {
        Self {
            content,
            total_elements,
            page_request,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.page_request.size())
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_first(&self) -> bool {
        self.page_request.page() == 0
    }

    pub fn is_last(&self) -> bool {
        self.page_request.page().saturating_add(1) >= self.total_pages()
    }

    /// Convert the content while keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page_request: self.page_request,
        }
    }
}
