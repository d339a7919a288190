//! Pagination over ordered result sets

use serde::Deserialize;

/// Fixed page size for every question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number; values below 1 select nothing
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Index of the first item on this page, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    }

    /// Number of items on a full page.
    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Slice `[(page-1)*10 .. page*10]` out of `items`.
    ///
    /// Pages past the end produce an empty vec rather than an error; callers
    /// decide whether that means "not found".
    pub fn paginate<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let Some(start) = self.offset() else {
            return Vec::new();
        };
        items
            .iter()
            .skip(start)
            .take(self.limit())
            .cloned()
            .collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for pagination
///
/// `page` is kept as raw text so that garbage like `?page=abc` falls back to
/// the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        params
            .page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }
}
