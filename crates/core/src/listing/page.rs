//! Pagination

use thiserror::Error;

/// Pagination errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Page numbers start at one.
    #[error("page numbers start at 1")]
    ZeroPage,

    /// A page must hold at least one record.
    #[error("per_page must be at least 1")]
    ZeroPerPage,
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,

    /// 1-based page number.
    pub page: usize,

    /// Page size.
    pub per_page: usize,

    /// Records across all pages.
    pub total: usize,
}

impl<T> Page<T> {
    /// Number of pages; zero for an empty list or a zero page size.
    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }

        self.total.div_ceil(self.per_page)
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Cut out one page. A page past the end is empty.
///
/// # Errors
///
/// Returns an error when `page` or `per_page` is zero.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Result<Page<T>, PageError> {
    if page == 0 {
        return Err(PageError::ZeroPage);
    }

    if per_page == 0 {
        return Err(PageError::ZeroPerPage);
    }

    let start = (page - 1).saturating_mul(per_page);

    Ok(Page {
        items: items.iter().skip(start).take(per_page).cloned().collect(),
        page,
        per_page,
        total: items.len(),
    })
}
