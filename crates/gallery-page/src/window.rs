use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::PageError;

/// Items shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Number of items per page. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(size: usize) -> Result<Self, PageError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(PageError::ZeroPageSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visible slice for `page`: `[(page - 1) * size, page * size)` clipped to
/// the source. Page 0 and pages past the end are empty.
pub fn derive<T>(source: &[T], page_size: PageSize, page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let size = page_size.get();
    let start = (page - 1).saturating_mul(size).min(source.len());
    let end = page.saturating_mul(size).min(source.len());
    &source[start..end]
}

/// `ceil(len / size)`. Zero items means zero pages.
pub fn page_count(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageSize::new(0), Err(PageError::ZeroPageSize));
    }

    #[test]
    fn default_page_size_is_thirty() {
        assert_eq!(PageSize::default().get(), 30);
    }

    #[test]
    fn last_page_is_clipped() {
        let source: Vec<u32> = (1..=7).collect();
        assert_eq!(derive(&source, size(3), 1), &[1, 2, 3]);
        assert_eq!(derive(&source, size(3), 3), &[7]);
        assert!(derive(&source, size(3), 4).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let source = [1, 2, 3];
        assert!(derive(&source, size(2), 0).is_empty());
    }

    #[test]
    fn empty_source_has_no_pages() {
        let source: [u8; 0] = [];
        assert_eq!(page_count(source.len(), size(30)), 0);
        assert!(derive(&source, size(30), 1).is_empty());
    }

    #[test]
    fn counts_round_up() {
        assert_eq!(page_count(5000, size(30)), 167);
        assert_eq!(page_count(30, size(30)), 1);
        assert_eq!(page_count(31, size(30)), 2);
    }
}
