use crate::{PageSize, derive, page_count};

/// Stateful convenience wrapper around [`derive`].
///
/// Only the page number lives here; the items are passed in on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: PageSize,
    current_page: usize,
}

impl PageCursor {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self, total_items: usize) -> usize {
        page_count(total_items, self.page_size)
    }

    /// Whether pagination controls should be shown at all.
    pub fn has_controls(&self, total_items: usize) -> bool {
        self.page_count(total_items) > 0
    }

    /// Move to `page`, clamped to `1..=max(page_count, 1)`. Returns the page
    /// actually selected.
    pub fn jump(&mut self, page: usize, total_items: usize) -> usize {
        let last = self.page_count(total_items).max(1);
        self.current_page = page.clamp(1, last);
        self.current_page
    }

    pub fn next(&mut self, total_items: usize) -> usize {
        self.jump(self.current_page.saturating_add(1), total_items)
    }

    pub fn prev(&mut self, total_items: usize) -> usize {
        self.jump(self.current_page.saturating_sub(1), total_items)
    }

    /// Slice of `source` for the current page.
    ///
    /// If the source shrank since the last jump the page may be past the end;
    /// the slice is then empty until the next jump.
    pub fn current<'a, T>(&self, source: &'a [T]) -> &'a [T] {
        derive(source, self.page_size, self.current_page)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
