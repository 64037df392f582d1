//! Incremental reveal of a derived view.

use crate::catalog::Item;
use crate::view::cache::{DerivedView, ViewKey};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Number of revealed items, growing one page at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page_size: usize,
    visible_count: usize,
}

impl PaginationCursor {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible_count: page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn advance(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
    }

    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }

    pub fn visible_len(&self, total: usize) -> usize {
        self.visible_count.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible_count < total
    }
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Visible prefix of a derived view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: &'a [Item],
    pub total: usize,
    pub has_more: bool,
}

/// Binds a [`PaginationCursor`] to the view it was advanced on.
///
/// Whenever the view identity changes the cursor goes back to one page
/// before anything is read from it.
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    cursor: PaginationCursor,
    bound: Option<ViewKey>,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: PaginationCursor::new(page_size),
            bound: None,
        }
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    /// Rebinds to `view`, resetting the cursor if it belongs to another view.
    /// Returns true when a reset happened.
    pub fn sync(&mut self, view: &DerivedView) -> bool {
        if self.bound.as_ref() == Some(view.key()) {
            return false;
        }
        let had_view = self.bound.is_some();
        self.bound = Some(view.key().clone());
        self.cursor.reset();
        if had_view {
            tracing::debug!(
                page_size = self.cursor.page_size(),
                "View changed, pagination cursor reset"
            );
        }
        had_view
    }

    pub fn page<'a>(&mut self, view: &'a DerivedView) -> Page<'a> {
        self.sync(view);
        let total = view.len();
        Page {
            items: &view.items()[..self.cursor.visible_len(total)],
            total,
            has_more: self.cursor.has_more(total),
        }
    }

    /// Reveals one more page of `view`, if there is one.
    pub fn advance(&mut self, view: &DerivedView) -> bool {
        self.sync(view);
        if !self.cursor.has_more(view.len()) {
            return false;
        }
        self.cursor.advance();
        true
    }
}
