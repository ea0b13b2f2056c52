//! Cursor movement over a paginated document

use thiserror::Error;
use super::paginate::Document;

/// A rejected navigation request; the cursor is left where it was
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("You are at the first page.")]
    AtFirstPage,

    #[error("You are at the last page.")]
    AtLastPage,

    /// Requested 1-based page number is outside the document
    #[error("Invalid page number: {0}")]
    InvalidPage(i64),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),
}

/// Owns a document and the index of the page on screen
///
/// The cursor always points at an existing page. Each operation either
/// moves it and returns the new index, or returns a [`NavError`] without
/// touching it.
#[derive(Debug, Clone)]
pub struct Navigator {
    document: Document,
    current: usize,
}

impl Navigator {
    /// Start at the first page
    pub fn new(document: Document) -> Self {
        Self {
            document,
            current: 0,
        }
    }

    /// Zero-based index of the current page
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Advance one page
    pub fn next_page(&mut self) -> Result<usize, NavError> {
        if self.current + 1 < self.page_count() {
            self.current += 1;
            Ok(self.current)
        } else {
            Err(NavError::AtLastPage)
        }
    }

    /// Go back one page
    pub fn previous_page(&mut self) -> Result<usize, NavError> {
        if self.current > 0 {
            self.current -= 1;
            Ok(self.current)
        } else {
            Err(NavError::AtFirstPage)
        }
    }

    /// Jump to a 1-based page number as typed by the user
    pub fn goto_page(&mut self, page_number: i64) -> Result<usize, NavError> {
        let index = usize::try_from(page_number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&index| index < self.page_count())
            .ok_or(NavError::InvalidPage(page_number))?;

        self.current = index;
        Ok(index)
    }

    /// Index of the first page with a line containing `title`, ignoring case
    ///
    /// Pages are scanned in order and the first hit wins. This is a plain
    /// substring test, so an empty title matches the first page.
    pub fn find_chapter(&self, title: &str) -> Option<usize> {
        let needle = title.to_lowercase();
        self.document
            .pages()
            .iter()
            .position(|page| page.contains_lowercase(&needle))
    }

    /// Jump to the first page mentioning `title`
    pub fn goto_chapter(&mut self, title: &str) -> Result<usize, NavError> {
        let index = self
            .find_chapter(title)
            .ok_or_else(|| NavError::ChapterNotFound(title.to_string()))?;

        self.current = index;
        Ok(index)
    }
}
