//! Splitting extracted text into fixed-size pages

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};

/// One screen of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<String>,
}

impl Page {
    fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Lines of this page in document order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines on this page
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for pages produced by [`split_into_pages`]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains `needle`, ignoring case
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        self.lines
            .iter()
            .any(|line| line.to_lowercase().contains(needle))
    }
}

/// Split text into pages of `page_size` lines
///
/// Every page holds exactly `page_size` lines except the last one, which
/// holds whatever remains (never zero). Empty text gives no pages. A trailing
/// newline does not start an extra line.
///
/// # Example
///
/// ```
/// use tpdf::pager::split_into_pages;
///
/// let pages = split_into_pages("a\nb\nc\n", 2);
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[1].lines(), ["c"]);
/// ```
pub fn split_into_pages(text: &str, page_size: usize) -> Vec<Page> {
    if page_size == 0 {
        return Vec::new();
    }

    let lines: Vec<String> = text.lines().map(str::to_owned).collect();

    lines
        .chunks(page_size)
        .map(|chunk| Page::new(chunk.to_vec()))
        .collect()
}

/// The paginated text of one PDF
#[derive(Debug, Clone)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Paginate in-memory text
    ///
    /// Fails with [`Error::NoContent`] when the text yields no pages.
    pub fn from_text(text: &str, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidConfig(
                "lines per page must be at least 1".to_string(),
            ));
        }

        let pages = split_into_pages(text, page_size);
        if pages.is_empty() {
            return Err(Error::NoContent(Default::default()));
        }

        Ok(Self { pages })
    }

    /// Read and paginate an extracted text file
    pub fn load(path: &Path, page_size: usize) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::UnreadableText {
            path: path.to_path_buf(),
            source,
        })?;

        if bytes.is_empty() {
            return Err(Error::NoContent(path.to_path_buf()));
        }

        // pdftotext writes UTF-8, but a stray byte should not end the session
        let text = String::from_utf8_lossy(&bytes);

        let document = Self::from_text(&text, page_size).map_err(|e| match e {
            Error::NoContent(_) => Error::NoContent(path.to_path_buf()),
            other => other,
        })?;

        log::debug!(
            "Loaded {} pages from {}",
            document.page_count(),
            path.display()
        );

        Ok(document)
    }

    /// Number of pages, at least 1
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page at a zero-based index
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// All pages in order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}
