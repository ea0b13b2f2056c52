//! Pagination, navigation and rendering of extracted text

pub mod paginate;
pub mod navigate;
pub mod render;

// Re-export commonly used items
pub use paginate::{split_into_pages, Document, Page};
pub use navigate::{NavError, Navigator};
pub use render::{render, RenderOptions};
