//! tpdf Library
//!
//! A terminal PDF pager. The PDF is converted to plain text by `pdftotext`,
//! the text is cut into fixed-size pages, and a line-oriented command loop
//! moves between them. This library provides:
//! - Conversion through an external tool behind the [`extract::TextExtractor`] trait
//! - Pagination into pages of a fixed number of lines
//! - Navigation by page number or by case-insensitive chapter search
//! - Rendering of a page with a "Page N of Total" banner
//! - An interactive session that owns the temporary text file
//!
//! # Example
//!
//! ```no_run
//! use tpdf::config::ViewerConfig;
//! use tpdf::extract::Pdftotext;
//! use tpdf::session::Session;
//! use std::path::Path;
//!
//! let config = ViewerConfig::default();
//! let mut session = Session::open(&Pdftotext::default(), Path::new("book.pdf"), &config)
//!     .expect("Failed to open PDF");
//!
//! let stdin = std::io::stdin();
//! session.run(stdin.lock(), &mut std::io::stdout()).expect("Session failed");
//! ```

pub mod error;
pub mod config;
pub mod extract;
pub mod pager;
pub mod command;
pub mod session;

// Re-export commonly used items
pub use error::{Error, Result};
