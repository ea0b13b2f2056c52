//! Viewer configuration

use std::path::PathBuf;
use crate::error::{Error, Result};

/// Number of text lines shown per page
pub const DEFAULT_LINES_PER_PAGE: usize = 40;

/// Width of the separator lines around a page
pub const DEFAULT_SEPARATOR_WIDTH: usize = 80;

/// Name of the scratch file holding the extracted text
pub const DEFAULT_TEMP_FILE: &str = ".tpdf_temp.txt";

/// Settings for a viewing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Lines per page
    pub lines_per_page: usize,
    /// Where the extracted text is written for the lifetime of the session
    pub temp_path: PathBuf,
    /// Separator width in characters
    pub separator_width: usize,
    /// Emit the ANSI clear-screen sequence before each page
    pub clear_screen: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            temp_path: PathBuf::from(DEFAULT_TEMP_FILE),
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            clear_screen: true,
        }
    }
}

impl ViewerConfig {
    /// Check the values that would break pagination or rendering
    pub fn validate(&self) -> Result<()> {
        if self.lines_per_page == 0 {
            return Err(Error::InvalidConfig(
                "lines per page must be at least 1".to_string(),
            ));
        }
        if self.separator_width == 0 {
            return Err(Error::InvalidConfig(
                "separator width must be at least 1".to_string(),
            ));
        }
        if self.temp_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("temp file path is empty".to_string()));
        }
        Ok(())
    }
}
