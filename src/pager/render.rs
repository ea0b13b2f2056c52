//! Writing a page to the terminal

use std::io::{self, Write};
use super::paginate::Document;
use crate::config::{ViewerConfig, DEFAULT_SEPARATOR_WIDTH};

/// ANSI sequence: cursor home, then erase the whole screen
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// How a page is framed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator_width: usize,
    pub clear_screen: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            clear_screen: true,
        }
    }
}

impl From<&ViewerConfig> for RenderOptions {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            separator_width: config.separator_width,
            clear_screen: config.clear_screen,
        }
    }
}

/// Write page `index` (zero-based) framed by separators and a banner
///
/// An index past the end writes a single error line and nothing else.
pub fn render<W: Write>(
    out: &mut W,
    document: &Document,
    index: usize,
    options: &RenderOptions,
) -> io::Result<()> {
    let Some(page) = document.page(index) else {
        writeln!(out, "Invalid page number")?;
        return Ok(());
    };

    let separator = "-".repeat(options.separator_width);

    if options.clear_screen {
        write!(out, "{}", CLEAR_SCREEN)?;
    }

    writeln!(out, "{}", separator)?;
    writeln!(out, " Page {} of {} ", index + 1, document.page_count())?;
    writeln!(out, "{}", separator)?;
    for line in page.lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", separator)?;

    out.flush()
}
