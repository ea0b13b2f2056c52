//! Interactive viewing session
//!
//! A [`Session`] ties together the extracted text file, the navigator and
//! the command loop. It reads from any [`BufRead`] and writes to any
//! [`Write`], so the loop runs the same against a terminal or a test buffer.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::command::{ParsedCommand, HELP, PROMPT};
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::extract::TextExtractor;
use crate::pager::{render, Document, NavError, Navigator, RenderOptions};

/// Removes the extracted text file when dropped
///
/// Created before the converter runs, so partial output is cleaned up on
/// every exit path, including failed conversions. The guard only ever owns
/// a file it created itself.
#[derive(Debug)]
pub struct TempText {
    path: PathBuf,
}

impl TempText {
    /// Create an empty file at `path` and take ownership of it
    ///
    /// Fails with [`Error::TempFileExists`] if anything is already there;
    /// that file is left untouched.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(Self { path }),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::TempFileExists(path)),
            Err(e) => Err(Error::Io(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempText {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Removed {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not remove {}: {}", self.path.display(), e),
        }
    }
}

/// Whether the command loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One open document and its cursor
#[derive(Debug)]
pub struct Session {
    navigator: Navigator,
    render_options: RenderOptions,
    temp: Option<TempText>,
}

impl Session {
    /// Convert `pdf_path` with `extractor` and paginate the result
    ///
    /// The text lands in `config.temp_path`, which is deleted again when the
    /// session is dropped or when opening fails.
    pub fn open<E: TextExtractor + ?Sized>(
        extractor: &E,
        pdf_path: &Path,
        config: &ViewerConfig,
    ) -> Result<Self> {
        config.validate()?;

        let temp = TempText::create(&config.temp_path)?;
        extractor.extract(pdf_path, temp.path())?;
        let document = Document::load(temp.path(), config.lines_per_page)?;

        log::info!(
            "{}: {} pages of {} lines",
            pdf_path.display(),
            document.page_count(),
            config.lines_per_page
        );

        Ok(Self {
            navigator: Navigator::new(document),
            render_options: RenderOptions::from(config),
            temp: Some(temp),
        })
    }

    /// Session over an already paginated document, with no backing file
    pub fn with_document(document: Document, render_options: RenderOptions) -> Self {
        Self {
            navigator: Navigator::new(document),
            render_options,
            temp: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Path of the extracted text, if this session owns one
    pub fn temp_path(&self) -> Option<&Path> {
        self.temp.as_ref().map(TempText::path)
    }

    /// Draw the page under the cursor
    pub fn render_current<W: Write>(&self, out: &mut W) -> io::Result<()> {
        render(
            out,
            self.navigator.document(),
            self.navigator.current(),
            &self.render_options,
        )
    }

    /// Run one command against the session
    ///
    /// Rejected commands print a message and leave the cursor alone.
    pub fn execute<W: Write>(&mut self, command: &ParsedCommand, out: &mut W) -> io::Result<Flow> {
        log::debug!("Command {:?} at page {}", command, self.navigator.current() + 1);

        let moved = match command {
            ParsedCommand::Empty => return Ok(Flow::Continue),
            ParsedCommand::Next => self.navigator.next_page(),
            ParsedCommand::Previous => self.navigator.previous_page(),
            ParsedCommand::GotoPage(n) => self.navigator.goto_page(*n),
            ParsedCommand::GotoChapter(title) => self.navigator.goto_chapter(title),
            ParsedCommand::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            ParsedCommand::Quit => return Ok(Flow::Quit),
            ParsedCommand::Malformed(message) => {
                writeln!(out, "{}", message)?;
                return Ok(Flow::Continue);
            }
            ParsedCommand::Unknown(word) => {
                writeln!(out, "Unknown command: {}. Type 'help' for commands.", word)?;
                return Ok(Flow::Continue);
            }
        };

        self.report(moved, out)?;
        Ok(Flow::Continue)
    }

    fn report<W: Write>(
        &self,
        moved: std::result::Result<usize, NavError>,
        out: &mut W,
    ) -> io::Result<()> {
        match moved {
            Ok(_) => self.render_current(out),
            Err(e) => writeln!(out, "{}", e),
        }
    }

    /// Show the first page, then process commands until quit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.render_current(out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "\n{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let command = ParsedCommand::parse(&line?);

            if self.execute(&command, out)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(pages: usize) -> Session {
        let text: String = (1..=pages).map(|p| format!("content of page {}\n", p)).collect();
        let document = Document::from_text(&text, 1).unwrap();
        Session::with_document(
            document,
            RenderOptions {
                separator_width: 5,
                clear_screen: false,
            },
        )
    }

    fn execute(session: &mut Session, input: &str) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = session
            .execute(&ParsedCommand::parse(input), &mut out)
            .unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_temp_text_removed_on_drop() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("extracted.txt");

        {
            let guard = TempText::create(&path).unwrap();
            assert_eq!(guard.path(), path.as_path());
            assert!(path.exists());
            fs::write(&path, "text").unwrap();
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_temp_text_already_removed_is_fine() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("extracted.txt");

        let guard = TempText::create(&path).unwrap();
        fs::remove_file(&path).unwrap();
        drop(guard);
    }

    #[test]
    fn test_temp_text_refuses_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "keep me").unwrap();

        let result = TempText::create(&path);
        assert!(matches!(result, Err(Error::TempFileExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_next_renders_page() {
        let mut session = session(2);
        let (flow, output) = execute(&mut session, "n");
        assert_eq!(flow, Flow::Continue);
        assert!(output.contains(" Page 2 of 2 "));
        assert!(output.contains("content of page 2"));
        assert_eq!(session.navigator().current(), 1);
    }

    #[test]
    fn test_rejected_moves_report_and_keep_cursor() {
        let mut session = session(2);

        let (_, output) = execute(&mut session, "p");
        assert_eq!(output, "You are at the first page.\n");

        let (_, output) = execute(&mut session, "g 9");
        assert_eq!(output, "Invalid page number: 9\n");

        let (_, output) = execute(&mut session, "gc nowhere");
        assert_eq!(output, "Chapter not found: nowhere\n");

        assert_eq!(session.navigator().current(), 0);
    }

    #[test]
    fn test_malformed_and_unknown_commands() {
        let mut session = session(2);

        let (_, output) = execute(&mut session, "g");
        assert_eq!(output, "Usage: gotoPage N\n");

        let (_, output) = execute(&mut session, "jump");
        assert_eq!(output, "Unknown command: jump. Type 'help' for commands.\n");

        let (_, output) = execute(&mut session, "   ");
        assert!(output.is_empty());

        assert_eq!(session.navigator().current(), 0);
    }

    #[test]
    fn test_help_and_quit() {
        let mut session = session(1);
        let (flow, output) = execute(&mut session, "h");
        assert_eq!(flow, Flow::Continue);
        assert!(output.contains("Commands:"));

        let (flow, output) = execute(&mut session, "quit");
        assert_eq!(flow, Flow::Quit);
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_stops_at_quit() {
        let mut session = session(3);
        let mut out = Vec::new();
        session
            .run(Cursor::new("n\nq\nn\n"), &mut out)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(" Page 1 of 3 "));
        assert!(output.contains(" Page 2 of 3 "));
        assert!(!output.contains(" Page 3 of 3 "));
        assert_eq!(output.matches(PROMPT).count(), 2);
        assert_eq!(session.navigator().current(), 1);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut session = session(3);
        let mut out = Vec::new();
        session.run(Cursor::new("g 3\n"), &mut out).unwrap();
        assert_eq!(session.navigator().current(), 2);
    }
}
