//! Parsing of interactive commands
//!
//! Parsing is kept separate from execution so every input form can be
//! checked without a terminal.

/// Prompt printed before each command is read
pub const PROMPT: &str = "Command (n/p/g N/gc Title/q/h): ";

/// Text shown for `help`
pub const HELP: &str = "
Commands:
  n, next                 Next page
  p, prev, previous       Previous page
  g N, gotoPage N         Jump to page N
  gc T, gotoChapter T     Jump to the first page mentioning T
  q, quit, exit           Quit
  h, help                 Show this help
";

/// One line of user input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Blank line, ignored
    Empty,
    Next,
    Previous,
    /// 1-based page number as typed; range is checked by the navigator
    GotoPage(i64),
    /// Search text, words joined by single spaces
    GotoChapter(String),
    Help,
    Quit,
    /// Known keyword with bad arguments; holds the message to show
    Malformed(&'static str),
    /// Unrecognized keyword
    Unknown(String),
}

impl ParsedCommand {
    /// Classify one input line
    ///
    /// Keywords are case sensitive. Surrounding whitespace is ignored.
    ///
    /// ```
    /// use tpdf::command::ParsedCommand;
    ///
    /// assert_eq!(ParsedCommand::parse("  g 12 "), ParsedCommand::GotoPage(12));
    /// assert_eq!(
    ///     ParsedCommand::parse("gc Chapter   2"),
    ///     ParsedCommand::GotoChapter("Chapter 2".to_string())
    /// );
    /// ```
    pub fn parse(input: &str) -> Self {
        let mut words = input.split_whitespace();
        let Some(keyword) = words.next() else {
            return ParsedCommand::Empty;
        };

        match keyword {
            "next" | "n" => ParsedCommand::Next,
            "previous" | "prev" | "p" => ParsedCommand::Previous,
            "gotoPage" | "g" => match words.next() {
                None => ParsedCommand::Malformed("Usage: gotoPage N"),
                Some(number) => match number.parse::<i64>() {
                    Ok(n) => ParsedCommand::GotoPage(n),
                    Err(_) => ParsedCommand::Malformed("Invalid page number"),
                },
            },
            "gotoChapter" | "gc" => {
                let title = words.collect::<Vec<_>>().join(" ");
                if title.is_empty() {
                    ParsedCommand::Malformed("Usage: gotoChapter Title")
                } else {
                    ParsedCommand::GotoChapter(title)
                }
            }
            "help" | "h" => ParsedCommand::Help,
            "exit" | "quit" | "q" => ParsedCommand::Quit,
            other => ParsedCommand::Unknown(other.to_string()),
        }
    }
}
