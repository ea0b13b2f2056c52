//! tpdf CLI tool
//!
//! Page through the text of a PDF in the terminal.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use tpdf::config::{
    ViewerConfig, DEFAULT_LINES_PER_PAGE, DEFAULT_SEPARATOR_WIDTH, DEFAULT_TEMP_FILE,
};
use tpdf::extract::{ExtractorConfig, Pdftotext};
use tpdf::session::Session;

/// tpdf - Read PDFs in the terminal
#[derive(Parser)]
#[command(name = "tpdf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "COMMANDS (inside the viewer):
    n, next                 Next page
    p, prev, previous       Previous page
    g N, gotoPage N         Jump to page N
    gc T, gotoChapter T     Jump to the first page mentioning T
    q, quit, exit           Quit
    h, help                 Show help

Requires pdftotext from Poppler (poppler-utils).")]
struct Cli {
    /// PDF file to view
    file: PathBuf,

    /// Number of text lines per page
    #[arg(long, env = "TPDF_LINES_PER_PAGE", default_value_t = DEFAULT_LINES_PER_PAGE)]
    lines_per_page: usize,

    /// Where to keep the extracted text while viewing
    #[arg(long, env = "TPDF_TEMP_FILE", default_value = DEFAULT_TEMP_FILE)]
    temp_file: PathBuf,

    /// Path to the pdftotext binary (skips the platform search)
    #[arg(long, env = "TPDF_PDFTOTEXT")]
    pdftotext: Option<PathBuf>,

    /// Width of the separator lines
    #[arg(long, default_value_t = DEFAULT_SEPARATOR_WIDTH)]
    width: usize,

    /// Do not clear the screen before each page
    #[arg(long)]
    no_clear: bool,

    /// Print debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // The session, and with it the temp file, is gone before we exit
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ViewerConfig {
        lines_per_page: cli.lines_per_page,
        temp_path: cli.temp_file,
        separator_width: cli.width,
        clear_screen: !cli.no_clear,
    };

    let extractor = Pdftotext::new(match cli.pdftotext {
        Some(program) => ExtractorConfig::with_program(program),
        None => ExtractorConfig::default(),
    });

    eprintln!("Converting PDF...");
    let mut session = Session::open(&extractor, &cli.file, &config)
        .with_context(|| format!("cannot open {}", cli.file.display()))?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("viewer terminated")?;

    Ok(())
}
