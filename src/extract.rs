//! PDF to text conversion through an external program
//!
//! Text extraction is delegated to `pdftotext` (Poppler / Xpdf). The
//! [`TextExtractor`] trait is the seam the viewer depends on, so sessions can
//! be driven by a fake converter in tests.

use std::path::{Path, PathBuf};
use std::process::Command;
use crate::error::{Error, Result};

/// Program name of the Poppler converter
pub const PDFTOTEXT: &str = "pdftotext";

/// Converts a PDF into a plain text file
pub trait TextExtractor {
    /// Write the text of `src` to `dst`
    fn extract(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// Where to look for `pdftotext` and how to call it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Program names or paths, tried in order
    pub candidates: Vec<PathBuf>,
    /// Pass `-layout` so columns and indentation survive
    pub preserve_layout: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            preserve_layout: true,
        }
    }
}

impl ExtractorConfig {
    /// Use exactly one program, e.g. from `--pdftotext`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![program.into()],
            ..Self::default()
        }
    }
}

/// Search list for the current platform
pub fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if cfg!(target_os = "windows") {
        candidates.push(PathBuf::from("pdftotext.exe"));
        candidates.push(PathBuf::from(r"C:\poppler\bin\pdftotext.exe"));
        candidates.push(PathBuf::from(r"C:\Program Files\poppler\bin\pdftotext.exe"));
    }
    candidates.push(PathBuf::from(PDFTOTEXT));

    candidates
}

/// How to install `pdftotext` on the current platform
pub fn install_hint() -> &'static str {
    if cfg!(target_os = "windows") {
        "Download Poppler from: https://github.com/oschwartz10612/poppler-windows/releases/"
    } else if cfg!(target_os = "macos") {
        "Install with: brew install poppler"
    } else {
        "Install with: sudo apt install poppler-utils (Ubuntu/Debian) or sudo pacman -S poppler (Arch)"
    }
}

/// [`TextExtractor`] backed by the `pdftotext` command line tool
#[derive(Debug, Clone, Default)]
pub struct Pdftotext {
    config: ExtractorConfig,
}

impl Pdftotext {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Name reported in error messages
    fn tool_name(&self) -> String {
        self.config
            .candidates
            .last()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| PDFTOTEXT.to_string())
    }

    /// Resolve the first available candidate to an executable path
    pub fn locate(&self) -> Result<PathBuf> {
        for candidate in &self.config.candidates {
            match which::which(candidate) {
                Ok(path) => {
                    log::debug!("Using {} for text extraction", path.display());
                    return Ok(path);
                }
                Err(e) => log::debug!("{} not usable: {}", candidate.display(), e),
            }
        }

        Err(Error::ExtractorUnavailable {
            tool: self.tool_name(),
            hint: install_hint().to_string(),
        })
    }
}

impl TextExtractor for Pdftotext {
    fn extract(&self, src: &Path, dst: &Path) -> Result<()> {
        // Availability first, so a missing tool is reported as such
        let program = self.locate()?;

        if !src.exists() {
            return Err(Error::SourceNotFound(src.to_path_buf()));
        }

        let mut command = Command::new(&program);
        if self.config.preserve_layout {
            command.arg("-layout");
        }
        command.arg(src).arg(dst);

        log::debug!("Running {:?}", command);

        let output = command.output().map_err(|e| Error::ExtractionFailed {
            tool: program.display().to_string(),
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{} ({})", stderr, output.status)
            };
            return Err(Error::ExtractionFailed {
                tool: program.display().to_string(),
                reason,
            });
        }

        Ok(())
    }
}
