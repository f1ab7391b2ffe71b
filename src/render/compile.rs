// src/render/compile.rs
//! Typst engine invocation
//!
//! Pagination, line wrapping and style flow across pages are the engine's
//! job; this module only hands it a source file in a private scratch
//! directory and collects the PDF bytes. Paths are explicit throughout —
//! the working directory of the calling process is never changed.

use crate::error::ResumeError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const ENGINE_BINARY: &str = "typst";

/// Compiles emitted Typst source to PDF via the external `typst` binary.
pub struct PdfCompiler;

impl PdfCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Check that the layout engine is installed and runnable.
    pub fn engine_available() -> bool {
        Command::new(ENGINE_BINARY)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    /// Compile one document source to PDF bytes. Single blocking
    /// invocation, no retries.
    pub fn compile(&self, source: &str) -> Result<Vec<u8>, ResumeError> {
        if !Self::engine_available() {
            return Err(ResumeError::EngineUnavailable);
        }

        let workspace = tempfile::tempdir()?;
        let source_path = workspace.path().join("main.typ");
        let pdf_path = workspace.path().join("resume.pdf");
        fs::write(&source_path, source)?;

        debug!(workspace = %workspace.path().display(), "Compiling resume document");

        let output = Command::new(ENGINE_BINARY)
            .arg("compile")
            .arg(&source_path)
            .arg(&pdf_path)
            .output()?;

        if !output.status.success() {
            return Err(ResumeError::CompileFailed {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(fs::read(&pdf_path)?)
    }

    /// Compile and write the PDF to `target`. The target's parent
    /// directory is not created here; a missing directory surfaces as the
    /// underlying filesystem error.
    pub fn compile_to_file(&self, source: &str, target: &Path) -> Result<PathBuf, ResumeError> {
        let bytes = self.compile(source)?;
        fs::write(target, bytes)?;
        Ok(target.to_path_buf())
    }
}

impl Default for PdfCompiler {
    fn default() -> Self {
        Self::new()
    }
}
