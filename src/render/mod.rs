// src/render/mod.rs
//! Paginating renderer: block sequence -> PDF document

mod compile;
mod typst;

pub use compile::PdfCompiler;
pub use typst::{escape_string, escape_text, TypstEmitter};

use crate::config::PageConfig;
use crate::error::ResumeError;
use crate::story::ContentBlock;
use std::path::{Path, PathBuf};

/// Render a block sequence to PDF bytes with the given page geometry.
pub fn render_pdf(blocks: &[ContentBlock], page: &PageConfig) -> Result<Vec<u8>, ResumeError> {
    let source = TypstEmitter::new(page.clone()).emit(blocks);
    PdfCompiler::new().compile(&source)
}

/// Render a block sequence straight to a file, returning the written path.
pub fn render_to_file(
    blocks: &[ContentBlock],
    page: &PageConfig,
    target: &Path,
) -> Result<PathBuf, ResumeError> {
    let source = TypstEmitter::new(page.clone()).emit(blocks);
    PdfCompiler::new().compile_to_file(&source, target)
}
