//! Resume document-assembly pipeline
//!
//! Two decoupled stages: [`story::build_story`] turns a [`ResumeRecord`]
//! into an ordered sequence of renderer-agnostic content blocks, and the
//! [`render`] module lays that sequence out onto fixed-size pages through
//! the Typst engine. The block sequence is the only thing the two stages
//! share.

use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod markup;
pub mod render;
pub mod storage;
pub mod story;
pub mod types;
pub mod utils;

pub use config::{PageConfig, RenderConfig};
pub use error::ResumeError;
pub use generator::ResumeGenerator;
pub use render::{render_pdf, render_to_file};
pub use story::{build_story, ContentBlock, HeadingLevel};
pub use types::{ExperienceEntry, ProjectEntry, ResumeRecord, SkillsMap};

/// Convenience function for one-shot generation: read the record at
/// `json_path`, render with default page geometry, write to `pdf_path`.
pub fn generate_resume_pdf(json_path: &Path, pdf_path: &Path) -> Result<PathBuf> {
    let config = RenderConfig::new(json_path).with_output_path(pdf_path.to_path_buf());
    ResumeGenerator::new(config)?.generate()
}
