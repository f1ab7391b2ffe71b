// src/generator.rs
use crate::config::RenderConfig;
use crate::error::ResumeError;
use crate::render::{PdfCompiler, TypstEmitter};
use crate::storage;
use crate::story::build_story;
use crate::types::ResumeRecord;
use crate::utils;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// End-to-end pipeline: load record, build the story, render the PDF.
pub struct ResumeGenerator {
    pub config: RenderConfig,
}

impl ResumeGenerator {
    pub fn new(config: RenderConfig) -> Result<Self> {
        if !config.input_path.exists() {
            anyhow::bail!(
                "Resume record not found: {}. Point --input at a resume JSON file.",
                config.input_path.display()
            );
        }

        Ok(Self { config })
    }

    /// Generate the PDF and write it to the configured destination.
    pub fn generate(&self) -> Result<PathBuf> {
        let record = self.load_record()?;
        let target = self.resolve_output_path(&record)?;

        let blocks = build_story(&record);
        let source = TypstEmitter::new(self.config.page.clone()).emit(&blocks);
        let output_path = PdfCompiler::new()
            .compile_to_file(&source, &target)
            .context("Failed to render resume PDF")?;

        info!(
            "✅ Rendered resume for {} to {}",
            record.full_name(),
            output_path.display()
        );

        Ok(output_path)
    }

    /// Generate and return the PDF bytes plus a download filename, for
    /// callers that deliver the document instead of storing it.
    pub fn generate_pdf_data(&self) -> Result<(Vec<u8>, String)> {
        let record = self.load_record()?;
        let blocks = build_story(&record);
        let source = TypstEmitter::new(self.config.page.clone()).emit(&blocks);
        let bytes = PdfCompiler::new()
            .compile(&source)
            .context("Failed to render resume PDF")?;

        let filename = format!(
            "{}_Resume_{}.pdf",
            utils::sanitize_filename(&record.full_name()),
            chrono::Utc::now().format("%Y")
        );

        Ok((bytes, filename))
    }

    /// Emit the layout-engine source without compiling it.
    pub fn emit_source(&self) -> Result<String> {
        let record = self.load_record()?;
        let blocks = build_story(&record);
        Ok(TypstEmitter::new(self.config.page.clone()).emit(&blocks))
    }

    /// Validate the input record's shape without rendering.
    pub fn check(&self) -> Result<ResumeRecord, ResumeError> {
        storage::load_resume(&self.config.input_path)
    }

    fn load_record(&self) -> Result<ResumeRecord> {
        storage::load_resume(&self.config.input_path).with_context(|| {
            format!(
                "Failed to load resume record: {}",
                self.config.input_path.display()
            )
        })
    }

    fn resolve_output_path(&self, record: &ResumeRecord) -> Result<PathBuf> {
        match &self.config.output_path {
            Some(path) => Ok(path.clone()),
            None => {
                utils::ensure_directory(&self.config.output_dir)?;
                Ok(utils::output_file_path(
                    &self.config.output_dir,
                    &record.full_name(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn test_new_rejects_missing_input() {
        let config = RenderConfig::new("no/such/resume.json");
        assert!(ResumeGenerator::new(config).is_err());
    }

    #[test]
    fn test_emit_source_covers_full_pipeline() {
        let file = record_file(
            r#"{"firstName": "Ada", "lastName": "Lovelace",
                "education": ["BSc Mathematics"],
                "skills": {"Programming": ["Rust", "Python"]}}"#,
        );
        let generator = ResumeGenerator::new(RenderConfig::new(file.path())).unwrap();

        let source = generator.emit_source().unwrap();
        assert!(source.contains("#heading(level: 1)[Ada Lovelace]"));
        assert!(source.contains("#heading(level: 2)[Education]"));
        assert!(source.contains("#strong[Programming:] Rust, Python"));
    }

    #[test]
    fn test_check_reports_malformed_shape() {
        let file = record_file(r#"{"skills": ["not", "a", "map"]}"#);
        let generator = ResumeGenerator::new(RenderConfig::new(file.path())).unwrap();
        assert!(matches!(
            generator.check(),
            Err(ResumeError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_generate_writes_pdf_when_engine_present() {
        if !PdfCompiler::engine_available() {
            eprintln!("typst not installed; skipping");
            return;
        }

        let file = record_file(r#"{"firstName": "Ada", "lastName": "Lovelace"}"#);
        let out_dir = tempfile::tempdir().unwrap();
        let target = out_dir.path().join("resume.pdf");
        let config = RenderConfig::new(file.path()).with_output_path(target.clone());

        let written = ResumeGenerator::new(config).unwrap().generate().unwrap();
        assert_eq!(written, target);
        assert!(std::fs::read(&target).unwrap().starts_with(b"%PDF"));
    }
}
