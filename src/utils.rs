// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Normalize a person's name for file system usage
pub fn sanitize_filename(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the default output file path for a rendered resume
pub fn output_file_path(base: &Path, full_name: &str) -> PathBuf {
    base.join(format!(
        "{}_Resume_{}.pdf",
        sanitize_filename(full_name),
        chrono::Utc::now().format("%Y")
    ))
}

/// Ensure directory exists
pub fn ensure_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}
