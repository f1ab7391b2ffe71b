// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page geometry handed to the layout engine: paper name plus four margin
/// insets in inches. Defaults match the house resume format (A4, 0.5in).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Typst paper identifier, e.g. "a4" or "us-letter".
    pub paper: String,
    pub left_margin_in: f64,
    pub right_margin_in: f64,
    pub top_margin_in: f64,
    pub bottom_margin_in: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            paper: "a4".to_string(),
            left_margin_in: 0.5,
            right_margin_in: 0.5,
            top_margin_in: 0.5,
            bottom_margin_in: 0.5,
        }
    }
}

impl PageConfig {
    /// Load page parameters from a TOML file. Unspecified keys keep their
    /// defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page params: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse page params: {}", path.display()))
    }
}

/// Render configuration, passed explicitly into each invocation. There is
/// deliberately no process-wide default record or path; every call names
/// its own source and destination.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Resume record JSON file.
    pub input_path: PathBuf,
    /// Explicit output file; when absent a name is derived from the
    /// record and placed under `output_dir`.
    pub output_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub page: PageConfig,
}

impl RenderConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            output_dir: PathBuf::from("output"),
            page: PageConfig::default(),
        }
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_a4_half_inch() {
        let page = PageConfig::default();
        assert_eq!(page.paper, "a4");
        assert_eq!(page.left_margin_in, 0.5);
        assert_eq!(page.bottom_margin_in, 0.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "paper = \"us-letter\"\ntop_margin_in = 1.0").unwrap();

        let page = PageConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(page.paper, "us-letter");
        assert_eq!(page.top_margin_in, 1.0);
        assert_eq!(page.left_margin_in, 0.5);
    }

    #[test]
    fn test_missing_params_file_is_an_error() {
        assert!(PageConfig::from_toml_file(Path::new("does/not/exist.toml")).is_err());
    }
}
