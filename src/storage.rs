// src/storage.rs
//! Loading resume records from their JSON wire format

use crate::error::ResumeError;
use crate::types::ResumeRecord;
use std::path::Path;
use tracing::debug;

/// Read a resume record from a JSON file. Shape violations come back as
/// [`ResumeError::MalformedInput`] with serde's field-level detail.
pub fn load_resume(path: &Path) -> Result<ResumeRecord, ResumeError> {
    debug!(path = %path.display(), "Loading resume record");
    let content = std::fs::read_to_string(path)
        .map_err(|source| ResumeError::InputUnreadable { source })?;
    parse_resume(&content)
}

/// Parse a resume record from an in-memory JSON document.
pub fn parse_resume(json: &str) -> Result<ResumeRecord, ResumeError> {
    serde_json::from_str(json).map_err(|e| ResumeError::malformed(e.to_string()))
}
