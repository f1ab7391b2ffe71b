// src/error.rs
//! Error taxonomy for the resume pipeline

use thiserror::Error;

/// Errors produced by the resume assembly and render pipeline.
///
/// Input-shape problems are reported as [`ResumeError::MalformedInput`]
/// instead of being coerced into a best-effort record; a render either
/// yields a complete document or one of the engine/sink variants.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The resume JSON does not match the expected wire format
    /// (e.g. `skills` supplied as a list instead of a mapping).
    #[error("malformed resume input: {detail}")]
    MalformedInput { detail: String },

    /// The `typst` layout engine is not installed or not on PATH.
    #[error("typst binary not found on PATH; install typst to compile PDFs")]
    EngineUnavailable,

    /// The layout engine rejected the emitted document source.
    #[error("typst compilation failed: {stderr}")]
    CompileFailed { stderr: String },

    /// The resume input file could not be read.
    #[error("failed to read resume input: {source}")]
    InputUnreadable {
        #[source]
        source: std::io::Error,
    },

    /// The output destination could not be written. Surfaced to the
    /// caller unchanged; never retried.
    #[error("failed to write render output: {0}")]
    RenderSink(#[from] std::io::Error),
}

impl ResumeError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            detail: detail.into(),
        }
    }
}
