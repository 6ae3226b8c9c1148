//! Error handling for skillfit
//!
//! The scoring core never fails; these errors only surface at the edges
//! (configuration, catalogue loading, file I/O, rendering).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillFitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Catalogue error: {0}")]
    Catalogue(String),

    #[error("Job source error: {0}")]
    JobSource(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillFitError>;

/// Job providers report failures through anyhow; fold them into our type
impl From<anyhow::Error> for SkillFitError {
    fn from(err: anyhow::Error) -> Self {
        SkillFitError::JobSource(err.to_string())
    }
}
