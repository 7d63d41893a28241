// ABOUTME: Error types for the nbslides application
// ABOUTME: Provides structured error handling for each stage of the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlidesError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Notebook parse error: {0}")]
    NotebookError(String),

    #[error("Unsupported notebook format version {0} (expected 4 or later)")]
    UnsupportedNotebookFormat(u32),

    #[error("Invalid cell directive: {0}")]
    DirectiveError(String),

    #[error("Highlighted line {line} is out of range (cell has {lines} lines)")]
    HighlightOutOfRange { line: usize, lines: usize },

    #[error("Cell {index}: {source}")]
    CellError {
        index: usize,
        #[source]
        source: Box<SlidesError>,
    },

    #[error("Highlight theme not found: {0}")]
    ThemeNotFound(String),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SlidesError {
    /// Attach the 1-based index of the notebook cell that failed
    pub fn in_cell(self, index: usize) -> Self {
        SlidesError::CellError {
            index,
            source: Box::new(self),
        }
    }
}

// Notebook JSON is the only serde_json input we handle
impl From<serde_json::Error> for SlidesError {
    fn from(err: serde_json::Error) -> Self {
        SlidesError::NotebookError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for SlidesError {
    fn from(err: zip::result::ZipError) -> Self {
        SlidesError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SlidesError>;
