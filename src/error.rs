//! Error types for granizo-calc

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("unsupported dent size: {0}mm (supported sizes: 20, 30, 40)")]
    InvalidDentSize(u32),

    #[error("invalid dent count: {0} (counts must be zero or positive)")]
    InvalidDentCount(i32),

    #[error("pricing failed for panel '{panel_id}', {size_mm}mm bucket: {source}")]
    PanelComputation {
        panel_id: String,
        size_mm: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("quote not found: {0}")]
    QuoteNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
