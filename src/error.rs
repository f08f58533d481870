use thiserror::Error;

/// Extraction errors
///
/// Only document-level I/O is fatal. Noisy pages, unmatched fragments and
/// missing footer entries degrade to absence markers inside the parsers and
/// never surface here.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to load document: {0}")]
    DocumentLoad(String),

    #[error("Failed to write output: {0}")]
    OutputWrite(#[from] std::io::Error),

    #[error("Failed to serialize records: {0}")]
    CsvWrite(#[from] csv::Error),
}
