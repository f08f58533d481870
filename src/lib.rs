//! Racechart - race result chart extraction
//!
//! This library converts the layout-preserving text of race chart PDFs into
//! structured per-horse result records written as CSV rows:
//! - Tolerant fragment parsers for headers, distance/surface lines, trainer
//!   footers and horse entry rows
//! - Per-page record assembly joining fragments by program number
//! - Always-quoted CSV export
//!
//! # Example
//!
//! ```
//! use racechart::data::ChartExtractor;
//!
//! let extractor = ChartExtractor::new();
//! let page = "AQUEDUCT - January 1, 2025 - Race 1\n\
//!             Distance: Six Furlongs On The Dirt\n\
//!             1 Speedster(Smith J) 120 2.50\n\
//!             Trainers: 1-Jones B.";
//! let records = extractor.extract_page(page);
//! assert_eq!(records[0].date, "2025-01-01");
//! assert_eq!(records[0].win, 1);
//! ```

pub mod data;
pub mod error;
pub mod models;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod handlers;

// Re-export commonly used types
pub use data::{write_records, ChartExtractor};
pub use error::ChartError;
pub use models::{HorseRow, RaceHeader, RaceResultRecord, Surface};
