//! Chart text parsing, record assembly and CSV export

pub mod csv_export;
pub mod extractor;
pub mod parser;
pub mod pdf;

// Re-export commonly used types
pub use csv_export::{write_records, CSV_COLUMNS};
pub use extractor::ChartExtractor;
pub use parser::{
    DateNormalizer, DistanceSurfaceParser, HeaderParser, HorseRowParser, TrainerFooterParser,
};
pub use pdf::extract_page_texts;
