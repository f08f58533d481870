//! CSV serialization of result records

use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

use crate::error::ChartError;
use crate::models::RaceResultRecord;

/// Fixed output column order.
pub const CSV_COLUMNS: [&str; 9] = [
    "Date", "Race #", "Surface", "Distance", "Jockey", "Trainer", "WIN", "PLACE", "SHOW",
];

/// Write records to `path` as CSV: one header row, one row per record.
///
/// Every field, numeric or not, is quoted. Records are written in the order
/// given; no re-ordering, deduplication or validation happens here.
pub fn write_records(records: &[RaceResultRecord], path: &Path) -> Result<(), ChartError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_path(path)?;

    // Header is written explicitly so it appears even for zero records
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    // Check for error rather than implicitly flushing and ignoring.
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> RaceResultRecord {
        RaceResultRecord {
            date: "2025-01-01".to_string(),
            race_no: "1".to_string(),
            surface: "Dirt".to_string(),
            distance: "Six Furlongs".to_string(),
            jockey: "Smith J".to_string(),
            trainer: "Doe T".to_string(),
            win: 1,
            place: 0,
            show: 0,
        }
    }

    #[test]
    fn test_write_records_quotes_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_records(&[sample_record()], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "\"Date\",\"Race #\",\"Surface\",\"Distance\",\"Jockey\",\"Trainer\",\"WIN\",\"PLACE\",\"SHOW\""
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"2025-01-01\",\"1\",\"Dirt\",\"Six Furlongs\",\"Smith J\",\"Doe T\",\"1\",\"0\",\"0\""
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_records_empty_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_records(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.starts_with("\"Date\""));
    }

    #[test]
    fn test_write_records_bad_destination_is_fatal() {
        let result = write_records(&[sample_record()], Path::new("/nonexistent/dir/out.csv"));
        assert!(result.is_err());
    }
}
