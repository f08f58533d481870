//! Per-page race record assembly
//!
//! Composes the fragment parsers over each page of document text and joins
//! their outputs into final result records. Pages are independent; there is
//! no cross-page state.

use std::path::Path;

use crate::data::parser::{
    DateNormalizer, DistanceSurfaceParser, HeaderParser, HorseRowParser, TrainerFooterParser,
};
use crate::data::pdf;
use crate::error::ChartError;
use crate::models::{HorseRow, RaceResultRecord};

/// Orchestrates the fragment parsers over page text.
pub struct ChartExtractor {
    header: HeaderParser,
    distance_surface: DistanceSurfaceParser,
    date: DateNormalizer,
    trainers: TrainerFooterParser,
    horse_rows: HorseRowParser,
}

impl Default for ChartExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartExtractor {
    pub fn new() -> Self {
        Self {
            header: HeaderParser::new(),
            distance_surface: DistanceSurfaceParser::new(),
            date: DateNormalizer::new(),
            trainers: TrainerFooterParser::new(),
            horse_rows: HorseRowParser::new(),
        }
    }

    /// Extract all result records from a document, in page order.
    pub fn extract_document(&self, path: &Path) -> Result<Vec<RaceResultRecord>, ChartError> {
        let pages = pdf::extract_page_texts(path)?;
        Ok(self.extract_pages(&pages))
    }

    /// Extract records from already-extracted page texts, preserving page
    /// order and line order within each page.
    pub fn extract_pages(&self, pages: &[String]) -> Vec<RaceResultRecord> {
        pages.iter().flat_map(|p| self.extract_page(p)).collect()
    }

    /// Extract records from one page of text.
    ///
    /// A page without a race header contributes zero records. A missing
    /// distance line, unparseable date or absent trainer entry degrades the
    /// affected fields instead of dropping the record.
    pub fn extract_page(&self, text: &str) -> Vec<RaceResultRecord> {
        let Some(header) = self.header.parse(text) else {
            return Vec::new();
        };

        let date = self.date.normalize(&header.raw_date);
        let (distance, surface) = match self.distance_surface.parse(text) {
            Some((d, s)) => (d, s.as_str().to_string()),
            None => (String::new(), String::new()),
        };
        let trainer_map = self.trainers.parse(text);

        let rows: Vec<HorseRow> = text
            .lines()
            .filter_map(|line| self.horse_rows.parse_line(line))
            .collect();

        // Rows are assumed to be listed in finish order; the win/place/show
        // flags are derived purely from that ordering. The source text
        // carries no explicit rank field to cross-check against.
        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let rank = i + 1;
            let trainer = trainer_map
                .get(&row.program_no)
                .cloned()
                .unwrap_or_default();

            records.push(RaceResultRecord {
                date: date.clone(),
                race_no: header.race_no.clone(),
                surface: surface.clone(),
                distance: distance.clone(),
                jockey: row.jockey,
                trainer,
                win: u8::from(rank == 1),
                place: u8::from(rank == 2),
                show: u8::from(rank == 3),
            });
        }

        records
    }
}
