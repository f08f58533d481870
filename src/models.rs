use serde::{Deserialize, Serialize};

/// Known racing surfaces, in classification priority order.
///
/// Surface text from layout extraction is noisy ("OnTheDirt", "on the turf
/// course"), so classification is case-insensitive substring containment
/// against the labels below, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Dirt,
    Turf,
    AllWeather,
    Tapeta,
    Unknown,
}

/// Ordered labels checked during classification.
const SURFACE_LABELS: [(Surface, &str); 4] = [
    (Surface::Dirt, "dirt"),
    (Surface::Turf, "turf"),
    (Surface::AllWeather, "all weather"),
    (Surface::Tapeta, "tapeta"),
];

impl Surface {
    /// Classify raw surface text against the known labels.
    pub fn classify(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        for (surface, label) in SURFACE_LABELS {
            if lowered.contains(label) {
                return surface;
            }
        }
        Surface::Unknown
    }

    /// Display label used in output records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Dirt => "Dirt",
            Surface::Turf => "Turf",
            Surface::AllWeather => "All Weather",
            Surface::Tapeta => "Tapeta",
            Surface::Unknown => "Unknown",
        }
    }
}

/// Header fields identifying a race page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceHeader {
    pub track: String,
    /// Date text as it appears in the header, possibly missing spaces.
    pub raw_date: String,
    pub race_no: String,
}

/// One horse entry line: program number plus parenthesized jockey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseRow {
    pub program_no: String,
    pub jockey: String,
}

/// Final per-horse result record, one CSV row.
///
/// The serde renames are the fixed output column names, in declaration
/// order: Date, Race #, Surface, Distance, Jockey, Trainer, WIN, PLACE,
/// SHOW.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResultRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Race #")]
    pub race_no: String,
    #[serde(rename = "Surface")]
    pub surface: String,
    #[serde(rename = "Distance")]
    pub distance: String,
    #[serde(rename = "Jockey")]
    pub jockey: String,
    #[serde(rename = "Trainer")]
    pub trainer: String,
    #[serde(rename = "WIN")]
    pub win: u8,
    #[serde(rename = "PLACE")]
    pub place: u8,
    #[serde(rename = "SHOW")]
    pub show: u8,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
