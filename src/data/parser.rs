//! Fragment parsers for layout-extracted race chart text
//!
//! PDF layout extraction produces inconsistent whitespace and run-together
//! tokens ("AQUEDUCT-January1,2025-Race1", "Distance:SixFurlongsOnTheDirt"),
//! so every parser here is tolerant of missing spaces and mixed case. Each
//! parser is stateless, holds its compiled patterns, and returns an absence
//! marker on non-match rather than an error.
//!
//! # Example
//!
//! ```
//! use racechart::data::parser::HeaderParser;
//!
//! let parser = HeaderParser::new();
//! let header = parser.parse("AQUEDUCT - January 1, 2025 - Race 7").unwrap();
//! assert_eq!(header.track, "AQUEDUCT");
//! assert_eq!(header.race_no, "7");
//! ```

use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;

use crate::models::{HorseRow, RaceHeader, Surface};

/// Date format as it appears in page headers ("January 1, 2025").
const DATE_FORMAT_INPUT: &str = "%B %d, %Y";
/// Canonical date format used in output records.
const DATE_FORMAT_OUTPUT: &str = "%Y-%m-%d";

/// Page header parser
///
/// Matches `<TRACK> - <date text> - Race <n>`, tolerating compressed or
/// extra whitespace around the hyphens. A page whose text does not contain
/// this shape is not a race page.
pub struct HeaderParser {
    header_pattern: Regex,
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderParser {
    pub fn new() -> Self {
        Self {
            header_pattern: Regex::new(r"(?i)([A-Z\s.]+?)\s*-\s*(.*?)\s*-\s*Race\s*(\d+)")
                .expect("invalid header pattern"),
        }
    }

    /// Parse the header line out of full page text.
    ///
    /// Returns `None` when the pattern is absent; there is no partial-match
    /// fallback, so `None` means the page is skipped entirely.
    pub fn parse(&self, text: &str) -> Option<RaceHeader> {
        let caps = self.header_pattern.captures(text)?;
        Some(RaceHeader {
            track: caps[1].trim().to_string(),
            raw_date: caps[2].trim().to_string(),
            race_no: caps[3].trim().to_string(),
        })
    }
}

/// Distance and surface line parser
///
/// Matches `Distance:<distance> On The <surface>` with or without spaces.
pub struct DistanceSurfaceParser {
    distance_pattern: Regex,
}

impl Default for DistanceSurfaceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DistanceSurfaceParser {
    pub fn new() -> Self {
        Self {
            distance_pattern: Regex::new(r"(?i)Distance:\s*(.*?)\s*On\s*The\s*(.*)")
                .expect("invalid distance pattern"),
        }
    }

    /// Parse distance text and classified surface from full page text.
    ///
    /// `None` is non-fatal: the record is still emitted with empty
    /// distance/surface fields.
    pub fn parse(&self, text: &str) -> Option<(String, Surface)> {
        let caps = self.distance_pattern.captures(text)?;
        let mut distance = caps[1].trim().to_string();
        let surface = Surface::classify(caps[2].trim());

        // De-compress concatenated capitalized words ("SixFurlongs")
        if !distance.chars().any(char::is_whitespace) && distance.len() > 3 {
            distance = space_capitalized_words(&distance);
        }

        Some((distance, surface))
    }
}

/// Insert a space before every capital letter except the first.
fn space_capitalized_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Header date repair and reformatting
///
/// Layout extraction drops the spaces out of dates ("January1,2023"), so
/// spacing is repaired before parsing against the canonical input format.
pub struct DateNormalizer {
    letter_digit: Regex,
    comma_digit: Regex,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DateNormalizer {
    pub fn new() -> Self {
        Self {
            letter_digit: Regex::new(r"([A-Za-z]+)(\d+)").expect("invalid letter-digit pattern"),
            comma_digit: Regex::new(r"(\d+),(\d+)").expect("invalid comma-digit pattern"),
        }
    }

    /// Normalize a raw header date to `YYYY-MM-DD`.
    ///
    /// On any parse failure the original string is returned unchanged;
    /// normalization degrades rather than aborts.
    pub fn normalize(&self, raw_date: &str) -> String {
        let spaced = self.letter_digit.replace_all(raw_date, "$1 $2");
        let spaced = self.comma_digit.replace_all(&spaced, "$1, $2");

        match NaiveDate::parse_from_str(spaced.trim(), DATE_FORMAT_INPUT) {
            Ok(date) => date.format(DATE_FORMAT_OUTPUT).to_string(),
            Err(_) => raw_date.to_string(),
        }
    }
}

/// Trainer footer parser
///
/// The footer block is introduced by a literal `Trainers:` label followed by
/// `<program number> - <name>` entries separated by semicolons or newlines.
pub struct TrainerFooterParser {
    footer_pattern: Regex,
    entry_pattern: Regex,
}

impl Default for TrainerFooterParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainerFooterParser {
    pub fn new() -> Self {
        Self {
            // (?s) lets the capture span lines; entries are re-split below
            footer_pattern: Regex::new(r"(?is)Trainers:\s*(.*)")
                .expect("invalid footer pattern"),
            entry_pattern: Regex::new(r"^(\d+)\s*-\s*(.*)").expect("invalid entry pattern"),
        }
    }

    /// Build the program-number to trainer-name map from full page text.
    ///
    /// Entries that do not match the digits-hyphen-name shape are dropped.
    /// A repeated program number overwrites the earlier entry. No footer
    /// yields an empty map.
    pub fn parse(&self, text: &str) -> HashMap<String, String> {
        let mut trainers = HashMap::new();

        if let Some(caps) = self.footer_pattern.captures(text) {
            for entry in caps[1].split(|c| c == ';' || c == '\n') {
                let entry = entry.trim();
                if entry.is_empty() {
                    continue;
                }
                if let Some(m) = self.entry_pattern.captures(entry) {
                    let name = m[2].trim();
                    let name = name.strip_suffix('.').unwrap_or(name);
                    trainers.insert(m[1].to_string(), name.to_string());
                }
            }
        }

        trainers
    }
}

/// Horse entry line parser
///
/// A line qualifies as a horse data row only when it carries an all-digit
/// program number token, a parenthesized jockey name, and a decimal odds
/// token. The odds token is the discriminator against header/footer noise
/// lines that also contain digits and parentheses.
pub struct HorseRowParser {
    tight_jockey: Regex,
    spaced_jockey: Regex,
}

impl Default for HorseRowParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HorseRowParser {
    pub fn new() -> Self {
        Self {
            tight_jockey: Regex::new(r"\S+\((.*?)\)").expect("invalid tight jockey pattern"),
            spaced_jockey: Regex::new(r"\S+\s+\((.*?)\)").expect("invalid spaced jockey pattern"),
        }
    }

    /// Parse one line of page text into a horse row.
    ///
    /// Most lines on a page are expected to fail this test; `None` is the
    /// normal outcome, not an error.
    pub fn parse_line(&self, line: &str) -> Option<HorseRow> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();

        // First all-digit token in reading order is the program number
        let program_no = tokens.iter().find(|t| is_digit_token(t))?;

        if !line.contains('(') || !line.contains(')') {
            return None;
        }

        // Prefer tight adjacency "Name(Jockey)", fall back to "Name (Jockey)"
        let caps = self
            .tight_jockey
            .captures(line)
            .or_else(|| self.spaced_jockey.captures(line))?;
        let jockey = caps[1].to_string();

        if !tokens.iter().any(|t| is_odds_token(t)) {
            return None;
        }

        Some(HorseRow {
            program_no: (*program_no).to_string(),
            jockey,
        })
    }
}

/// True for tokens composed entirely of ASCII digits.
fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// True for betting odds tokens: a decimal number containing a literal
/// period, ignoring asterisk markers ("*3.50").
fn is_odds_token(token: &str) -> bool {
    if !token.contains('.') {
        return false;
    }
    let digits: String = token.chars().filter(|c| *c != '.' && *c != '*').collect();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_spaced() {
        let parser = HeaderParser::new();
        let header = parser.parse("AQUEDUCT - January 1, 2025 - Race 1").unwrap();
        assert_eq!(header.track, "AQUEDUCT");
        assert_eq!(header.raw_date, "January 1, 2025");
        assert_eq!(header.race_no, "1");
    }

    #[test]
    fn test_header_compressed() {
        let parser = HeaderParser::new();
        let header = parser.parse("AQUEDUCT-January1,2025-Race1").unwrap();
        assert_eq!(header.track, "AQUEDUCT");
        assert_eq!(header.raw_date, "January1,2025");
        assert_eq!(header.race_no, "1");
    }

    #[test]
    fn test_header_case_insensitive() {
        let parser = HeaderParser::new();
        let header = parser.parse("Belmont Park - June 7, 2025 - race 11").unwrap();
        assert_eq!(header.track, "Belmont Park");
        assert_eq!(header.race_no, "11");
    }

    #[test]
    fn test_header_inside_page_text() {
        let parser = HeaderParser::new();
        let text = "SARATOGA - August 3, 2024 - Race 9\nmore text below";
        let header = parser.parse(text).unwrap();
        assert_eq!(header.track, "SARATOGA");
        assert_eq!(header.raw_date, "August 3, 2024");
    }

    #[test]
    fn test_header_absent() {
        let parser = HeaderParser::new();
        assert!(parser.parse("Daily handle report").is_none());
        assert!(parser.parse("").is_none());
    }

    #[test]
    fn test_distance_surface_compressed() {
        let parser = DistanceSurfaceParser::new();
        let (distance, surface) = parser.parse("Distance:SixFurlongsOnTheDirt").unwrap();
        assert_eq!(distance, "Six Furlongs");
        assert_eq!(surface, Surface::Dirt);
    }

    #[test]
    fn test_distance_surface_spaced() {
        let parser = DistanceSurfaceParser::new();
        let (distance, surface) = parser.parse("Distance: One Mile On The Turf").unwrap();
        assert_eq!(distance, "One Mile");
        assert_eq!(surface, Surface::Turf);
    }

    #[test]
    fn test_distance_surface_unknown_label() {
        let parser = DistanceSurfaceParser::new();
        let (_, surface) = parser.parse("Distance:SixFurlongsOnThe Synthetic").unwrap();
        assert_eq!(surface, Surface::Unknown);
    }

    #[test]
    fn test_distance_short_passthrough() {
        // <= 3 chars is left alone even without whitespace
        let parser = DistanceSurfaceParser::new();
        let (distance, _) = parser.parse("Distance:6F On The Dirt").unwrap();
        assert_eq!(distance, "6F");
    }

    #[test]
    fn test_distance_surface_absent() {
        let parser = DistanceSurfaceParser::new();
        assert!(parser.parse("no metadata line here").is_none());
    }

    #[test]
    fn test_space_capitalized_words() {
        assert_eq!(space_capitalized_words("SixFurlongs"), "Six Furlongs");
        assert_eq!(
            space_capitalized_words("OneMileSeventyYards"),
            "One Mile Seventy Yards"
        );
    }

    #[test]
    fn test_date_compressed() {
        let normalizer = DateNormalizer::new();
        assert_eq!(normalizer.normalize("January1,2025"), "2025-01-01");
        assert_eq!(normalizer.normalize("December25,2023"), "2023-12-25");
    }

    #[test]
    fn test_date_already_spaced() {
        let normalizer = DateNormalizer::new();
        assert_eq!(normalizer.normalize("January 1, 2025"), "2025-01-01");
    }

    #[test]
    fn test_date_unparseable_passthrough() {
        let normalizer = DateNormalizer::new();
        assert_eq!(normalizer.normalize("not a date"), "not a date");
        assert_eq!(normalizer.normalize("Januberry1,2025"), "Januberry1,2025");
    }

    #[test]
    fn test_trainers_semicolons() {
        let parser = TrainerFooterParser::new();
        let map = parser.parse("Trainers: 1-Smith J.; 2-Doe A.");
        assert_eq!(map.get("1").map(String::as_str), Some("Smith J"));
        assert_eq!(map.get("2").map(String::as_str), Some("Doe A"));
    }

    #[test]
    fn test_trainers_newlines() {
        let parser = TrainerFooterParser::new();
        let map = parser.parse("Trainers:\n1 - Pletcher T.\n2 - Brown C.");
        assert_eq!(map.get("1").map(String::as_str), Some("Pletcher T"));
        assert_eq!(map.get("2").map(String::as_str), Some("Brown C"));
    }

    #[test]
    fn test_trainers_last_write_wins() {
        let parser = TrainerFooterParser::new();
        let map = parser.parse("Trainers: 1-First T.; 1-Second T.");
        assert_eq!(map.get("1").map(String::as_str), Some("Second T"));
    }

    #[test]
    fn test_trainers_malformed_entries_dropped() {
        let parser = TrainerFooterParser::new();
        let map = parser.parse("Trainers: 1-Smith J.; scratched; ; 2-Doe A.");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_trainers_no_footer() {
        let parser = TrainerFooterParser::new();
        assert!(parser.parse("no footer on this page").is_empty());
    }

    #[test]
    fn test_horse_row_qualifying() {
        let parser = HorseRowParser::new();
        let row = parser
            .parse_line("1st 3 FastHorse(Smith J) 121 2.50")
            .unwrap();
        assert_eq!(row.program_no, "3");
        assert_eq!(row.jockey, "Smith J");
    }

    #[test]
    fn test_horse_row_spaced_parens() {
        let parser = HorseRowParser::new();
        let row = parser.parse_line("5 Longshot (Doe A) 118 *45.75").unwrap();
        assert_eq!(row.program_no, "5");
        assert_eq!(row.jockey, "Doe A");
    }

    #[test]
    fn test_horse_row_no_odds_rejected() {
        // program number and jockey present, but no decimal odds token
        let parser = HorseRowParser::new();
        assert!(parser.parse_line("3 FastHorse(Smith J) 121").is_none());
    }

    #[test]
    fn test_horse_row_no_parens_rejected() {
        let parser = HorseRowParser::new();
        assert!(parser.parse_line("3 FastHorse Smith 121 2.50").is_none());
    }

    #[test]
    fn test_horse_row_no_digit_token_rejected() {
        let parser = HorseRowParser::new();
        assert!(parser.parse_line("Pace FastHorse(Smith J) 2.50x").is_none());
    }

    #[test]
    fn test_horse_row_blank_rejected() {
        let parser = HorseRowParser::new();
        assert!(parser.parse_line("").is_none());
        assert!(parser.parse_line("   ").is_none());
    }

    #[test]
    fn test_horse_row_first_digit_token_wins() {
        let parser = HorseRowParser::new();
        let row = parser.parse_line("7 Contender(Lee K) 119 12 8.10").unwrap();
        assert_eq!(row.program_no, "7");
    }

    #[test]
    fn test_is_odds_token() {
        assert!(is_odds_token("2.50"));
        assert!(is_odds_token("*45.75"));
        assert!(!is_odds_token("121"));
        assert!(!is_odds_token("."));
        assert!(!is_odds_token("2.50x"));
    }
}
