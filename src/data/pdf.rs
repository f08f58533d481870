//! Per-page text extraction from PDF documents
//!
//! The parsers only consume plain page text; everything about the document
//! format stays behind this module.

use lopdf::Document;
use std::path::Path;
use tracing::warn;

use crate::error::ChartError;

/// Extract the text of every page of a document, in page order.
///
/// A page whose text cannot be extracted degrades to an empty string and
/// contributes no records downstream; a document that cannot be loaded is
/// fatal.
pub fn extract_page_texts(path: &Path) -> Result<Vec<String>, ChartError> {
    let doc = Document::load(path).map_err(|e| ChartError::DocumentLoad(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!("Skipping page {}: {}", page_num, e);
                pages.push(String::new());
            }
        }
    }

    Ok(pages)
}
