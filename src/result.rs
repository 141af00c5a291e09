//! Result types for extraction output.
//!
//! This module defines what the extractors hand to the report assembler:
//! the per-section sequences and the non-fatal warnings recorded on the way.

use std::fmt;

/// A skipped anchor whose `href` could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWarning {
    /// 1-based position of the anchor among all anchors of the page.
    pub position: usize,

    /// The attribute value as found in the markup.
    pub raw: String,

    /// Parser error description.
    pub reason: String,
}

impl fmt::Display for LinkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping malformed link #{}: '{}' - Error: {}",
            self.position, self.raw, self.reason
        )
    }
}

/// Links produced by the link extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkExtraction {
    /// Output entries in document order. Duplicates are kept.
    pub links: Vec<String>,

    /// Anchors skipped because their reference was malformed.
    pub warnings: Vec<LinkWarning>,
}

/// Result of running the extractors over one document.
///
/// A section that was not requested is `None`: it was never computed.
/// A requested section with no matches is `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractResult {
    /// Extracted links, if the Links section was requested.
    pub links: Option<Vec<String>>,

    /// Extracted headlines, if the Headlines section was requested.
    pub headlines: Option<Vec<String>>,

    /// Non-fatal issues encountered while extracting links.
    pub warnings: Vec<LinkWarning>,
}
