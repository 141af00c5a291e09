//! Extraction pipeline.
//!
//! # Module Structure
//!
//! - `links`: anchor `href` reading, resolution, per-anchor warnings
//! - `headlines`: heading text normalization
//!
//! [`extract_document`] runs the selectors and only those extractors the
//! mode asks for. Unrequested sections stay `None` in the result.

pub mod headlines;
pub mod links;

pub use headlines::extract_headlines;
pub use links::extract_links;

use dom_query::Document;
use tracing::debug;

use crate::options::Options;
use crate::result::ExtractResult;
use crate::selector;
use crate::url_utils::BaseLocation;

/// Run the requested extractors over a parsed document.
#[must_use]
pub fn extract_document(doc: &Document, base: &BaseLocation, options: &Options) -> ExtractResult {
    let mut result = ExtractResult::default();

    if options.mode.wants_links() {
        let anchors = selector::select_anchors(doc);
        debug!("found {} link(s) on the page", anchors.len());
        let extraction = extract_links(&anchors, base, options.link_resolution);
        result.links = Some(extraction.links);
        result.warnings = extraction.warnings;
    }

    if options.mode.wants_headlines() {
        let headings = selector::select_headings(doc);
        debug!("found {} headline(s) (h1-h4) on the page", headings.len());
        result.headlines = Some(extract_headlines(&headings));
    }

    result
}
