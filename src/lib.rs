//! # rs-pagescrape
//!
//! Fetches a single HTML page and reports its hyperlink targets and its
//! headlines (h1-h4) as a plain text report.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_pagescrape::{extract_with_options, BaseLocation, ExtractMode, Options, Report};
//!
//! let html = r#"<html><body>
//!   <h1>Welcome</h1>
//!   <a href="/about">About</a>
//! </body></html>"#;
//!
//! let base = BaseLocation::parse("https://example.com/blog/post")?;
//! let options = Options { mode: ExtractMode::All, ..Options::default() };
//! let result = extract_with_options(html, &base, &options);
//!
//! assert_eq!(result.links.as_deref(), Some(&["https://example.com/about".to_string()][..]));
//! assert_eq!(result.headlines.as_deref(), Some(&["Welcome".to_string()][..]));
//!
//! let report = Report::assemble(options.mode, &result);
//! assert_eq!(report.lines()[0], "--- Links ---");
//! # Ok::<(), rs_pagescrape::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - [`BaseLocation`]: the parsed page URL every relative `href` resolves against
//! - [`selector`]: document-order queries for anchors and headings
//! - [`extractor`]: link resolution and headline normalization
//! - [`Report`]: labeled sections, rendered to any `io::Write`
//!
//! Malformed `href` values never abort a run; they are skipped and recorded
//! as [`LinkWarning`]s.

mod error;
mod options;
mod report;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Rule-based node selection (anchors, headings).
pub mod selector;

/// Link and headline extractors.
pub mod extractor;

/// Base location parsing and reference resolution.
pub mod url_utils;

/// Character decoding of fetched bodies.
pub mod encoding;

/// HTTP fetching.
pub mod fetch;

/// Report destinations (console or file).
pub mod output;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{FetchOptions, FetchedPage, Fetcher, HttpFetcher};
pub use options::{ExtractMode, LinkResolution, Options};
pub use output::OutputTarget;
pub use report::{Report, Section, SectionKind};
pub use result::{ExtractResult, LinkExtraction, LinkWarning};
pub use url_utils::BaseLocation;

/// Extracts links with default options (links only, absolute resolution).
#[must_use]
pub fn extract(html: &str, base: &BaseLocation) -> ExtractResult {
    extract_with_options(html, base, &Options::default())
}

/// Extracts the sections requested by `options` from an HTML string.
///
/// Parsing is tolerant, so this never fails. Sections the mode does not
/// request are left as `None`.
#[must_use]
pub fn extract_with_options(html: &str, base: &BaseLocation, options: &Options) -> ExtractResult {
    let doc = dom::parse(html);
    extractor::extract_document(&doc, base, options)
}

/// Fetches `base` through `fetcher` and extracts from the returned page.
///
/// # Errors
///
/// Propagates fetch failures; extraction itself cannot fail.
pub fn scrape<F: Fetcher + ?Sized>(
    fetcher: &F,
    base: &BaseLocation,
    options: &Options,
) -> Result<ExtractResult> {
    let page = fetcher.fetch(base)?;
    let html = page.text();
    tracing::debug!(chars = html.len(), "parsing HTML body");
    Ok(extract_with_options(&html, base, options))
}
