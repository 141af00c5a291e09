//! Error types for rs-pagescrape.
//!
//! This module defines the fatal errors returned by the scraping pipeline.
//! Per-anchor problems are not errors; they are reported as
//! [`LinkWarning`](crate::LinkWarning) values on the extraction result.

use std::path::PathBuf;

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target URL could not be parsed as a base location.
    #[error("Failed to parse base URL '{url}': {source}")]
    MalformedUrl {
        /// The URL text as given.
        url: String,
        /// Underlying parser error.
        #[source]
        source: url::ParseError,
    },

    /// The target URL does not use the http or https scheme.
    #[error("Invalid URL provided: {0} (URL must start with 'http://' or 'https://')")]
    UnsupportedScheme(String),

    /// The extraction mode is not one of the recognized values.
    #[error("Invalid value '{0}' provided for extraction mode. Valid options are 'links', 'headlines', or 'all'.")]
    InvalidMode(String),

    /// The HTTP client could not be configured.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The HTTP request could not be completed.
    #[error("Error fetching URL {url}: {source}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200 OK.
    #[error("Received non-200 status code {status} for URL {url}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// Numeric HTTP status.
        status: u16,
    },

    /// Creating or writing the output destination failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// Destination path, or `-` for the console.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;
