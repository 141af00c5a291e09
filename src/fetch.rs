//! Page fetching.
//!
//! One blocking GET per run. Anything but `200 OK` is fatal; there are no
//! retries. The [`Fetcher`] trait is the seam that lets the pipeline run
//! against pages that do not come from the network.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::debug;

use crate::encoding;
use crate::error::{Error, Result};
use crate::url_utils::BaseLocation;

/// Default request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("rs-pagescrape/", env!("CARGO_PKG_VERSION"));

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Deadline for the whole request, body included.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Value sent as `User-Agent`.
    ///
    /// Default: `rs-pagescrape/<version>`
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A successfully fetched page body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// Raw response body.
    pub body: Vec<u8>,

    /// `Content-Type` response header, if present.
    pub content_type: Option<String>,
}

impl FetchedPage {
    /// Body decoded to UTF-8 using the declared or detected charset.
    #[must_use]
    pub fn text(&self) -> String {
        encoding::decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Source of page bodies.
pub trait Fetcher {
    /// Fetch the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the page cannot be retrieved with a success status.
    fn fetch(&self, url: &BaseLocation) -> Result<FetchedPage>;
}

/// [`Fetcher`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the TLS backend or client cannot be initialized.
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &BaseLocation) -> Result<FetchedPage> {
        debug!(url = %url, "fetching page");

        let fetch_err = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.as_url().clone())
            .send()
            .map_err(fetch_err)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(fetch_err)?.to_vec();

        debug!(bytes = body.len(), content_type = ?content_type, "HTTP request successful");
        Ok(FetchedPage { body, content_type })
    }
}
