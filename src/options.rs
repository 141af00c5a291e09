//! Configuration options for link and headline extraction.
//!
//! The `Options` struct selects which report sections are computed and how
//! link targets are written out.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which categories of content to pull from the page.
///
/// Parsed from the exact strings `links`, `headlines` and `all`. Any other
/// value is rejected with [`Error::InvalidMode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Hyperlink targets only.
    #[default]
    Links,
    /// Heading text (h1-h4) only.
    Headlines,
    /// Both sections, links first.
    All,
}

impl ExtractMode {
    /// The recognized mode names, in the order they are documented.
    pub const NAMES: [&'static str; 3] = ["links", "headlines", "all"];

    /// Whether the Links section is requested.
    #[must_use]
    pub const fn wants_links(self) -> bool {
        matches!(self, Self::Links | Self::All)
    }

    /// Whether the Headlines section is requested.
    #[must_use]
    pub const fn wants_headlines(self) -> bool {
        matches!(self, Self::Headlines | Self::All)
    }

    /// The canonical name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Headlines => "headlines",
            Self::All => "all",
        }
    }
}

impl FromStr for ExtractMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "links" => Ok(Self::Links),
            "headlines" => Ok(Self::Headlines),
            "all" => Ok(Self::All),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an anchor's `href` is turned into a report entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkResolution {
    /// Resolve against the base location into an absolute URL.
    #[default]
    Absolute,
    /// Emit the attribute value verbatim.
    Raw,
}

/// Configuration options for extraction.
///
/// # Example
///
/// ```rust
/// use rs_pagescrape::{ExtractMode, LinkResolution, Options};
///
/// let options = Options {
///     mode: ExtractMode::All,
///     ..Options::default()
/// };
/// assert_eq!(options.link_resolution, LinkResolution::Absolute);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Sections to compute and render.
    ///
    /// Default: `ExtractMode::Links`
    pub mode: ExtractMode,

    /// Link output form.
    ///
    /// Default: `LinkResolution::Absolute`
    pub link_resolution: LinkResolution,
}
