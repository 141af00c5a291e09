//! URL Utility Functions
//!
//! Parses the target URL into a [`BaseLocation`] and resolves anchor
//! references against it.

use std::fmt;
use std::str::FromStr;

use url::{ParseError, Url};

use crate::error::{Error, Result};

/// Check whether a string starts with an `http://` or `https://` prefix.
///
/// This is the front-end validation applied before a base location is
/// parsed; it does not check that the rest of the string is well formed.
#[must_use]
pub fn has_http_scheme(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Validate a user-supplied target and parse it into a base location.
///
/// # Errors
///
/// Returns [`Error::UnsupportedScheme`] when the prefix check fails and
/// [`Error::MalformedUrl`] when the URL cannot be parsed.
pub fn validate_target_url(s: &str) -> Result<BaseLocation> {
    if !has_http_scheme(s) {
        return Err(Error::UnsupportedScheme(s.to_string()));
    }
    BaseLocation::parse(s)
}

/// Parsed form of the page's own URL.
///
/// Immutable once parsed. Every relative `href` on the page is resolved
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseLocation {
    url: Url,
}

impl BaseLocation {
    /// Parse a URL string into a base location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUrl`] if the string is not a valid absolute URL.
    pub fn parse(s: &str) -> Result<Self> {
        Url::parse(s)
            .map(|url| Self { url })
            .map_err(|source| Error::MalformedUrl {
                url: s.to_string(),
                source,
            })
    }

    /// The underlying parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.url
    }

    /// Serialized form of the base location.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Resolve a raw reference against this base.
    ///
    /// References that already carry a scheme are returned unchanged apart
    /// from leading and trailing spaces. Anything else (`/path`,
    /// `page.html`, `?q`, `#frag`, `//host/path`) goes through standard
    /// reference resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] when the reference contains an ASCII
    /// control character, has a colon in its first path segment without
    /// being a valid scheme (`ht tp://x`), or is rejected by the URL parser
    /// (invalid host, port, IPv6 address).
    pub fn resolve(&self, reference: &str) -> std::result::Result<String, ReferenceError> {
        if reference.chars().any(|c| c.is_ascii_control()) {
            return Err(ReferenceError::ControlCharacter);
        }

        match Url::parse(reference) {
            Ok(_) => Ok(reference.trim_matches(' ').to_string()),
            Err(ParseError::RelativeUrlWithoutBase) => {
                if first_segment(reference).contains(':') {
                    return Err(ReferenceError::ColonInFirstSegment);
                }
                Ok(self.url.join(reference)?.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Why a single `href` could not be turned into a link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// Tab, newline or another ASCII control character inside the value.
    #[error("invalid control character in URL")]
    ControlCharacter,

    /// Scheme-like prefix that is not a valid scheme.
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,

    /// Rejected by the URL parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Text before the first `/`, `?` or `#`.
fn first_segment(reference: &str) -> &str {
    reference
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
}

impl FromStr for BaseLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> BaseLocation {
        BaseLocation::parse(s).expect("valid base")
    }

    #[test]
    fn test_has_http_scheme() {
        assert!(has_http_scheme("http://example.com"));
        assert!(has_http_scheme("https://example.com/path"));
        assert!(!has_http_scheme("ftp://example.com"));
        assert!(!has_http_scheme("example.com"));
        assert!(!has_http_scheme("HTTP://example.com"));
        assert!(!has_http_scheme(""));
    }

    #[test]
    fn test_validate_target_url_rejects_scheme() {
        let err = validate_target_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, Error::UnsupportedScheme(ref u) if u == "ftp://example.com"));
    }

    #[test]
    fn test_validate_target_url_rejects_malformed() {
        let err = validate_target_url("http://exa mple.com/").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));

        let err = validate_target_url("https://").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }

    #[test]
    fn test_base_location_parts() {
        let b = base("https://example.com:8443/blog/post?page=2");
        assert_eq!(b.as_url().scheme(), "https");
        assert_eq!(b.as_url().host_str(), Some("example.com"));
        assert_eq!(b.as_url().port(), Some(8443));
        assert_eq!(b.as_url().path(), "/blog/post");
        assert_eq!(b.as_url().query(), Some("page=2"));
        assert_eq!(b.to_string(), "https://example.com:8443/blog/post?page=2");
    }

    #[test]
    fn test_resolve_absolute_unchanged() {
        for b in ["https://example.com/blog/post", "http://a.test/"] {
            let b = base(b);
            assert_eq!(b.resolve("https://other.example/x").unwrap(), "https://other.example/x");
            assert_eq!(b.resolve("https://other.example").unwrap(), "https://other.example");
            assert_eq!(b.resolve("mailto:me@example.com").unwrap(), "mailto:me@example.com");
        }
    }

    #[test]
    fn test_resolve_root_relative() {
        let b = base("https://example.com/blog/post");
        assert_eq!(b.resolve("/about").unwrap(), "https://example.com/about");
    }

    #[test]
    fn test_resolve_path_relative() {
        let b = base("https://example.com/blog/post/");
        assert_eq!(
            b.resolve("contact.html").unwrap(),
            "https://example.com/blog/post/contact.html"
        );

        let b = base("https://example.com/blog/post");
        assert_eq!(b.resolve("contact.html").unwrap(), "https://example.com/blog/contact.html");
        assert_eq!(b.resolve("../x").unwrap(), "https://example.com/x");
    }

    #[test]
    fn test_resolve_query_fragment_and_scheme_relative() {
        let b = base("https://example.com/blog/post?page=2");
        assert_eq!(b.resolve("?page=3").unwrap(), "https://example.com/blog/post?page=3");
        assert_eq!(b.resolve("#top").unwrap(), "https://example.com/blog/post?page=2#top");
        assert_eq!(b.resolve("//cdn.example/app.js").unwrap(), "https://cdn.example/app.js");
        assert_eq!(b.resolve("").unwrap(), "https://example.com/blog/post?page=2");
    }

    #[test]
    fn test_resolve_malformed() {
        let b = base("https://example.com/");
        assert!(b.resolve("http://exa mple.com/").is_err());
        assert!(b.resolve("http://[::1").is_err());
        assert!(b.resolve("https://example.com:99999/").is_err());
    }

    #[test]
    fn test_resolve_rejects_invalid_scheme_prefix() {
        let b = base("https://example.com/blog/post");
        assert_eq!(b.resolve("ht tp://x"), Err(ReferenceError::ColonInFirstSegment));
        assert_eq!(b.resolve("1http:x"), Err(ReferenceError::ColonInFirstSegment));

        // Colons after the first segment are ordinary path, query or fragment text.
        assert_eq!(b.resolve("./a:b").unwrap(), "https://example.com/blog/a:b");
        assert_eq!(b.resolve("?t=10:30").unwrap(), "https://example.com/blog/post?t=10:30");
        assert_eq!(b.resolve("#x:y").unwrap(), "https://example.com/blog/post#x:y");
        assert_eq!(b.resolve("//cdn.example:8080/a").unwrap(), "https://cdn.example:8080/a");
    }

    #[test]
    fn test_resolve_rejects_control_characters() {
        let b = base("https://example.com/");
        assert_eq!(b.resolve("https://other.example/a\nb"), Err(ReferenceError::ControlCharacter));
        assert_eq!(b.resolve("/path\twith-tab"), Err(ReferenceError::ControlCharacter));
        assert_eq!(b.resolve("\r\n/x"), Err(ReferenceError::ControlCharacter));
        assert_eq!(b.resolve(" /x ").unwrap(), "https://example.com/x");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let b = base("https://example.com/a/b");
        for r in ["c", "/d", "?e", "#f", "https://g.example/h"] {
            assert_eq!(b.resolve(r).unwrap(), b.resolve(r).unwrap());
        }
    }
}
