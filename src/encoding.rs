//! Character decoding of fetched page bodies.
//!
//! The fetcher hands over raw bytes plus the `Content-Type` header. The
//! charset is taken from the first source that names one:
//!
//! 1. byte order mark
//! 2. `charset=` parameter of the `Content-Type` header
//! 3. `<meta charset>` or `<meta http-equiv="Content-Type">` in the first 1024 bytes
//! 4. UTF-8

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=` parameter inside a Content-Type value (header or meta content)
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s>]+)"#).expect("valid regex")
});

/// Any `<meta ...>` tag that mentions a charset
#[allow(clippy::expect_used)]
static META_WITH_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset[^>]*>"#).expect("valid regex")
});

/// Pick the encoding for a page body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(body) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_param).and_then(label_to_encoding) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&body[..body.len().min(1024)]);
    META_WITH_CHARSET_RE
        .find(&head)
        .and_then(|tag| charset_param(tag.as_str()))
        .and_then(label_to_encoding)
        .unwrap_or(UTF_8)
}

/// Decode a page body to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing the run.
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

fn charset_param(s: &str) -> Option<&str> {
    CHARSET_PARAM_RE
        .captures(s)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn label_to_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
}
