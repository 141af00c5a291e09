//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. The extractors only ever read the
//! tree, so this module exposes parsing plus the handful of read operations
//! they need.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// html5ever recovers from malformed markup the way browsers do, so this
/// never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants, in document order.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_select() {
        let doc = parse(r#"<div id="main"><a href="/x">link</a></div>"#);
        let sel = doc.select("a");
        assert_eq!(sel.length(), 1);
        assert_eq!(tag_name(&sel).as_deref(), Some("a"));
    }

    #[test]
    fn test_attributes() {
        let doc = parse(r#"<a href="/x" title="">one</a><a name="anchor">two</a>"#);
        let anchors: Vec<Selection> = doc
            .select("a")
            .nodes()
            .iter()
            .map(|n| Selection::from(*n))
            .collect();

        assert_eq!(get_attribute(&anchors[0], "href").as_deref(), Some("/x"));
        assert_eq!(get_attribute(&anchors[0], "title").as_deref(), Some(""));

        assert!(get_attribute(&anchors[1], "href").is_none());
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let doc = parse("<h2>Hello <em>brave</em> <span>new</span> world</h2>");
        let h2 = doc.select("h2");
        assert_eq!(&*text_content(&h2), "Hello brave new world");
    }

    #[test]
    fn test_parse_tolerates_broken_markup() {
        let doc = parse("<h1>Unclosed <a href='/a'>link");
        assert_eq!(doc.select("a").length(), 1);
        assert_eq!(doc.select("h1").length(), 1);
    }
}
