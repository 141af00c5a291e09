//! Selector Infrastructure
//!
//! Rules are simple predicate functions that test whether a node belongs to a
//! category. The extractors get their input from the two document-wide
//! queries built on them: [`select_anchors`] and [`select_headings`].
//!
//! Both queries are mode-agnostic and total: a document with no matches
//! yields an empty vector.

use dom_query::{Document, Selection};

use crate::dom;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Heading levels that count as headlines.
pub const HEADLINE_TAGS: [&str; 4] = ["h1", "h2", "h3", "h4"];

/// Rule: hyperlink element (`<a>`), with or without an `href`.
#[must_use]
pub fn is_anchor(sel: &Selection) -> bool {
    dom::tag_name(sel).is_some_and(|tag| tag == "a")
}

/// Rule: heading element of level 1 through 4.
#[must_use]
pub fn is_headline(sel: &Selection) -> bool {
    dom::tag_name(sel).is_some_and(|tag| HEADLINE_TAGS.contains(&tag.as_str()))
}

/// Query every element of a document, including the root element.
///
/// Elements are visited in document order.
///
/// # Example
///
/// ```rust
/// use rs_pagescrape::{dom, selector};
///
/// let doc = dom::parse(r#"<div><p>intro</p><h2>First</h2><h3>Second</h3></div>"#);
///
/// let headings = selector::query_document(&doc, selector::is_headline);
/// assert_eq!(headings.len(), 2);
/// assert_eq!(dom::text_content(&headings[0]).to_string(), "First");
/// ```
#[must_use]
pub fn query_document<'a>(doc: &'a Document, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}

/// All anchor nodes of the document, in document order.
#[must_use]
pub fn select_anchors(doc: &Document) -> Vec<Selection<'_>> {
    query_document(doc, is_anchor)
}

/// All h1-h4 nodes of the document, in document order.
///
/// Levels are interleaved as they appear; nesting inside sections, articles
/// or other headings does not filter anything out.
#[must_use]
pub fn select_headings(doc: &Document) -> Vec<Selection<'_>> {
    query_document(doc, is_headline)
}
