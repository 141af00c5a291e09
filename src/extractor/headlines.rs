//! Headline extraction.

use dom_query::Selection;
use tracing::debug;

use crate::dom;

/// Extract the trimmed text of each heading, dropping the empty ones.
///
/// Text is the concatenation of every descendant text node, so inline markup
/// (`<em>`, `<a>`, `<span>`) disappears but its text is kept in order.
#[must_use]
pub fn extract_headlines(headings: &[Selection]) -> Vec<String> {
    let headlines: Vec<String> = headings
        .iter()
        .filter_map(|heading| {
            let text = dom::text_content(heading);
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect();

    debug!(
        headings = headings.len(),
        stored = headlines.len(),
        "finished headline extraction"
    );
    headlines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select_headings;

    fn run(html: &str) -> Vec<String> {
        let doc = dom::parse(html);
        extract_headlines(&select_headings(&doc))
    }

    #[test]
    fn test_trims_and_keeps_order() {
        let got = run("<h2>\n\t  Second level \n</h2><h1> Top </h1><h4>Fourth</h4>");
        assert_eq!(got, vec!["Second level", "Top", "Fourth"]);
    }

    #[test]
    fn test_discards_empty_and_whitespace_only() {
        let got = run("<h1></h1><h2>   \n\t</h2><h3><img src='x.png'></h3><h4>Kept</h4>");
        assert_eq!(got, vec!["Kept"]);
    }

    #[test]
    fn test_flattens_inline_markup() {
        let got = run(r#"<h1>Breaking: <a href="/n">news</a> <em>today</em></h1>"#);
        assert_eq!(got, vec!["Breaking: news today"]);
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let got = run("<h2>Two  spaces\nand newline</h2>");
        assert_eq!(got, vec!["Two  spaces\nand newline"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let got = run("<h2>Same</h2><h3>Same</h3>");
        assert_eq!(got, vec!["Same", "Same"]);
    }

    #[test]
    fn test_every_entry_non_empty() {
        let got = run("<h1> a </h1><h2> </h2><h3>b</h3><h4>\u{a0}</h4>");
        assert!(got.iter().all(|h| !h.trim().is_empty()));
        assert_eq!(got, vec!["a", "b"]);
    }
}
