//! Link extraction.
//!
//! Reads the `href` of each anchor and turns it into a report entry. Two
//! separate policies apply:
//!
//! - no `href` at all: the anchor is skipped silently
//! - `href` present but unparseable: the anchor is skipped and a
//!   [`LinkWarning`] is recorded, then extraction continues

use dom_query::Selection;
use tracing::{debug, warn};

use crate::dom;
use crate::options::LinkResolution;
use crate::result::{LinkExtraction, LinkWarning};
use crate::url_utils::BaseLocation;

/// Extract links from anchors given in document order.
///
/// Warning positions are 1-based indices into `anchors`, so anchors without
/// an `href` still advance the count.
#[must_use]
pub fn extract_links(
    anchors: &[Selection],
    base: &BaseLocation,
    resolution: LinkResolution,
) -> LinkExtraction {
    let mut out = LinkExtraction::default();

    for (index, anchor) in anchors.iter().enumerate() {
        let Some(raw) = dom::get_attribute(anchor, "href") else {
            continue;
        };

        match resolve_link(&raw, base, resolution) {
            Ok(link) => {
                debug!(raw = %raw, resolved = %link, "link stored");
                out.links.push(link);
            }
            Err(reason) => {
                let warning = LinkWarning {
                    position: index + 1,
                    raw,
                    reason,
                };
                warn!("{warning}");
                out.warnings.push(warning);
            }
        }
    }

    debug!(
        anchors = anchors.len(),
        stored = out.links.len(),
        skipped = out.warnings.len(),
        "finished link extraction"
    );
    out
}

fn resolve_link(
    raw: &str,
    base: &BaseLocation,
    resolution: LinkResolution,
) -> Result<String, String> {
    match resolution {
        LinkResolution::Raw => Ok(raw.to_string()),
        LinkResolution::Absolute => base.resolve(raw).map_err(|e| e.to_string()),
    }
}
