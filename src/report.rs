//! Report assembly and rendering.
//!
//! A [`Report`] is the ordered list of labeled sections for the requested
//! mode. It is plain human-readable text; rendering writes it to whatever
//! sink the caller picked.

use std::io::{self, Write};

use tracing::warn;

use crate::options::ExtractMode;
use crate::result::ExtractResult;

/// Which section a block of lines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Extracted links.
    Links,
    /// Extracted headlines.
    Headlines,
}

impl SectionKind {
    /// Header line introducing the section.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Links => "--- Links ---",
            Self::Headlines => "--- Headlines ---",
        }
    }

    /// Line printed in place of entries when the section is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Links => "No links found or extracted.",
            Self::Headlines => "No headlines found or extracted.",
        }
    }
}

/// One rendered block of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section label.
    pub kind: SectionKind,
    /// Entries in extraction order, possibly empty.
    pub entries: Vec<String>,
}

impl Section {
    /// Header, then entries or the placeholder.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(self.kind.header());
        if self.entries.is_empty() {
            lines.push(self.kind.placeholder());
        } else {
            lines.extend(self.entries.iter().map(String::as_str));
        }
        lines
    }
}

/// The final report: zero, one or two sections, Links first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
    warning: Option<String>,
}

impl Report {
    /// Build the report for a recognized mode.
    ///
    /// A section appears if and only if `mode` requests it. A requested
    /// section whose sequence is missing from `result` renders as empty.
    #[must_use]
    pub fn assemble(mode: ExtractMode, result: &ExtractResult) -> Self {
        let mut sections = Vec::new();

        if mode.wants_links() {
            sections.push(Section {
                kind: SectionKind::Links,
                entries: result.links.clone().unwrap_or_default(),
            });
        }

        if mode.wants_headlines() {
            sections.push(Section {
                kind: SectionKind::Headlines,
                entries: result.headlines.clone().unwrap_or_default(),
            });
        }

        Self {
            sections,
            warning: None,
        }
    }

    /// Report for an unrecognized mode value: no sections, one warning.
    #[must_use]
    pub fn unrecognized_mode(value: &str) -> Self {
        Self {
            sections: Vec::new(),
            warning: Some(crate::Error::InvalidMode(value.to_string()).to_string()),
        }
    }

    /// Sections in render order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Warning the caller should surface instead of output, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Log the warning, if any, at `warn` level.
    ///
    /// Returns whether a warning was logged. Callers use this instead of
    /// rendering when the mode was not recognized.
    pub fn emit_warning(&self) -> bool {
        match &self.warning {
            Some(warning) => {
                warn!("{warning} No data extracted/printed.");
                true
            }
            None => false,
        }
    }

    /// All report lines in order, without separators.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.sections.iter().flat_map(Section::lines).collect()
    }

    /// Write the report to `sink`, one line at a time.
    ///
    /// Each section is preceded by a blank separator line. Nothing is
    /// written for a report without sections.
    ///
    /// # Errors
    ///
    /// Propagates any write or flush error from the sink.
    pub fn render<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        for section in &self.sections {
            writeln!(sink)?;
            for line in section.lines() {
                writeln!(sink, "{line}")?;
            }
        }
        sink.flush()
    }
}
