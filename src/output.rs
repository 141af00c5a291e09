//! Output destinations for the report.
//!
//! The destination is picked once by the front end and passed down to
//! [`Report::render`](crate::Report::render).

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Where the report goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    #[default]
    Console,
    /// A file, created or truncated.
    File(PathBuf),
}

impl OutputTarget {
    /// Console for `None` or an empty path, file otherwise.
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::File(p.to_path_buf()),
            _ => Self::Console,
        }
    }

    /// Path used in error messages; `-` for the console.
    #[must_use]
    pub fn display_path(&self) -> PathBuf {
        match self {
            Self::Console => PathBuf::from("-"),
            Self::File(p) => p.clone(),
        }
    }

    /// Open the destination for writing.
    ///
    /// File sinks are not buffered so every line reaches the file as it is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Console => {
                debug!("output will be printed to the console");
                Ok(Box::new(io::stdout()))
            }
            Self::File(path) => {
                let file = File::create(path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened output file for writing");
                Ok(Box::new(file))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_path() {
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Console);
        assert_eq!(OutputTarget::from_path(Some(Path::new(""))), OutputTarget::Console);
        assert_eq!(
            OutputTarget::from_path(Some(Path::new("out.txt"))),
            OutputTarget::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_file_sink_writes_lines() {
        let path = std::env::temp_dir().join(format!("rs-pagescrape-sink-{}.txt", std::process::id()));
        let target = OutputTarget::File(path.clone());
        {
            let mut sink = target.open().expect("create temp file");
            writeln!(sink, "--- Links ---").expect("write");
        }
        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "--- Links ---\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unwritable_file_is_io_error() {
        let path = std::env::temp_dir().join("rs-pagescrape-missing-dir").join("nested").join("out.txt");
        let err = OutputTarget::File(path.clone()).open().err().expect("should fail");
        assert!(matches!(err, Error::Io { path: ref p, .. } if *p == path));
    }
}
