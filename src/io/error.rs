//! Error type shared by the chain readers and sequence writers.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "I/O error for {path_desc}: {source}",
        path_desc = PathDisplay(path)
    )]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed to parse {format} {path_desc}: {details} (line {line_number})",
        path_desc = PathDisplay(path)
    )]
    Parse {
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: String,
    },
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn parse(
        format: &'static str,
        path: Option<PathBuf>,
        line_number: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::Parse {
            format,
            path,
            line_number,
            details: details.into(),
        }
    }
}

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl<'a> fmt::Display for PathDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "file '{}'", p.display()),
            None => write!(f, "stream source"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_names_file_path() {
        let err = Error::from_io(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            Some(PathBuf::from("/tmp/out.seq")),
        );

        assert_eq!(err.to_string(), "I/O error for file '/tmp/out.seq': denied");
    }

    #[test]
    fn io_error_display_falls_back_to_stream_source() {
        let err = Error::from_io(std::io::Error::other("broken pipe"), None);

        assert_eq!(err.to_string(), "I/O error for stream source: broken pipe");
    }

    #[test]
    fn parse_error_display_includes_line_number() {
        let err = Error::parse("PDB", None, 42, "ATOM record too short");

        assert_eq!(
            err.to_string(),
            "failed to parse PDB stream source: ATOM record too short (line 42)"
        );
    }
}
