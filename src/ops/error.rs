use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error writing sequence file '{}': {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write sequences to {destination}: {source}")]
    Write {
        destination: String,
        #[source]
        source: crate::io::Error,
    },
}

impl Error {
    pub fn destination_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DestinationUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn write(destination: impl ToString, source: crate::io::Error) -> Self {
        Self::Write {
            destination: destination.to_string(),
            source,
        }
    }
}
