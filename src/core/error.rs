use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by every stage of the dataset preparation pipeline.
#[derive(Debug, Error)]
pub enum PrepareError {
    /// The archive could not be fetched: transport failure or a non-2xx status.
    #[error("failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    /// The downloaded archive is corrupt, or does not contain the expected CSV.
    #[error("failed to extract {}: {reason}", path.display())]
    Extraction { path: PathBuf, reason: String },

    /// A row of the raw CSV could not be read as a tweet record.
    #[error("failed to parse {} at line {line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// More rows were requested than the table holds.
    #[error("cannot sample {requested} rows from a table of {available}")]
    Sampling { requested: usize, available: usize },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PrepareError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepareError>;
