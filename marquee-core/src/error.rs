use std::path::PathBuf;

use marquee_model::MovieId;
use thiserror::Error;

/// Failures while loading or assembling the catalogue. Queries never fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read data file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("duplicate movie id {0}")]
    DuplicateId(MovieId),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
