//! Errors raised while hashing jars, querying registries, and writing output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JarBomError {
    #[error("Failed to read '{}': {source}", path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is neither a file nor a directory", path.display())]
    InvalidInput { path: PathBuf },

    #[error("{registry} request to {url} failed: {source}")]
    Http {
        registry: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{registry} returned HTTP {status} for {url}")]
    UnexpectedStatus {
        registry: &'static str,
        url: String,
        status: u16,
    },

    #[error("Failed to parse {registry} API response: {source}")]
    ApiResponse {
        registry: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to write POM: {0}")]
    PomWrite(#[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JarBomError>;
