use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching and saving APOD images.
///
/// `Format` and `Client` abort a run before any network traffic. The rest are
/// per-page failures the driver records and moves past.
#[derive(Debug, Error)]
pub enum ApodError {
    #[error("invalid date {input:?}, expected six digits in YYMMDD form")]
    Format { input: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("no valid image found on the APOD page")]
    NotFound,

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stream {url} into {}: {source}", path.display())]
    Transfer {
        url: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
