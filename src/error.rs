//! Error type shared by the client, configuration, and response helpers.
//!
//! Remote validation failures (status 400 with a `message` field) are *not*
//! represented here: they come back as ordinary [`crate::SearchResponse`]
//! values so callers see exactly what the service said.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was available. Raised before any request is attempted.
    #[error("missing API credential: set {var} or pass an API key explicitly")]
    MissingCredential { var: &'static str },

    /// The configured search endpoint is not a valid absolute URL.
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The YAML config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML config file is not valid.
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// DNS, connection, timeout, or body-read failure from the HTTP layer.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the requested shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
