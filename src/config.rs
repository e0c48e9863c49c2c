//! Client configuration: API credential and search endpoint.
//!
//! The credential is an explicit value carried by [`ClientConfig`]. It can be
//! resolved from the process environment ([`ClientConfig::from_env`]), from any
//! key/value lookup ([`ClientConfig::from_lookup`]), or supplied directly.
//! A YAML file ([`FileConfig`]) can provide defaults for the command-line
//! front end.
//!
//! # Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `API_KEY` | Guardian API key (required) |
//! | `GUARDIAN_API_ENDPOINT` | Override for the search endpoint (optional) |

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, instrument};
use url::Url;

/// Live Guardian content search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_VAR: &str = "GUARDIAN_API_ENDPOINT";

/// Resolved configuration for a [`crate::GuardianClient`].
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    endpoint: Url,
}

impl ClientConfig {
    /// Create a configuration for the live endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] if `api_key` is empty or blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingCredential { var: API_KEY_VAR });
        }
        Ok(Self {
            api_key,
            endpoint: Url::parse(DEFAULT_ENDPOINT)?,
        })
    }

    /// Point the client at a different search endpoint (a stub server, a proxy).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `endpoint` is not an absolute URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] when `API_KEY` is unset or blank,
    /// and [`Error::InvalidEndpoint`] when `GUARDIAN_API_ENDPOINT` is malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`].
    #[instrument(level = "debug", skip_all)]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(Error::MissingCredential { var: API_KEY_VAR })?;
        let config = Self::new(api_key)?;
        match lookup(ENDPOINT_VAR) {
            Some(endpoint) if !endpoint.trim().is_empty() => {
                debug!(%endpoint, "Using endpoint override");
                config.with_endpoint(endpoint.trim())
            }
            _ => Ok(config),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

/// Optional YAML config file.
///
/// ```yaml
/// api_key: your-guardian-key
/// endpoint: https://content.guardianapis.com/search
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

impl FileConfig {
    /// Read and parse a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigFile`] if the file cannot be read and
    /// [`Error::ConfigParse`] if it is not valid YAML for this shape.
    #[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse YAML text. An empty document yields an empty config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed YAML.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
