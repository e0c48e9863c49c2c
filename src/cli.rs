//! Command-line interface definitions.
//!
//! Every search option maps one-to-one onto a [`SearchRequest`] field. The
//! credential and endpoint can also come from environment variables or a
//! YAML config file; flags and environment win over the file.

use crate::config::{API_KEY_VAR, ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_VAR, FileConfig};
use crate::error::{Error, Result};
use crate::models::SearchRequest;
use clap::Parser;

/// Run one Guardian content search and print the results.
///
/// # Examples
///
/// ```sh
/// # Latest content
/// guardian_news_search
///
/// # Titles mentioning Deliveroo since the start of 2024, second page
/// guardian_news_search -q Deliveroo --from-date 2024-01-01 -p 2
///
/// # Raw JSON body
/// guardian_news_search -q Deliveroo --raw
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Free-text search term
    #[arg(short, long)]
    pub query: Option<String>,

    /// Earliest publication date or datetime (ISO-8601)
    #[arg(long)]
    pub from_date: Option<String>,

    /// Latest publication date or datetime (ISO-8601)
    #[arg(long)]
    pub to_date: Option<String>,

    /// 1-based page index
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Guardian API key
    #[arg(long, env = API_KEY_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint
    #[arg(long, env = ENDPOINT_VAR)]
    pub endpoint: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the response body exactly as received
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    /// The search options given on the command line.
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            from_date: self.from_date.clone(),
            to_date: self.to_date.clone(),
            page: self.page,
        }
    }

    /// Merge flags/environment with the optional config file.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingCredential`] when neither source has a key,
    /// and with the file or endpoint errors of [`FileConfig`] and
    /// [`ClientConfig`].
    pub fn client_config(&self) -> Result<ClientConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let api_key = self
            .api_key
            .clone()
            .or(file.api_key)
            .ok_or(Error::MissingCredential { var: API_KEY_VAR })?;
        let endpoint = self
            .endpoint
            .clone()
            .or(file.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        ClientConfig::new(api_key)?.with_endpoint(&endpoint)
    }
}
