//! # Guardian News Search
//!
//! A thin client for the Guardian content search API plus the pieces its
//! conformance tests and command-line front end are built from.
//!
//! ## Usage
//!
//! ```no_run
//! use guardian_news_search::{ClientConfig, GuardianClient, SearchRequest};
//!
//! # async fn run() -> Result<(), guardian_news_search::Error> {
//! let client = GuardianClient::new(ClientConfig::from_env()?);
//! let response = client.search(&SearchRequest::new().query("Deliveroo")).await?;
//! if response.is_success() {
//!     for result in response.envelope()?.response.results {
//!         println!("{}", result.web_title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout
//!
//! - [`config`]: credential and endpoint resolution
//! - [`models`]: request options, wire keys, response envelope
//! - [`api`]: the request issuer
//! - [`outputs`]: plain-text rendering for the CLI
//! - [`utils`]: date helpers and log formatting

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod outputs;
pub mod utils;

pub use api::{GuardianClient, SearchResponse};
pub use config::{ClientConfig, FileConfig};
pub use error::{Error, Result};
pub use models::{SearchEnvelope, SearchPayload, SearchRequest, SearchResult};
