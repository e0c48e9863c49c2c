//! Guardian content search client.
//!
//! [`GuardianClient::search`] turns a [`SearchRequest`] into exactly one HTTP
//! GET against the configured endpoint and hands back a [`SearchResponse`]:
//! status, headers and body exactly as received.
//!
//! # Request shape
//!
//! ```text
//! GET {endpoint}?api-key=KEY[&q=..][&from-date=..][&to-date=..][&page=..]
//! ```
//!
//! Values are percent-encoded by the URL layer, so a timezone offset such as
//! `+05:00` goes out as `%2B05%3A00`.
//!
//! # What this client does not do
//!
//! - No retries, backoff, or timeout override: one attempt with the transport's defaults
//! - No validation of dates or page numbers: the service decides
//! - Non-2xx statuses are not errors here; they are returned like any other response

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{API_KEY_PARAM, SearchEnvelope, SearchRequest};
use crate::utils::{redact_api_key, truncate_for_log};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// HTTP client bound to one credential and endpoint.
#[derive(Debug, Clone)]
pub struct GuardianClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GuardianClient {
    /// Create a client with a default `reqwest::Client`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client around a caller-supplied `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The exact URL [`GuardianClient::search`] would request.
    ///
    /// The credential comes first, followed by the provided fields of
    /// `request`. Absent fields do not appear.
    pub fn request_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.config.endpoint().clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(API_KEY_PARAM, self.config.api_key());
            for (key, value) in request.wire_params() {
                query.append_pair(key, &value);
            }
        }
        url
    }

    /// Issue one search request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] when the request cannot be sent or
    /// the body cannot be read. Any HTTP status, including 4xx and 5xx, is a
    /// successful return.
    #[instrument(level = "info", skip_all, fields(
        query = request.query.as_deref(),
        from_date = request.from_date.as_deref(),
        to_date = request.to_date.as_deref(),
        page = request.page,
    ))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = self.request_url(request);
        debug!(url = %redact_api_key(&url), "Sending search request");

        let t0 = Instant::now();
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        let dt = t0.elapsed();

        if status.is_success() {
            info!(
                status = status.as_u16(),
                bytes = body.len(),
                elapsed_ms = dt.as_millis(),
                "Search request completed"
            );
        } else {
            warn!(
                status = status.as_u16(),
                elapsed_ms = dt.as_millis(),
                body_preview = %truncate_for_log(&body, 300),
                "Search request rejected by service"
            );
        }

        Ok(SearchResponse {
            status,
            headers,
            body,
        })
    }
}

/// Pass-through of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl SearchResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body text exactly as received.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as any JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body as the documented `{"response": {...}}` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] if the body is not an envelope.
    pub fn envelope(&self) -> Result<SearchEnvelope> {
        self.json()
    }
}
