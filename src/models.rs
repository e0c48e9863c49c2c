//! Request options and the read model of the search response envelope.
//!
//! - [`SearchRequest`]: optional search parameters, mapped onto wire keys
//! - [`SearchEnvelope`]: the `{"response": {...}}` object returned by the service
//! - [`SearchPayload`]: result set plus paging metadata, or an error `message`
//! - [`SearchResult`]: one content item
//!
//! The response structs use camelCase field names on the wire to match the
//! Guardian JSON, hence the `rename_all` attributes. Fields the service may
//! omit are `Option`s or default to empty.

use crate::utils::parse_publication_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire key for the API credential.
pub const API_KEY_PARAM: &str = "api-key";
/// Wire key for the free-text query.
pub const QUERY_PARAM: &str = "q";
/// Wire key for the range-start date or datetime.
pub const FROM_DATE_PARAM: &str = "from-date";
/// Wire key for the range-end date or datetime.
pub const TO_DATE_PARAM: &str = "to-date";
/// Wire key for the 1-based page index.
pub const PAGE_PARAM: &str = "page";

/// Optional parameters for one search call.
///
/// Every field is independently optional; a `None` field is left out of the
/// request entirely. Values are passed through unchecked, so a malformed date
/// or an out-of-range page reaches the service and its 400 comes back to the
/// caller.
///
/// # Examples
///
/// ```
/// use guardian_news_search::SearchRequest;
///
/// let request = SearchRequest::new().query("Deliveroo").from_date("2024-01-01").page(2);
/// assert_eq!(
///     request.wire_params(),
///     vec![
///         ("q", "Deliveroo".to_string()),
///         ("from-date", "2024-01-01".to_string()),
///         ("page", "2".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Option<String>,
    /// ISO-8601 date or datetime, optionally with an offset.
    pub from_date: Option<String>,
    /// ISO-8601 date or datetime, optionally with an offset.
    pub to_date: Option<String>,
    /// 1-based page index.
    pub page: Option<u32>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn from_date(mut self, from_date: impl Into<String>) -> Self {
        self.from_date = Some(from_date.into());
        self
    }

    pub fn to_date(mut self, to_date: impl Into<String>) -> Self {
        self.to_date = Some(to_date.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// The provided fields as `(wire key, value)` pairs, in a stable order.
    /// The credential is not included; the client adds it.
    pub fn wire_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(query) = &self.query {
            params.push((QUERY_PARAM, query.clone()));
        }
        if let Some(from_date) = &self.from_date {
            params.push((FROM_DATE_PARAM, from_date.clone()));
        }
        if let Some(to_date) = &self.to_date {
            params.push((TO_DATE_PARAM, to_date.clone()));
        }
        if let Some(page) = self.page {
            params.push((PAGE_PARAM, page.to_string()));
        }
        params
    }
}

/// Outer JSON object wrapping every search response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchEnvelope {
    pub response: SearchPayload,
}

/// Body of the envelope: results and paging metadata on success, a `message`
/// on failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    /// `"ok"` or `"error"`.
    pub status: String,
    pub user_tier: Option<String>,
    pub total: Option<u64>,
    pub start_index: Option<u64>,
    pub page_size: Option<u32>,
    pub current_page: Option<u32>,
    pub pages: Option<u32>,
    pub order_by: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// Human-readable error text, present when `status` is `"error"`.
    pub message: Option<String>,
}

impl SearchPayload {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// A single content item.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub section_id: Option<String>,
    pub section_name: Option<String>,
    /// UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
    pub web_publication_date: String,
    pub web_title: String,
    pub web_url: Option<String>,
    pub api_url: Option<String>,
}

impl SearchResult {
    /// Parse [`SearchResult::web_publication_date`].
    pub fn published_at(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        parse_publication_date(&self.web_publication_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_empty_request_has_no_params() {
        assert!(SearchRequest::new().wire_params().is_empty());
    }

    #[test]
    fn test_wire_params_use_hyphenated_dates() {
        let request = SearchRequest::new()
            .from_date("2010-07-20T10:00:00+05:00")
            .to_date("2011-01-01");
        assert_eq!(
            request.wire_params(),
            vec![
                ("from-date", "2010-07-20T10:00:00+05:00".to_string()),
                ("to-date", "2011-01-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_wire_params_pass_values_unchecked() {
        let request = SearchRequest::new().from_date("xxxx-yy-zz").page(0);
        assert_eq!(
            request.wire_params(),
            vec![("from-date", "xxxx-yy-zz".to_string()), ("page", "0".to_string())]
        );
    }

    #[test]
    fn test_deserialize_ok_envelope() {
        let body = json!({
            "response": {
                "status": "ok",
                "userTier": "developer",
                "total": 1,
                "startIndex": 1,
                "pageSize": 10,
                "currentPage": 1,
                "pages": 1,
                "orderBy": "relevance",
                "results": [{
                    "id": "business/2024/mar/01/deliveroo-riders",
                    "type": "article",
                    "sectionId": "business",
                    "sectionName": "Business",
                    "webPublicationDate": "2024-03-01T06:00:00Z",
                    "webTitle": "Deliveroo riders strike",
                    "webUrl": "https://www.theguardian.com/business/2024/mar/01/deliveroo-riders",
                    "apiUrl": "https://content.guardianapis.com/business/2024/mar/01/deliveroo-riders",
                    "isHosted": false
                }]
            }
        });
        let envelope: SearchEnvelope = serde_json::from_value(body).unwrap();
        let payload = envelope.response;
        assert!(payload.is_ok());
        assert_eq!(payload.page_size, Some(10));
        assert_eq!(payload.pages, Some(1));
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].kind.as_deref(), Some("article"));
        assert_eq!(payload.message, None);

        let published = payload.results[0].published_at().unwrap();
        assert_eq!((published.year(), published.month(), published.day()), (2024, 3, 1));
        assert_eq!(published.hour(), 6);
    }

    #[test]
    fn test_deserialize_error_envelope() {
        let body = json!({
            "response": {
                "status": "error",
                "message": "requested page is beyond the number of available pages"
            }
        });
        let envelope: SearchEnvelope = serde_json::from_value(body).unwrap();
        assert!(!envelope.response.is_ok());
        assert!(envelope.response.results.is_empty());
        assert_eq!(
            envelope.response.message.as_deref(),
            Some("requested page is beyond the number of available pages")
        );
    }
}
