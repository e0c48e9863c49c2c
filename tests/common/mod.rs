//! Shared fixtures and assertions for the stubbed and live search suites.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use guardian_news_search::{ClientConfig, GuardianClient, SearchPayload, SearchResponse};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";
pub const SEARCH_PATH: &str = "/search";

/// Message the service returns for a page index past the last page.
pub const PAGE_ERROR: &str = "requested page is beyond the number of available pages";

/// Message the service returns for an unparseable date bound.
pub const DATE_ERROR: &str = "Dates must be an ISO8601 date or datetime (e.g. 2010-07-20 \
     or 2010-07-20T10:00:00+05:00). Remember to URL-encode the '+' \
     if you provide a timezone offset.";

/// Client pointed at `server` with [`TEST_KEY`].
pub fn stub_client(server: &MockServer) -> GuardianClient {
    let config = ClientConfig::new(TEST_KEY)
        .expect("test key is not blank")
        .with_endpoint(&format!("{}{}", server.uri(), SEARCH_PATH))
        .expect("mock server uri is absolute");
    GuardianClient::new(config)
}

/// Client for the real service, credential from `API_KEY`.
pub fn live_client() -> GuardianClient {
    let config = ClientConfig::from_env().expect("API_KEY must be set to run the live suite");
    GuardianClient::new(config)
}

/// Successful envelope with one result per `(title, webPublicationDate)` pair.
pub fn ok_body(results: &[(&str, &str)], current_page: u32, pages: u32) -> Value {
    let results: Vec<Value> = results
        .iter()
        .enumerate()
        .map(|(i, (title, published))| {
            json!({
                "id": format!("news/item-{i}"),
                "type": "article",
                "sectionId": "news",
                "sectionName": "News",
                "webPublicationDate": published,
                "webTitle": title,
                "webUrl": format!("https://www.theguardian.com/news/item-{i}"),
                "apiUrl": format!("https://content.guardianapis.com/news/item-{i}"),
                "isHosted": false,
                "pillarId": "pillar/news",
                "pillarName": "News"
            })
        })
        .collect();
    let total = results.len() as u32 * pages;
    json!({
        "response": {
            "status": "ok",
            "userTier": "developer",
            "total": total,
            "startIndex": 1,
            "pageSize": results.len(),
            "currentPage": current_page,
            "pages": pages,
            "orderBy": "relevance",
            "results": results
        }
    })
}

/// Error envelope as the service sends it with a 400.
pub fn error_body(message: &str) -> Value {
    json!({
        "response": {
            "status": "error",
            "message": message
        }
    })
}

/// Decode `response` as an envelope and return its payload.
pub fn payload(response: &SearchResponse) -> SearchPayload {
    response
        .envelope()
        .expect("body should be a search envelope")
        .response
}

pub fn assert_titles_contain(payload: &SearchPayload, term: &str) {
    for result in &payload.results {
        assert!(
            result.web_title.contains(term),
            "title {:?} does not contain {:?}",
            result.web_title,
            term
        );
    }
}

pub fn assert_published_on_or_after(payload: &SearchPayload, bound: DateTime<Utc>) {
    for result in &payload.results {
        let published = result.published_at().expect("webPublicationDate parses");
        assert!(published >= bound, "{published} is earlier than {bound}");
    }
}

pub fn assert_published_on_or_before(payload: &SearchPayload, bound: DateTime<Utc>) {
    for result in &payload.results {
        let published = result.published_at().expect("webPublicationDate parses");
        assert!(published <= bound, "{published} is later than {bound}");
    }
}

pub fn assert_page_size_matches(payload: &SearchPayload) {
    let page_size = payload.page_size.expect("pageSize reported") as usize;
    assert_eq!(payload.results.len(), page_size);
}

/// Query parameters of every request the stub received, in arrival order.
pub async fn sent_params(server: &MockServer) -> Vec<Vec<(String, String)>> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|request| request.url.query_pairs().into_owned().collect())
        .collect()
}

/// Raw (still percent-encoded) query strings of every received request.
pub async fn sent_queries(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|request| request.url.query().unwrap_or_default().to_string())
        .collect()
}
