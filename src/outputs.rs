//! Plain-text rendering of a search payload for the command-line front end.
//!
//! # Format
//!
//! ```text
//! 2024-03-01T06:00:00Z  Deliveroo riders strike over pay
//! 2024-02-27T17:12:45Z  Deliveroo shares rise after results
//! page 1 of 42 (415 results)
//! ```

use crate::models::SearchPayload;
use std::fmt::Write as _;

/// One line per result (`<webPublicationDate>  <webTitle>`), then a paging
/// footer when the service reported the paging fields.
pub fn render_summary(payload: &SearchPayload) -> String {
    let mut out = String::new();
    for result in &payload.results {
        let _ = writeln!(out, "{}  {}", result.web_publication_date, result.web_title);
    }
    if let Some(footer) = paging_footer(payload) {
        out.push_str(&footer);
        out.push('\n');
    }
    out
}

fn paging_footer(payload: &SearchPayload) -> Option<String> {
    let current = payload.current_page?;
    let pages = payload.pages?;
    Some(match payload.total {
        Some(total) => format!("page {current} of {pages} ({total} results)"),
        None => format!("page {current} of {pages}"),
    })
}
