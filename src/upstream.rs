//! Outbound fetch subsystem.
//!
//! # Responsibilities
//! - Build the shared outbound HTTP client
//! - Fix the user agent sent on every fetch
//! - Typed access to the upstream headers the relay forwards
//!
//! # Design Decisions
//! - One client shared across all requests; connection reuse is
//!   whatever the client defaults to
//! - No timeout on outbound fetches; a slow upstream holds only its
//!   own request open

use axum::http::HeaderValue;
use reqwest::header;

/// User agent sent on every outbound fetch. Some upstreams reject
/// requests from obviously non-browser clients.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Build the shared outbound client.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// The upstream `content-type` header, if the upstream supplied one.
pub fn content_type(response: &reqwest::Response) -> Option<&HeaderValue> {
    response.headers().get(header::CONTENT_TYPE)
}
