//! The forwarding handler.
//!
//! # Responsibilities
//! - Validate the `url` query parameter
//! - Fetch the target URL through the shared outbound client
//! - Relay the upstream body to the caller as a stream
//! - Attach `Access-Control-Allow-Origin: *` and the upstream
//!   content type to the relayed response
//!
//! # Design Decisions
//! - Streaming responses avoid buffering the upstream body
//! - Upstream error statuses (4xx/5xx) are relayed like any other
//!   response; only fetch-establishment failures produce a 500
//! - A stream failure after headers are sent terminates the
//!   connection; there is no recovery path at that point

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use thiserror::Error;

use crate::http::server::AppState;
use crate::upstream;

/// Query parameters accepted by the relay route.
#[derive(Debug, Deserialize)]
pub struct RelayParams {
    /// Target URL to fetch. Absent and empty are treated alike.
    #[serde(default)]
    pub url: String,
}

/// Errors surfaced to the caller by the relay handler.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The `url` query parameter was absent or empty.
    #[error("Missing URL")]
    MissingUrl,

    /// The outbound fetch failed before an upstream response arrived
    /// (bad URL, DNS, connect, TLS). The error text goes to the
    /// caller verbatim.
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingUrl => StatusCode::BAD_REQUEST,
            RelayError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Main relay handler.
/// Validates the target URL, fetches it, and streams the body back.
pub async fn relay_handler(
    State(state): State<AppState>,
    Query(params): Query<RelayParams>,
) -> Result<Response, RelayError> {
    if params.url.is_empty() {
        return Err(RelayError::MissingUrl);
    }

    tracing::debug!(url = %params.url, "Relaying request");

    let upstream_response = state.client.get(&params.url).send().await.map_err(|e| {
        tracing::error!(url = %params.url, error = %e, "Upstream fetch failed");
        e
    })?;

    let content_type = upstream::content_type(&upstream_response).cloned();

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    if let Some(value) = content_type {
        builder = builder.header(header::CONTENT_TYPE, value);
    }

    // All header values above are valid, so the builder cannot fail.
    Ok(builder
        .body(Body::from_stream(upstream_response.bytes_stream()))
        .unwrap())
}
