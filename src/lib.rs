//! CORS forwarding relay.
//!
//! A single-endpoint HTTP relay built with Tokio and Axum. A browser
//! client calls `GET /proxy?url=<target>`; the relay fetches the target
//! server-side and streams the response back with
//! `Access-Control-Allow-Origin: *` attached, so the caller can read
//! resources its origin policy would otherwise block.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌───────────────────────────────────┐
//!     ─────────────────────────▶│  http/server (Axum router,        │
//!                               │  tracing middleware)              │
//!                               │        │                          │
//!                               │        ▼                          │
//!                               │  http/relay (validate `url`,      │
//!                               │  fetch, stream body back)         │
//!     Client Response           │        │                          │
//!     ◀─────────────────────────│        ▼                          │
//!                               │  upstream (shared reqwest client, │──▶ Upstream
//!                               │  fixed Mozilla/5.0 user agent)    │    Server
//!                               └───────────────────────────────────┘
//! ```
//!
//! Each request is handled independently; nothing is cached or shared
//! across requests beyond the outbound client itself.

pub mod config;
pub mod http;
pub mod upstream;
