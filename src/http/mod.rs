//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing middleware)
//!     → relay.rs (validate `url` parameter, fetch, stream back)
//!     → Send to client
//! ```

pub mod relay;
pub mod server;

pub use relay::{RelayError, RelayParams};
pub use server::HttpServer;
