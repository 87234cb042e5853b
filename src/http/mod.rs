//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! View-initiated call
//!     → client.rs (build request against base URL)
//!     → interceptor.rs (credential policy, request ID, ...)
//!     → transport.rs (cookie jar, reqwest)
//!     → Network
//! ```

use reqwest::StatusCode;
use thiserror::Error;

pub mod client;
pub mod interceptor;
pub mod request;
pub mod transport;

pub use client::HttpClient;
pub use interceptor::{CredentialPolicy, Interceptor, InterceptorChain};
pub use request::{HttpResponse, OutgoingRequest, RequestIdInterceptor, X_REQUEST_ID};
pub use transport::{ReqwestTransport, Transport, TransportFuture};

/// Errors surfaced by the HTTP client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Base URL or request path cannot form a URL.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, timeout or protocol failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Body could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
