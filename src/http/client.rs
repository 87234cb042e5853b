//! Shared HTTP client used by every view.
//!
//! # Responsibilities
//! - Resolve request paths against the configured API base URL
//! - Run the interceptor chain on every request, then hand off to the transport
//! - Record request metrics and logs
//!
//! # Design Decisions
//! - `send` is the single gate: no request reaches the transport without
//!   passing the chain
//! - Chain is applied before the transport future is created

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::HttpConfig;
use crate::http::interceptor::InterceptorChain;
use crate::http::request::{HttpResponse, OutgoingRequest};
use crate::http::transport::{ReqwestTransport, Transport};
use crate::http::HttpError;
use crate::observability::metrics;

/// HTTP client shared by the shell and its views.
pub struct HttpClient {
    base_url: Url,
    chain: Arc<InterceptorChain>,
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    pub fn new(base_url: Url, chain: InterceptorChain, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url,
            chain: Arc::new(chain),
            transport,
        }
    }

    /// Build a reqwest-backed client from configuration.
    pub fn from_config(config: &HttpConfig, chain: InterceptorChain) -> Result<Self, HttpError> {
        let base_url = parse_url(&config.base_url)?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(base_url, chain, Arc::new(transport)))
    }

    /// Prepare a request for `path`, relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> Result<OutgoingRequest, HttpError> {
        let url = self.base_url.join(path).map_err(|source| HttpError::InvalidUrl {
            url: path.to_string(),
            source,
        })?;
        Ok(OutgoingRequest::new(method, url))
    }

    /// Run the chain and send.
    pub async fn send(&self, mut req: OutgoingRequest) -> Result<HttpResponse, HttpError> {
        self.chain.apply(&mut req);

        let start_time = Instant::now();
        let method = req.method.to_string();
        let url = req.url.clone();
        let request_id = req.request_id().unwrap_or("none").to_string();

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            credentials = req.credentials,
            "Sending request"
        );

        match self.transport.send(req).await {
            Ok(response) => {
                metrics::record_request(&method, response.status.as_u16(), start_time);
                tracing::debug!(
                    request_id = %request_id,
                    status = %response.status,
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "Response received"
                );
                Ok(response)
            }
            Err(e) => {
                metrics::record_request(&method, 0, start_time);
                tracing::warn!(request_id = %request_id, url = %url, error = %e, "Request failed");
                Err(e)
            }
        }
    }

    pub async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let req = self.request(Method::GET, path)?;
        self.send(req).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.get(path).await?.json()
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, HttpError> {
        let req = self.request(Method::POST, path)?.with_json(body)?;
        self.send(req).await
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn interceptors(&self) -> &InterceptorChain {
        &self.chain
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("interceptors", &self.chain)
            .finish()
    }
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, HttpError> {
    Url::parse(raw).map_err(|source| HttpError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}
