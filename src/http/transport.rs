//! Network transport behind the HTTP client.
//!
//! # Responsibilities
//! - Hand intercepted requests to the network
//! - Honour the credentials flag with a shared cookie jar
//!
//! # Design Decisions
//! - Two clients share one configuration: the credentialed one owns the
//!   cookie jar, the anonymous one has no cookie store, so an
//!   uncredentialed request neither sends nor stores cookies
//! - The jar is applied by reqwest on every redirect hop, and cookies are
//!   stored against the URL of the response that set them
//! - Responses are fully buffered; view payloads are small JSON documents

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;

use crate::config::HttpConfig;
use crate::http::request::{HttpResponse, OutgoingRequest};
use crate::http::HttpError;

pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;

/// Sends a request that has already been through the interceptor chain.
pub trait Transport: Send + Sync {
    fn send(&self, req: OutgoingRequest) -> TransportFuture<'_>;
}

/// reqwest-backed transport with browser-style credential handling.
#[derive(Clone)]
pub struct ReqwestTransport {
    /// Reads and writes the jar on every hop, redirects included.
    credentialed: reqwest::Client,
    /// Never sees the jar.
    anonymous: reqwest::Client,
    jar: Arc<Jar>,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let jar = Arc::new(Jar::default());

        let credentialed = Self::builder(config)
            .cookie_provider(jar.clone())
            .build()?;
        let anonymous = Self::builder(config).build()?;

        Ok(Self {
            credentialed,
            anonymous,
            jar,
        })
    }

    fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
    }

    /// Cookie jar shared by all credentialed requests.
    pub fn jar(&self) -> Arc<Jar> {
        self.jar.clone()
    }

    async fn execute(&self, req: OutgoingRequest) -> Result<HttpResponse, HttpError> {
        let OutgoingRequest {
            method,
            url,
            headers,
            body,
            credentials,
        } = req;

        let client = if credentials {
            &self.credentialed
        } else {
            &self.anonymous
        };

        let mut builder = client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        tracing::trace!(final_url = %response.url(), credentials, "Response received");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, req: OutgoingRequest) -> TransportFuture<'_> {
        Box::pin(self.execute(req))
    }
}
