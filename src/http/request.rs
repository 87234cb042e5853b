//! Outgoing request and response types.
//!
//! # Responsibilities
//! - Carry the mutable transport options interceptors act on
//! - Generate a unique request ID for correlation with server logs
//!
//! # Design Decisions
//! - Credentials are a plain flag on the request, not a transport setting,
//!   so interceptors can be tested without a network
//! - An existing x-request-id is never overwritten

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::http::interceptor::Interceptor;
use crate::http::HttpError;

/// Header name for request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// A request on its way through the interceptor chain.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    /// Send cookies with the request and accept cookies from the response.
    pub credentials: bool,
}

impl OutgoingRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            credentials: false,
        }
    }

    /// Attach a JSON body and the matching content type.
    pub fn with_json<T: serde::Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        self.body = Some(serde_json::to_vec(body)?);
        self.headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(self)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.headers.get(X_REQUEST_ID).and_then(|v| v.to_str().ok())
    }
}

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body, failing on non-2xx statuses.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        if !self.status.is_success() {
            return Err(HttpError::Status {
                status: self.status,
                body: self.text(),
            });
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Stamps a UUID v4 request ID on requests that lack one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdInterceptor;

impl Interceptor for RequestIdInterceptor {
    fn name(&self) -> &'static str {
        "request_id"
    }

    fn intercept(&self, req: &mut OutgoingRequest) {
        if req.headers.contains_key(X_REQUEST_ID) {
            return;
        }
        let id = Uuid::new_v4().to_string();
        if let Ok(value) = HeaderValue::from_str(&id) {
            req.headers.insert(X_REQUEST_ID, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OutgoingRequest {
        OutgoingRequest::new(Method::GET, Url::parse("http://localhost:8081/profile").unwrap())
    }

    #[test]
    fn test_request_id_added() {
        let mut req = request();
        RequestIdInterceptor.intercept(&mut req);
        let id = req.request_id().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_request_id_preserved() {
        let mut req = request();
        req.headers
            .insert(X_REQUEST_ID, HeaderValue::from_static("upstream-id"));
        RequestIdInterceptor.intercept(&mut req);
        assert_eq!(req.request_id(), Some("upstream-id"));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = request()
            .with_json(&serde_json::json!({ "email": "a@b.c" }))
            .unwrap();
        assert_eq!(
            req.headers.get(reqwest::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(req.body.unwrap(), br#"{"email":"a@b.c"}"#.to_vec());
    }

    #[test]
    fn test_json_rejects_error_status() {
        let resp = HttpResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: HeaderMap::new(),
            body: b"system error".to_vec(),
        };
        match resp.json::<serde_json::Value>() {
            Err(HttpError::Status { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "system error");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
