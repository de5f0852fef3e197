//! Request correlation IDs.
//!
//! Every request gets an ID, taken from `x-request-id` when an upstream proxy
//! supplied a usable one and generated otherwise. The ID is recorded on the
//! `http_request` span, tagged on the Sentry scope, and echoed in the
//! response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest inbound ID that is accepted as-is.
const MAX_INBOUND_LEN: usize = 128;

/// The correlation ID of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Use the inbound header if present and sane, otherwise generate one.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_INBOUND_LEN)
            .map_or_else(Self::generate, |id| Self(id.to_string()))
    }

    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolve the request's [`RequestId`] and echo it in the response.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", request_id.as_str());
    });

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headers(id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(id).unwrap());
        headers
    }

    #[test]
    fn test_inbound_id_is_kept() {
        assert_eq!(RequestId::from_headers(&headers("abc-123")).as_str(), "abc-123");
    }

    #[test]
    fn test_missing_id_is_generated() {
        let id = RequestId::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_blank_or_oversized_id_is_replaced() {
        let blank = RequestId::from_headers(&headers("   "));
        assert!(Uuid::parse_str(blank.as_str()).is_ok());

        let long = "x".repeat(MAX_INBOUND_LEN + 1);
        let replaced = RequestId::from_headers(&headers(&long));
        assert_ne!(replaced.as_str(), long);
    }
}
