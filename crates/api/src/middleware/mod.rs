//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. CORS (any origin, credentials allowed)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (recorded in the span, echoed in the response)

pub mod request_id;

use tower_http::cors::CorsLayer;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

/// CORS policy: any origin, method, and header, with credentials.
///
/// The request's `Origin` is mirrored back, since a literal `*` cannot be
/// combined with credentials.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
