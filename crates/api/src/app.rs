//! Router assembly.

use axum::Router;
use axum::middleware::from_fn;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{cors_layer, request_id_middleware};
use crate::routes;
use crate::state::AppState;

/// Build the full application router with its middleware stack.
///
/// Error-tracking layers are left to the binary so tests can serve the
/// same router without a Sentry client.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(cors_layer())
        .with_state(state)
}
