//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Greeting (uptime checks)
//! GET  /api/hello              - Greeting (uptime checks)
//! GET  /test                   - Store diagnostics
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (store reachable)
//!
//! # Content (store records, or seed content when empty/unreachable)
//! GET  /api/content/services   - Service offerings
//! GET  /api/content/projects   - Portfolio projects
//! GET  /api/blog               - Blog posts
//! GET  /api/testimonials       - Client testimonials
//!
//! # Submissions
//! POST /api/contact            - Contact form message
//! POST /api/newsletter         - Newsletter signup
//! ```

pub mod content;
pub mod diagnostics;
pub mod home;
pub mod submissions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the content routes router (mounted at `/api/content`).
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(content::services))
        .route("/projects", get(content::projects))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Greetings and health
        .route("/", get(home::root))
        .route("/api/hello", get(home::hello))
        .route("/health", get(home::health))
        .route("/health/ready", get(home::readiness))
        .route("/test", get(diagnostics::report))
        // Content
        .nest("/api/content", content_routes())
        .route("/api/blog", get(content::blog_posts))
        .route("/api/testimonials", get(content::testimonials))
        // Submissions
        .route("/api/contact", post(submissions::contact))
        .route("/api/newsletter", post(submissions::newsletter))
}
