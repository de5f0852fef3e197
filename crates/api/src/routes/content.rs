//! Content listing handlers.
//!
//! All four endpoints share one contract: `{"items": [...]}`, stored records
//! when there are any, seed content otherwise. They never fail.

use axum::{Json, extract::State};
use tracing::instrument;

use nexora_core::{BlogPost, Project, Service, Testimonial};

use crate::content::{ListResponse, list};
use crate::state::AppState;

/// GET /api/content/services
#[instrument(skip(state))]
pub async fn services(State(state): State<AppState>) -> Json<ListResponse<Service>> {
    Json(list(state.store(), &state.fallback().services).await)
}

/// GET /api/content/projects
#[instrument(skip(state))]
pub async fn projects(State(state): State<AppState>) -> Json<ListResponse<Project>> {
    Json(list(state.store(), &state.fallback().projects).await)
}

/// GET /api/blog
#[instrument(skip(state))]
pub async fn blog_posts(State(state): State<AppState>) -> Json<ListResponse<BlogPost>> {
    Json(list(state.store(), &state.fallback().posts).await)
}

/// GET /api/testimonials
#[instrument(skip(state))]
pub async fn testimonials(State(state): State<AppState>) -> Json<ListResponse<Testimonial>> {
    Json(list(state.store(), &state.fallback().testimonials).await)
}
