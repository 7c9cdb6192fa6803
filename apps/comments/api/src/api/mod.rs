//! API routes module
//!
//! Composes the domain routers under `/api` (the prefix is added by
//! `create_router`).

pub mod health;

use crate::state::AppState;
use axum::{Router, routing::get};
use domain_comments::{CommentRepository, CommentService, handlers};

/// Create all API routes
pub fn routes<R>(state: &AppState<R>) -> Router
where
    R: CommentRepository + Clone + 'static,
{
    let comments = CommentService::new(state.comments.clone());

    Router::new().nest(
        handlers::URL,
        handlers::router(comments, state.config.request_timeout),
    )
}

/// Readiness route, merged at the root next to `/health`
pub fn ready_router<R>(state: AppState<R>) -> Router
where
    R: CommentRepository + Clone + 'static,
{
    Router::new()
        .route("/ready", get(health::ready_handler::<R>))
        .with_state(state)
}
