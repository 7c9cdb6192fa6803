//! Readiness check backed by a real storage round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_comments::{CommentRepository, Context};
use std::time::Duration;

/// Upper bound for the storage ping behind `/ready`
const READY_TIMEOUT: Duration = Duration::from_secs(2);

/// Readiness endpoint: 200 when the comment store answers a ping, 503 otherwise.
pub async fn ready_handler<R>(State(state): State<AppState<R>>) -> Response
where
    R: CommentRepository + Clone + 'static,
{
    let ctx = Context::with_timeout(READY_TIMEOUT);

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            state
                .comments
                .ping(&ctx)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ready_router, test_support};
    use crate::state::AppState;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use database::postgres::DbErr;
    use domain_comments::{
        Comment, CommentRepository, Context, InMemoryCommentRepository, RepositoryError,
        RepositoryResult,
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Clone)]
    struct UnreachableRepository;

    #[async_trait]
    impl CommentRepository for UnreachableRepository {
        async fn get_comments(&self, _ctx: &Context) -> RepositoryResult<Vec<Comment>> {
            Ok(Vec::new())
        }

        async fn get_comment(&self, _ctx: &Context, id: &str) -> RepositoryResult<Comment> {
            Err(RepositoryError::NotFound(id.to_string()))
        }

        async fn ping(&self, _ctx: &Context) -> RepositoryResult<()> {
            Err(RepositoryError::Database(DbErr::Custom(
                "connection refused".to_string(),
            )))
        }
    }

    async fn get_ready<R: CommentRepository + Clone + 'static>(comments: R) -> (StatusCode, Value) {
        let state = AppState {
            config: test_support::config(),
            comments,
        };
        let response = ready_router(state)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_store_answers() {
        let (status, body) = get_ready(InMemoryCommentRepository::new()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_ping_fails() {
        let (status, body) = get_ready(UnreachableRepository).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }
}
