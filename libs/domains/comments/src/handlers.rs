use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        NotImplementedResponse,
    },
};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;

use crate::context::Context;
use crate::error::CommentResult;
use crate::models::{Comment, MessageResponse, PostCommentRequest, UpdateCommentRequest};
use crate::repository::CommentRepository;
use crate::service::CommentService;

/// OpenAPI tag shared by all comment endpoints
pub const TAG: &str = "comments";

/// Mount point for the comment routes under `/api`
pub const URL: &str = "/v1/comments";

/// OpenAPI documentation for Comments API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_comments,
        post_comment,
        get_comment,
        update_comment,
        delete_comment,
    ),
    components(
        schemas(Comment, PostCommentRequest, UpdateCommentRequest, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            NotImplementedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Comment management endpoints")
    )
)]
pub struct ApiDoc;

struct HandlerState<R: CommentRepository> {
    service: CommentService<R>,
    request_timeout: Duration,
}

impl<R: CommentRepository> HandlerState<R> {
    fn context(&self) -> Context {
        Context::with_timeout(self.request_timeout)
    }
}

/// Create the comment router with all HTTP endpoints
///
/// Each request runs under a fresh [`Context`] that expires after
/// `request_timeout` and is cancelled if the client goes away.
pub fn router<R: CommentRepository + 'static>(
    service: CommentService<R>,
    request_timeout: Duration,
) -> Router {
    let state = Arc::new(HandlerState {
        service,
        request_timeout,
    });

    Router::new()
        .route("/", get(get_comments::<R>).post(post_comment::<R>))
        .route(
            "/{id}",
            get(get_comment::<R>)
                .put(update_comment::<R>)
                .delete(delete_comment::<R>),
        )
        .with_state(state)
}

/// List all comments
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of comments", body = Vec<Comment>),
        (status = 404, response = NotFoundResponse),
    )
)]
async fn get_comments<R: CommentRepository>(
    State(state): State<Arc<HandlerState<R>>>,
) -> CommentResult<Json<Vec<Comment>>> {
    let ctx = state.context();
    let _guard = ctx.drop_guard();

    let comments = state.service.get_comments(&ctx).await?;
    Ok(Json(comments))
}

/// Create a new comment
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = PostCommentRequest,
    responses(
        (status = 201, description = "Comment created successfully", body = Comment),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = NotImplementedResponse)
    )
)]
async fn post_comment<R: CommentRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    ValidatedJson(input): ValidatedJson<PostCommentRequest>,
) -> CommentResult<impl IntoResponse> {
    let ctx = state.context();
    let _guard = ctx.drop_guard();

    let comment = state.service.post_comment(&ctx, input.into()).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Get a comment by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = Comment),
        (status = 404, response = NotFoundResponse),
    )
)]
async fn get_comment<R: CommentRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(id): Path<String>,
) -> CommentResult<Json<Comment>> {
    let ctx = state.context();
    let _guard = ctx.drop_guard();

    let comment = state.service.get_comment(&ctx, &id).await?;
    Ok(Json(comment))
}

/// Replace a comment's slug, author and body
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated successfully", body = Comment),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = NotImplementedResponse)
    )
)]
async fn update_comment<R: CommentRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateCommentRequest>,
) -> CommentResult<Json<Comment>> {
    let ctx = state.context();
    let _guard = ctx.drop_guard();

    let comment = state
        .service
        .update_comment(&ctx, &id, input.into())
        .await?;
    Ok(Json(comment))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted successfully", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 501, response = NotImplementedResponse)
    )
)]
async fn delete_comment<R: CommentRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(id): Path<String>,
) -> CommentResult<Json<MessageResponse>> {
    let ctx = state.context();
    let _guard = ctx.drop_guard();

    state.service.delete_comment(&ctx, &id).await?;
    Ok(Json(MessageResponse::deleted()))
}
