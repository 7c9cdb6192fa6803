use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::context::ContextError;

/// Failures reported by a [`CommentRepository`](crate::repository::CommentRepository).
///
/// These carry storage detail and never leave the service layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no comment found with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0} is not implemented by this store")]
    NotImplemented(&'static str),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Stable, caller-facing comment errors.
///
/// Messages are fixed so that callers can classify failures without seeing
/// the underlying storage error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("could not fetch comment")]
    FetchFailed,

    #[error("could not post comment")]
    PostFailed,

    #[error("could not update comment")]
    UpdateFailed,

    #[error("could not delete comment")]
    DeleteFailed,

    #[error("no comment found with id {0}")]
    NotFound(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

pub type CommentResult<T> = Result<T, CommentError>;

/// Convert CommentError to AppError for standardized error responses
impl From<CommentError> for AppError {
    fn from(err: CommentError) -> Self {
        match err {
            // A failed fetch is reported as an absent resource.
            CommentError::FetchFailed => AppError::NotFound(err.to_string()),
            CommentError::NotFound(id) => AppError::NotFound(format!("Comment {} not found", id)),
            CommentError::NotImplemented(op) => {
                AppError::NotImplemented(format!("{} is not available", op))
            }
            CommentError::PostFailed | CommentError::UpdateFailed | CommentError::DeleteFailed => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
