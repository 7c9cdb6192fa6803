use std::sync::Arc;
use tracing::instrument;

use crate::context::Context;
use crate::error::{CommentError, CommentResult, RepositoryError};
use crate::models::Comment;
use crate::repository::CommentRepository;

/// Service layer for comments
///
/// Holds no state of its own. Every repository failure is logged here with its
/// cause and replaced by a fixed [`CommentError`]; nothing is retried.
pub struct CommentService<R: CommentRepository> {
    repository: Arc<R>,
}

impl<R: CommentRepository> Clone for CommentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get all comments
    #[instrument(skip_all)]
    pub async fn get_comments(&self, ctx: &Context) -> CommentResult<Vec<Comment>> {
        self.repository.get_comments(ctx).await.map_err(|e| {
            tracing::error!(error = %e, "an error occurred fetching the comments");
            translate(e, CommentError::FetchFailed)
        })
    }

    /// Get a comment by ID
    #[instrument(skip(self, ctx))]
    pub async fn get_comment(&self, ctx: &Context, id: &str) -> CommentResult<Comment> {
        self.repository.get_comment(ctx, id).await.map_err(|e| {
            tracing::error!(error = %e, "an error occurred fetching the comment");
            translate(e, CommentError::FetchFailed)
        })
    }

    /// Store a new comment; any id on the draft is replaced
    #[instrument(skip_all, fields(slug = %draft.slug))]
    pub async fn post_comment(&self, ctx: &Context, draft: Comment) -> CommentResult<Comment> {
        self.repository.post_comment(ctx, draft).await.map_err(|e| {
            tracing::error!(error = %e, "an error occurred adding the comment");
            translate(e, CommentError::PostFailed)
        })
    }

    /// Replace slug, body and author of a comment
    #[instrument(skip(self, ctx, values))]
    pub async fn update_comment(
        &self,
        ctx: &Context,
        id: &str,
        values: Comment,
    ) -> CommentResult<Comment> {
        self.repository
            .update_comment(ctx, id, values)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "an error occurred updating the comment");
                translate(e, CommentError::UpdateFailed)
            })
    }

    /// Delete a comment by ID
    #[instrument(skip(self, ctx))]
    pub async fn delete_comment(&self, ctx: &Context, id: &str) -> CommentResult<()> {
        self.repository.delete_comment(ctx, id).await.map_err(|e| {
            tracing::error!(error = %e, "an error occurred deleting the comment");
            translate(e, CommentError::DeleteFailed)
        })
    }
}

/// Keep not-found and not-implemented distinguishable; everything else
/// collapses into the operation's sentinel.
fn translate(err: RepositoryError, sentinel: CommentError) -> CommentError {
    match err {
        RepositoryError::NotFound(id) => CommentError::NotFound(id),
        RepositoryError::NotImplemented(op) => CommentError::NotImplemented(op),
        RepositoryError::Context(_) | RepositoryError::Database(_) => sentinel,
    }
}
