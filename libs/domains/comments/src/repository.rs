use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::context::Context;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::Comment;

/// Repository trait for Comment persistence
///
/// Reads are required. Writes default to [`RepositoryError::NotImplemented`]
/// so a read-only backend is detectable rather than silently ignoring writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List every stored comment, in no particular order
    async fn get_comments(&self, ctx: &Context) -> RepositoryResult<Vec<Comment>>;

    /// Get a comment by ID, `NotFound` if no row matches
    async fn get_comment(&self, ctx: &Context, id: &str) -> RepositoryResult<Comment>;

    /// Insert a comment under a newly generated ID
    async fn post_comment(&self, ctx: &Context, draft: Comment) -> RepositoryResult<Comment> {
        let _ = (ctx, draft);
        Err(RepositoryError::NotImplemented("post_comment"))
    }

    /// Overwrite slug, body and author of an existing comment
    async fn update_comment(
        &self,
        ctx: &Context,
        id: &str,
        values: Comment,
    ) -> RepositoryResult<Comment> {
        let _ = (ctx, id, values);
        Err(RepositoryError::NotImplemented("update_comment"))
    }

    /// Delete a comment by ID, `NotFound` if no row matches
    async fn delete_comment(&self, ctx: &Context, id: &str) -> RepositoryResult<()> {
        let _ = (ctx, id);
        Err(RepositoryError::NotImplemented("delete_comment"))
    }

    /// Liveness check against the backing store
    async fn ping(&self, ctx: &Context) -> RepositoryResult<()>;
}

/// In-memory implementation of CommentRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<HashMap<String, Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn get_comments(&self, ctx: &Context) -> RepositoryResult<Vec<Comment>> {
        let comments = ctx.run(self.comments.read()).await?;
        Ok(comments.values().cloned().collect())
    }

    async fn get_comment(&self, ctx: &Context, id: &str) -> RepositoryResult<Comment> {
        let comments = ctx.run(self.comments.read()).await?;
        comments
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn post_comment(&self, ctx: &Context, draft: Comment) -> RepositoryResult<Comment> {
        let mut comments = ctx.run(self.comments.write()).await?;

        let comment = Comment {
            id: Uuid::now_v7().to_string(),
            ..draft
        };
        comments.insert(comment.id.clone(), comment.clone());

        tracing::info!(comment_id = %comment.id, "Created comment");
        Ok(comment)
    }

    async fn update_comment(
        &self,
        ctx: &Context,
        id: &str,
        values: Comment,
    ) -> RepositoryResult<Comment> {
        let mut comments = ctx.run(self.comments.write()).await?;

        let comment = comments
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        comment.slug = values.slug;
        comment.body = values.body;
        comment.author = values.author;

        tracing::info!(comment_id = %id, "Updated comment");
        Ok(comment.clone())
    }

    async fn delete_comment(&self, ctx: &Context, id: &str) -> RepositoryResult<()> {
        let mut comments = ctx.run(self.comments.write()).await?;

        if comments.remove(id).is_some() {
            tracing::info!(comment_id = %id, "Deleted comment");
            Ok(())
        } else {
            Err(RepositoryError::NotFound(id.to_string()))
        }
    }

    async fn ping(&self, ctx: &Context) -> RepositoryResult<()> {
        ctx.err().map_or(Ok(()), |e| Err(e.into()))
    }
}
