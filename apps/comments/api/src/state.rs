use crate::config::Config;
use domain_comments::{CommentRepository, PgCommentRepository};

/// Shared application state, cloned into every router that needs it
pub struct AppState<R: CommentRepository = PgCommentRepository> {
    pub config: Config,
    pub comments: R,
}

impl<R: CommentRepository + Clone> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            comments: self.comments.clone(),
        }
    }
}
