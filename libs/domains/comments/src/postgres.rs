use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use std::future::Future;

use crate::{
    context::Context,
    entity,
    error::{RepositoryError, RepositoryResult},
    models::Comment,
    repository::CommentRepository,
};

/// Comment repository backed by PostgreSQL through SeaORM
#[derive(Clone)]
pub struct PgCommentRepository {
    db: DatabaseConnection,
}

impl PgCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Run a query under `ctx`; dropping the query future on cancellation
    /// releases its connection back to the pool.
    async fn query<T, F>(&self, ctx: &Context, query: F) -> RepositoryResult<T>
    where
        F: Future<Output = Result<T, DbErr>>,
    {
        Ok(ctx.run(query).await??)
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn get_comments(&self, ctx: &Context) -> RepositoryResult<Vec<Comment>> {
        let models = self
            .query(ctx, entity::Entity::find().all(&self.db))
            .await?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn get_comment(&self, ctx: &Context, id: &str) -> RepositoryResult<Comment> {
        let model = self
            .query(ctx, entity::Entity::find_by_id(id.to_owned()).one(&self.db))
            .await?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        Ok(model.into())
    }

    async fn post_comment(&self, ctx: &Context, draft: Comment) -> RepositoryResult<Comment> {
        let active_model = entity::ActiveModel::for_insert(draft);

        let model = self.query(ctx, active_model.insert(&self.db)).await?;

        tracing::info!(comment_id = %model.id, "Created comment");
        Ok(model.into())
    }

    async fn update_comment(
        &self,
        ctx: &Context,
        id: &str,
        values: Comment,
    ) -> RepositoryResult<Comment> {
        let update = entity::Entity::update_many()
            .set(entity::ActiveModel::for_update(values.clone()))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db);

        let result = self.query(ctx, update).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        tracing::info!(comment_id = %id, "Updated comment");
        Ok(Comment {
            id: id.to_string(),
            ..values
        })
    }

    async fn delete_comment(&self, ctx: &Context, id: &str) -> RepositoryResult<()> {
        let result = self
            .query(
                ctx,
                entity::Entity::delete_by_id(id.to_owned()).exec(&self.db),
            )
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id.to_string()));
        }

        tracing::info!(comment_id = %id, "Deleted comment");
        Ok(())
    }

    async fn ping(&self, ctx: &Context) -> RepositoryResult<()> {
        self.query(ctx, self.db.ping()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextError;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn row(id: &str, slug: Option<&str>, body: Option<&str>, author: Option<&str>) -> entity::Model {
        entity::Model {
            id: id.to_string(),
            slug: slug.map(str::to_string),
            body: body.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_get_comment_translates_null_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("c-1", Some("hello-world"), None, None)]])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let comment = repo
            .get_comment(&Context::background(), "c-1")
            .await
            .unwrap();

        assert_eq!(comment.id, "c-1");
        assert_eq!(comment.slug, "hello-world");
        assert_eq!(comment.body, "");
        assert_eq!(comment.author, "");
    }

    #[tokio::test]
    async fn test_get_comment_without_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let result = repo.get_comment(&Context::background(), "missing").await;

        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_get_comments_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row("c-1", Some("a"), Some("b"), Some("c")),
                row("c-2", None, None, None),
            ]])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let comments = repo.get_comments(&Context::background()).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert!(comments.iter().any(|c| c.id == "c-2" && c.slug.is_empty()));
    }

    #[tokio::test]
    async fn test_get_comments_surfaces_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let result = repo.get_comments(&Context::background()).await;

        assert!(matches!(result, Err(RepositoryError::Database(_))));
    }

    #[tokio::test]
    async fn test_cancelled_context_aborts_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("c-1", None, None, None)]])
            .into_connection();
        let repo = PgCommentRepository::new(db);
        let ctx = Context::background();
        ctx.cancel();

        let result = repo.get_comments(&ctx).await;

        assert!(matches!(
            result,
            Err(RepositoryError::Context(ContextError::Cancelled))
        ));
    }

    #[tokio::test]
    async fn test_post_comment_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(
                "generated-id",
                Some("hello-world"),
                Some("first post"),
                Some("ana"),
            )]])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let comment = repo
            .post_comment(
                &Context::background(),
                Comment::draft("hello-world", "ana", "first post"),
            )
            .await
            .unwrap();

        assert_eq!(comment.id, "generated-id");
        assert_eq!(comment.body, "first post");
    }

    #[tokio::test]
    async fn test_update_comment_keeps_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let values = Comment {
            id: "ignored".into(),
            ..Comment::draft("other", "bo", "edited")
        };
        let comment = repo
            .update_comment(&Context::background(), "c-1", values)
            .await
            .unwrap();

        assert_eq!(comment.id, "c-1");
        assert_eq!(comment.slug, "other");
        assert_eq!(comment.author, "bo");
        assert_eq!(comment.body, "edited");
    }

    #[tokio::test]
    async fn test_update_without_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();
        let repo = PgCommentRepository::new(db);

        let result = repo
            .update_comment(&Context::background(), "missing", Comment::draft("s", "a", "b"))
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_comment_checks_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let repo = PgCommentRepository::new(db);
        let ctx = Context::background();

        assert!(repo.delete_comment(&ctx, "c-1").await.is_ok());
        assert!(matches!(
            repo.delete_comment(&ctx, "c-1").await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
