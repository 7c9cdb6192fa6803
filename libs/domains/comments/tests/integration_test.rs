//! Integration tests for the PostgreSQL comment repository
//!
//! These start a real Postgres container through `test_utils::TestDatabase`
//! and are ignored by default. Run them with:
//!
//! ```sh
//! cargo test -p domain_comments --test integration_test -- --ignored
//! ```

use domain_comments::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions};

async fn service(db: &TestDatabase) -> CommentService<PgCommentRepository> {
    CommentService::new(PgCommentRepository::new(db.connection()))
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_post_and_get_comment() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;
    let data = TestDataBuilder::from_test_name("test_post_and_get_comment");
    let ctx = Context::background();

    let created = service
        .post_comment(
            &ctx,
            Comment::draft(data.slug("main"), data.author(), data.body(1)),
        )
        .await
        .unwrap();
    assertions::assert_not_empty(&created.id, "generated id");

    let fetched = service.get_comment(&ctx, &created.id).await.unwrap();
    assert_eq!(fetched, created);

    let all = service.get_comments(&ctx).await.unwrap();
    assert_eq!(all, vec![created]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_generated_ids_are_unique() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;
    let data = TestDataBuilder::from_test_name("test_generated_ids_are_unique");
    let ctx = Context::background();

    let first = service
        .post_comment(&ctx, Comment::draft(data.slug("a"), data.author(), data.body(1)))
        .await
        .unwrap();
    let second = service
        .post_comment(&ctx, Comment::draft(data.slug("a"), data.author(), data.body(1)))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_comment() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;
    let data = TestDataBuilder::from_test_name("test_update_and_delete_comment");
    let ctx = Context::background();

    let created = service
        .post_comment(&ctx, Comment::draft(data.slug("v1"), data.author(), data.body(1)))
        .await
        .unwrap();

    let updated = service
        .update_comment(
            &ctx,
            &created.id,
            Comment::draft(data.slug("v2"), "editor", data.body(2)),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);

    let fetched = service.get_comment(&ctx, &created.id).await.unwrap();
    assert_eq!(fetched.slug, data.slug("v2"));
    assert_eq!(fetched.author, "editor");
    assert_eq!(fetched.body, data.body(2));

    service.delete_comment(&ctx, &created.id).await.unwrap();

    assert_eq!(
        service.get_comment(&ctx, &created.id).await.unwrap_err(),
        CommentError::NotFound(created.id.clone())
    );
    assert_eq!(
        service.delete_comment(&ctx, &created.id).await.unwrap_err(),
        CommentError::NotFound(created.id)
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_comment_is_not_found() {
    let db = TestDatabase::new().await;
    let service = service(&db).await;

    let err = service
        .update_comment(
            &Context::background(),
            "no-such-id",
            Comment::draft("s", "a", "b"),
        )
        .await
        .unwrap_err();

    assert_eq!(err, CommentError::NotFound("no-such-id".into()));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_null_columns_read_as_empty_strings() {
    let db = TestDatabase::new().await;
    db.insert_raw_comment("legacy-1", Some("old-post"), None, None)
        .await;
    let service = service(&db).await;

    let comment = service
        .get_comment(&Context::background(), "legacy-1")
        .await
        .unwrap();

    assert_eq!(
        comment,
        Comment {
            id: "legacy-1".into(),
            slug: "old-post".into(),
            body: String::new(),
            author: String::new(),
        }
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ping_and_cancelled_context() {
    let db = TestDatabase::new().await;
    let repository = PgCommentRepository::new(db.connection());

    repository.ping(&Context::background()).await.unwrap();

    let ctx = Context::background();
    ctx.cancel();
    assert!(matches!(
        repository.get_comments(&ctx).await,
        Err(RepositoryError::Context(ContextError::Cancelled))
    ));
}
