use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Successfully Deleted";

/// Comment entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Store-assigned identifier, opaque to callers
    pub id: String,
    /// Grouping key, e.g. the article the comment belongs to
    pub slug: String,
    pub body: String,
    pub author: String,
}

impl Comment {
    /// Build a comment without an id, as handed to the store on insert.
    pub fn draft(
        slug: impl Into<String>,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            slug: slug.into(),
            body: body.into(),
            author: author.into(),
        }
    }
}

/// DTO for creating a comment
///
/// Missing fields deserialize to empty strings and are rejected by validation,
/// so an absent field and an empty one produce the same 400 response.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PostCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "slug is required"))]
    pub slug: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}

/// DTO for replacing a comment's mutable fields
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "slug is required"))]
    pub slug: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}

impl From<PostCommentRequest> for Comment {
    fn from(req: PostCommentRequest) -> Self {
        Comment::draft(req.slug, req.author, req.body)
    }
}

impl From<UpdateCommentRequest> for Comment {
    fn from(req: UpdateCommentRequest) -> Self {
        Comment::draft(req.slug, req.author, req.body)
    }
}

/// Plain `{"message": ...}` response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let req: PostCommentRequest = serde_json::from_str(r#"{"slug": "hello-world"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("body"));
        assert!(!fields.contains_key("slug"));
    }

    #[test]
    fn test_complete_request_passes_validation() {
        let req: UpdateCommentRequest = serde_json::from_str(
            r#"{"slug": "hello-world", "author": "ana", "body": "first post"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());

        let comment: Comment = req.into();
        assert!(comment.id.is_empty());
        assert_eq!(comment.author, "ana");
    }

    #[test]
    fn test_comment_wire_shape() {
        let comment = Comment {
            id: "c-1".into(),
            ..Comment::draft("hello-world", "ana", "first post")
        };
        let value = serde_json::to_value(&comment).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "c-1",
                "slug": "hello-world",
                "body": "first post",
                "author": "ana",
            })
        );
    }
}
