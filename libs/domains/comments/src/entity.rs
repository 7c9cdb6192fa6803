use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Comment;

/// Sea-ORM Entity for the comments table
///
/// `slug`, `body` and `author` are nullable in storage. They are only ever
/// seen as `Option` here; conversion into [`Comment`] is the single place
/// where NULL becomes an empty string.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub slug: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub body: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub author: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Comment
impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            slug: model.slug.unwrap_or_default(),
            body: model.body.unwrap_or_default(),
            author: model.author.unwrap_or_default(),
        }
    }
}

impl ActiveModel {
    /// Insert model for a new comment; the id is generated here and any id on
    /// the draft is ignored.
    pub fn for_insert(draft: Comment) -> Self {
        Self {
            id: Set(Uuid::now_v7().to_string()),
            ..Self::for_update(draft)
        }
    }

    /// Overwrites all three mutable columns and leaves the id untouched.
    pub fn for_update(values: Comment) -> Self {
        Self {
            id: NotSet,
            slug: Set(Some(values.slug)),
            body: Set(Some(values.body)),
            author: Set(Some(values.author)),
        }
    }
}
