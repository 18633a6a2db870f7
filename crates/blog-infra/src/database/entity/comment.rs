//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub commenter_id: i32,
    pub post_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CommenterId",
        to = "super::user::Column::Id"
    )]
    Commenter,
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id"
    )]
    Post,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commenter.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for blog_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            commenter_id: model.commenter_id,
            post_id: model.post_id,
            text: model.text,
        }
    }
}

impl From<blog_core::domain::Comment> for ActiveModel {
    fn from(comment: blog_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            commenter_id: Set(comment.commenter_id),
            post_id: Set(comment.post_id),
            text: Set(comment.text),
        }
    }
}

impl From<blog_core::domain::NewComment> for ActiveModel {
    fn from(comment: blog_core::domain::NewComment) -> Self {
        Self {
            id: NotSet,
            commenter_id: Set(comment.commenter_id),
            post_id: Set(Some(comment.post_id)),
            text: Set(comment.text),
        }
    }
}
