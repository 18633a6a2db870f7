//! Entity-specific repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait, Value};

use blog_core::domain::{Comment, Post, User};
use blog_core::error::RepoError;
use blog_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::base::{SeaOrmRepository, read_error, write_error};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

/// SeaORM comment repository.
pub type SeaOrmCommentRepository = SeaOrmRepository<CommentEntity>;

/// Keep the first character of the local part so logs stay free of PII.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

fn with_author<M, T>((row, author): (M, Option<user::Model>)) -> (T, Option<User>)
where
    T: From<M>,
{
    (row.into(), author.map(Into::into))
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(read_error)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_all_with_author(&self) -> Result<Vec<(Post, Option<User>)>, RepoError> {
        let rows = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(read_error)?;

        Ok(rows.into_iter().map(with_author).collect())
    }

    async fn find_with_author(&self, id: i32) -> Result<Option<(Post, Option<User>)>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(read_error)?;

        Ok(row.map(with_author))
    }

    async fn delete_detaching_comments(&self, id: i32) -> Result<u64, RepoError> {
        let txn = self.db.begin().await.map_err(read_error)?;

        let detached = CommentEntity::update_many()
            .col_expr(comment::Column::PostId, Expr::value(Value::Int(None)))
            .filter(comment::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(write_error)?;

        let deleted = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(write_error)?;

        if deleted.rows_affected == 0 {
            txn.rollback().await.map_err(read_error)?;
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(write_error)?;

        tracing::debug!(post_id = id, detached = detached.rows_affected, "Deleted post");

        Ok(detached.rows_affected)
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn find_by_post(&self, post_id: i32) -> Result<Vec<(Comment, Option<User>)>, RepoError> {
        let rows = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .find_also_related(UserEntity)
            .all(&self.db)
            .await
            .map_err(read_error)?;

        Ok(rows.into_iter().map(with_author).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@x.com"), "***@x.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
