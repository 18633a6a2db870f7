use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// Generic repository trait over a record `T`, its insert form `N` and key `ID`.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// All rows, in storage order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a new row and return it with its assigned ID.
    async fn insert(&self, new: N) -> Result<T, RepoError>;

    /// Overwrite an existing row.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    /// Every post with its author, in storage order.
    async fn find_all_with_author(&self) -> Result<Vec<(Post, Option<User>)>, RepoError>;

    /// One post with its author.
    async fn find_with_author(&self, id: i32) -> Result<Option<(Post, Option<User>)>, RepoError>;

    /// Delete a post in one transaction, detaching its comments rather
    /// than removing them. Returns how many comments were detached;
    /// `RepoError::NotFound` if there was no such post.
    async fn delete_detaching_comments(&self, id: i32) -> Result<u64, RepoError>;
}

/// Comment repository. Comments are append-only.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment, i32> {
    /// Comments on a post with their commenters, oldest first.
    async fn find_by_post(&self, post_id: i32) -> Result<Vec<(Comment, Option<User>)>, RepoError>;
}
