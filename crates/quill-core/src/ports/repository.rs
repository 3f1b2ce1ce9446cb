use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ListFilter, NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Post storage.
///
/// Every operation addressing a single post fails with [`RepoError::NotFound`]
/// when no row has the given id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post with a fresh id and timestamps.
    async fn create(&self, data: NewPost) -> Result<Post, RepoError>;

    /// One page of posts matching `filter`.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Post>, RepoError>;

    /// Number of posts matching `filter`, ignoring paging and ordering.
    async fn count(&self, filter: &ListFilter) -> Result<u64, RepoError>;

    async fn get(&self, id: Uuid) -> Result<Post, RepoError>;

    /// Apply the present fields of `changes` and return the stored result.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError>;

    /// Remove a post, returning it as it was before deletion.
    async fn delete(&self, id: Uuid) -> Result<Post, RepoError>;
}
