//! Post service - composes repository calls into use cases.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{ListFilter, NewPost, PAGE_SIZE, PageResult, Pagination, Post, PostChanges};
use crate::error::DomainError;
use crate::ports::PostRepository;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, data: NewPost) -> Result<Post, DomainError> {
        Ok(self.repo.create(data).await?)
    }

    /// List one page of posts together with paging metadata.
    ///
    /// The page fetch and the total count are independent reads and run
    /// concurrently.
    pub async fn get_all(&self, filter: ListFilter) -> Result<PageResult<Post>, DomainError> {
        let (data, total) =
            futures::try_join!(self.repo.list(&filter), self.repo.count(&filter))?;

        tracing::debug!(
            page = filter.page,
            returned = data.len(),
            total,
            "Listed posts"
        );

        Ok(PageResult {
            data,
            pagination: Pagination::new(total, filter.page, PAGE_SIZE),
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        Ok(self.repo.get(id).await?)
    }

    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        Ok(self.repo.update(id, changes).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<Post, DomainError> {
        Ok(self.repo.delete(id).await?)
    }
}
