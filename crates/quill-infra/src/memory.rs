//! In-memory post repository - used when no database is configured.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{ListFilter, NewPost, Post, PostChanges, SortField, SortOrder};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store keyed by id.
///
/// Ids are UUID v7, so key order is creation order; that is the listing
/// order when no sort is requested.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
        }
    }

    fn matches(post: &Post, filter: &ListFilter) -> bool {
        filter
            .search_key
            .as_deref()
            .is_none_or(|key| post.title.contains(key))
    }

    fn compare(a: &Post, b: &Post, field: SortField, order: SortOrder) -> Ordering {
        let ord = match field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, data: NewPost) -> Result<Post, RepoError> {
        let post = Post::create(data);
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<&Post> = store
            .values()
            .filter(|post| Self::matches(post, filter))
            .collect();

        if let Some(field) = filter.sort_by {
            posts.sort_by(|a, b| Self::compare(a, b, field, filter.sort_order));
        }

        Ok(posts
            .into_iter()
            .skip(usize::try_from(filter.offset()).unwrap_or(usize::MAX))
            .take(filter.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &ListFilter) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|post| Self::matches(post, filter))
            .count() as u64)
    }

    async fn get(&self, id: Uuid) -> Result<Post, RepoError> {
        let store = self.store.read().await;
        store.get(&id).cloned().ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Post, RepoError> {
        // Fetch and removal happen under one write lock.
        let mut store = self.store.write().await;
        store.remove(&id).ok_or(RepoError::NotFound)
    }
}
