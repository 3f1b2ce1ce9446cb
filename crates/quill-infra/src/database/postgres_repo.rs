//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, PaginatorTrait};
use uuid::Uuid;

use quill_core::domain::{ListFilter, NewPost, Post, PostChanges};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_err};
use super::query;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, data: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(Post::create(data))
            .insert(&self.db)
            .await
            .map_err(repo_err)?;

        tracing::debug!(post_id = %model.id, "Created post");
        Ok(model.into())
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<Post>, RepoError> {
        let rows = query::list_query(filter)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: &ListFilter) -> Result<u64, RepoError> {
        query::count_query(filter)
            .count(&self.db)
            .await
            .map_err(repo_err)
    }

    async fn get(&self, id: Uuid) -> Result<Post, RepoError> {
        self.find_model(id).await.map(Into::into)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError> {
        if let Some(update) = query::update_query(id, changes, Utc::now().into()) {
            let result = update.exec(&self.db).await.map_err(repo_err)?;
            if result.rows_affected == 0 {
                return Err(RepoError::NotFound);
            }
            tracing::debug!(post_id = %id, "Updated post");
        }

        self.get(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<Post, RepoError> {
        let snapshot = self.get(id).await?;

        // A concurrent delete between the fetch and here surfaces as NotFound.
        self.delete_model(id).await?;

        tracing::debug!(post_id = %id, "Deleted post");
        Ok(snapshot)
    }
}
