//! Post Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PostRecord, PostRepositoryPort};
use crate::application::queries::{GetPost, ListPosts, SearchPosts};

/// GetPost Handler
pub struct GetPostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl GetPostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, query: GetPost) -> Result<PostRecord, ApplicationError> {
        self.post_repo
            .find_by_id(query.post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post", query.post_id))
    }
}

/// ListPosts Handler
pub struct ListPostsHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl ListPostsHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, query: ListPosts) -> Result<Vec<PostRecord>, ApplicationError> {
        Ok(self.post_repo.find_paginated(query.pagination).await?)
    }
}

/// SearchPosts Handler
pub struct SearchPostsHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl SearchPostsHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, query: SearchPosts) -> Result<Vec<PostRecord>, ApplicationError> {
        let posts = self
            .post_repo
            .search(&query.term, query.pagination)
            .await?;

        tracing::debug!(
            term = %query.term,
            skip = query.pagination.skip,
            limit = query.pagination.limit,
            hits = posts.len(),
            "Post search completed"
        );

        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use crate::infrastructure::persistence::sqlite::in_memory_post_repository;

    #[tokio::test]
    async fn test_get_is_idempotent() {
        let repo = Arc::new(in_memory_post_repository().await);
        let created = repo.create(&PostDraft::new("Hello", "world")).await.unwrap();

        let handler = GetPostHandler::new(repo);
        let first = handler.handle(GetPost { post_id: created.id }).await.unwrap();
        let second = handler.handle(GetPost { post_id: created.id }).await.unwrap();

        assert_eq!(first, created);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_missing_post_is_not_found() {
        let repo = Arc::new(in_memory_post_repository().await);
        let result = GetPostHandler::new(repo).handle(GetPost { post_id: 1 }).await;
        assert!(matches!(result, Err(ApplicationError::NotFound { id: 1, .. })));
    }

    #[tokio::test]
    async fn test_list_uses_default_window() {
        let repo = Arc::new(in_memory_post_repository().await);
        for i in 0..12 {
            repo.create(&PostDraft::new(format!("t{}", i), "c"))
                .await
                .unwrap();
        }

        let posts = ListPostsHandler::new(repo)
            .handle(ListPosts::default())
            .await
            .unwrap();
        assert_eq!(posts.len(), 10);
        assert_eq!(posts[0].title, "t0");
    }
}
