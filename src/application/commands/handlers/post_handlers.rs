//! Post Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreatePost, DeletePost, UpdatePost};
use crate::application::error::ApplicationError;
use crate::application::ports::{PostRecord, PostRepositoryPort};

// ============================================================================
// CreatePost
// ============================================================================

/// CreatePost Handler
pub struct CreatePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl CreatePostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    pub async fn handle(&self, command: CreatePost) -> Result<PostRecord, ApplicationError> {
        let post = self.post_repo.create(&command.draft).await?;

        tracing::info!(post_id = post.id, title = %post.title, "Post created");

        Ok(post)
    }
}

// ============================================================================
// UpdatePost
// ============================================================================

/// UpdatePost Handler
pub struct UpdatePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl UpdatePostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    /// 帖子不存在时返回 NotFound，不做任何修改
    pub async fn handle(&self, command: UpdatePost) -> Result<PostRecord, ApplicationError> {
        let post = self
            .post_repo
            .update(command.post_id, &command.draft)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post", command.post_id))?;

        tracing::info!(post_id = post.id, title = %post.title, "Post updated");

        Ok(post)
    }
}

// ============================================================================
// DeletePost
// ============================================================================

/// DeletePost Handler
pub struct DeletePostHandler {
    post_repo: Arc<dyn PostRepositoryPort>,
}

impl DeletePostHandler {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self { post_repo }
    }

    /// 返回删除前的帖子
    pub async fn handle(&self, command: DeletePost) -> Result<PostRecord, ApplicationError> {
        let post = self
            .post_repo
            .delete(command.post_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post", command.post_id))?;

        tracing::info!(post_id = post.id, title = %post.title, "Post deleted");

        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use crate::infrastructure::persistence::sqlite::in_memory_post_repository;

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let repo = Arc::new(in_memory_post_repository().await);
        let handler = UpdatePostHandler::new(repo.clone());

        let result = handler
            .handle(UpdatePost {
                post_id: 42,
                draft: PostDraft::new("title", "content"),
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotFound { resource_type: "Post", id: 42 })
        ));
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_returns_prior_state() {
        let repo = Arc::new(in_memory_post_repository().await);
        let created = CreatePostHandler::new(repo.clone())
            .handle(CreatePost {
                draft: PostDraft::new("A", "B"),
            })
            .await
            .unwrap();

        let handler = DeletePostHandler::new(repo.clone());
        let deleted = handler
            .handle(DeletePost { post_id: created.id })
            .await
            .unwrap();
        assert_eq!(deleted, created);

        let again = handler.handle(DeletePost { post_id: created.id }).await;
        assert!(matches!(again, Err(ApplicationError::NotFound { .. })));
    }
}
