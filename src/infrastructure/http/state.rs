//! Application State
//!
//! 持有仓储端口与所有 Command/Query Handlers，通过 axum `State` 注入每个请求

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreatePostHandler, DeletePostHandler, UpdatePostHandler,
    // Query handlers
    GetPostHandler, ListPostsHandler, SearchPostsHandler,
    // Ports
    PostRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub post_repo: Arc<dyn PostRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_post_handler: CreatePostHandler,
    pub update_post_handler: UpdatePostHandler,
    pub delete_post_handler: DeletePostHandler,

    // ========== Query Handlers ==========
    pub get_post_handler: GetPostHandler,
    pub list_posts_handler: ListPostsHandler,
    pub search_posts_handler: SearchPostsHandler,
}

impl AppState {
    pub fn new(post_repo: Arc<dyn PostRepositoryPort>) -> Self {
        Self {
            post_repo: post_repo.clone(),

            create_post_handler: CreatePostHandler::new(post_repo.clone()),
            update_post_handler: UpdatePostHandler::new(post_repo.clone()),
            delete_post_handler: DeletePostHandler::new(post_repo.clone()),

            get_post_handler: GetPostHandler::new(post_repo.clone()),
            list_posts_handler: ListPostsHandler::new(post_repo.clone()),
            search_posts_handler: SearchPostsHandler::new(post_repo),
        }
    }
}
