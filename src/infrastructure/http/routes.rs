//! HTTP Routes
//!
//! API Endpoints:
//! - /ping              GET     健康检查
//! - /posts             GET     分页列出帖子（skip, limit）
//! - /posts             POST    创建帖子
//! - /posts/search      GET     子串搜索（query, skip, limit）
//! - /posts/:post_id    GET     获取帖子
//! - /posts/:post_id    PUT     更新帖子
//! - /posts/:post_id    DELETE  删除帖子

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 路由不带末尾斜杠；静态段 `/posts/search` 优先于 `/posts/:post_id` 匹配
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route("/posts/search", get(handlers::search_posts))
        .route(
            "/posts/:post_id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
}
