//! Post HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::{CreatePost, DeletePost, GetPost, ListPosts, SearchPosts, UpdatePost};
use crate::infrastructure::http::dto::{PaginationParams, PostRequest, PostResponse, SearchParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::infrastructure::http::state::AppState;

/// GET /posts
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let query = ListPosts {
        pagination: params.into(),
    };

    let posts = state.list_posts_handler.handle(query).await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/search
pub async fn search_posts(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let (term, pagination) = params.into_parts();

    let posts = state
        .search_posts_handler
        .handle(SearchPosts { term, pagination })
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /posts/:post_id
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state.get_post_handler.handle(GetPost { post_id }).await?;

    Ok(Json(post.into()))
}

/// POST /posts
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<PostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let command = CreatePost { draft: req.into() };

    let post = state.create_post_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// PUT /posts/:post_id
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(req): ApiJson<PostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let command = UpdatePost {
        post_id,
        draft: req.into(),
    };

    let post = state.update_post_handler.handle(command).await?;

    Ok(Json(post.into()))
}

/// DELETE /posts/:post_id
///
/// 返回删除前的帖子
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = state
        .delete_post_handler
        .handle(DeletePost { post_id })
        .await?;

    Ok(Json(post.into()))
}
