//! 自定义提取器
//!
//! 与 axum 内置提取器相同，但拒绝时返回 JSON 格式的 `ApiError`

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// 路径参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// 查询参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// JSON 请求体
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
