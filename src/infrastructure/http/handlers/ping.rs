//! Ping Handler
//!
//! 健康检查，同时探测存储连接

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// 存储不可用时返回 503
pub async fn ping(State(state): State<Arc<AppState>>) -> (StatusCode, Json<PingResponse>) {
    let (status_code, status, store) = match state.post_repo.ping().await {
        Ok(()) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Store health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        status_code,
        Json(PingResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}
