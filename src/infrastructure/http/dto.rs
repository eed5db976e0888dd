//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::PostRecord;
use crate::domain::{Pagination, PostDraft, SearchTerm};

// ============================================================================
// Post DTOs
// ============================================================================

/// 创建/更新请求体，客户端提供的 id、时间戳等其他字段被忽略
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

impl From<PostRequest> for PostDraft {
    fn from(req: PostRequest) -> Self {
        PostDraft::new(req.title, req.content)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostRecord> for PostResponse {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// `?skip=&limit=`
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Pagination::from_optional(params.skip, params.limit)
    }
}

/// `?query=&skip=&limit=`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl SearchParams {
    pub fn into_parts(self) -> (SearchTerm, Pagination) {
        (
            SearchTerm::new(self.query),
            Pagination::from_optional(self.skip, self.limit),
        )
    }
}
