//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{Pagination, PostDraft, SearchTerm};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 存储不可用（连接池超时、关闭、I/O）
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 帖子实体（存储返回的副本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post Repository Port
///
/// 所有方法都是单条语句，返回前已提交。记录不存在时返回 `Ok(None)`
#[async_trait]
pub trait PostRepositoryPort: Send + Sync {
    /// 检查存储是否可用
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// 创建帖子，id 和时间戳由存储分配
    async fn create(&self, draft: &PostDraft) -> Result<PostRecord, RepositoryError>;

    /// 根据 ID 查找帖子
    async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, RepositoryError>;

    /// 按插入顺序分页获取
    async fn find_paginated(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<PostRecord>, RepositoryError>;

    /// 替换标题和正文并刷新 updated_at
    async fn update(
        &self,
        id: i64,
        draft: &PostDraft,
    ) -> Result<Option<PostRecord>, RepositoryError>;

    /// 删除帖子，返回删除前的状态
    async fn delete(&self, id: i64) -> Result<Option<PostRecord>, RepositoryError>;

    /// 标题或正文包含搜索词，过滤后再分页
    async fn search(
        &self,
        term: &SearchTerm,
        pagination: Pagination,
    ) -> Result<Vec<PostRecord>, RepositoryError>;
}
