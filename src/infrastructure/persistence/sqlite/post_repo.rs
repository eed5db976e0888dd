//! SQLite Post Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{PostRecord, PostRepositoryPort, RepositoryError};
use crate::domain::{Pagination, PostDraft, SearchTerm};

/// SQLite Post Repository
pub struct SqlitePostRepository {
    pool: DbPool,
}

impl SqlitePostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    created_at: String,
    updated_at: String,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(format!("{}: {}", value, e)))
}

impl TryFrom<PostRow> for PostRecord {
    type Error = RepositoryError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(PostRecord {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl PostRepositoryPort for SqlitePostRepository {
    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create(&self, draft: &PostDraft) -> Result<PostRecord, RepositoryError> {
        let row: PostRow = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content)
            VALUES (?, ?)
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .fetch_one(&self.pool)
        .await?;

        PostRecord::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostRecord>, RepositoryError> {
        let row: Option<PostRow> = sqlx::query_as(
            "SELECT id, title, content, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRecord::try_from).transpose()
    }

    async fn find_paginated(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<PostRecord>, RepositoryError> {
        let rows: Vec<PostRow> = sqlx::query_as(
            "SELECT id, title, content, created_at, updated_at FROM posts ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(i64::from(pagination.limit))
        .bind(i64::from(pagination.skip))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRecord::try_from).collect()
    }

    async fn update(
        &self,
        id: i64,
        draft: &PostDraft,
    ) -> Result<Option<PostRecord>, RepositoryError> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            UPDATE posts
            SET title = ?,
                content = ?,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            WHERE id = ?
            RETURNING id, title, content, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRecord::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<Option<PostRecord>, RepositoryError> {
        let row: Option<PostRow> = sqlx::query_as(
            "DELETE FROM posts WHERE id = ? RETURNING id, title, content, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PostRecord::try_from).transpose()
    }

    async fn search(
        &self,
        term: &SearchTerm,
        pagination: Pagination,
    ) -> Result<Vec<PostRecord>, RepositoryError> {
        // SQLite LIKE 对 ASCII 字母不区分大小写
        let pattern = term.to_like_pattern();

        let rows: Vec<PostRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, created_at, updated_at FROM posts
            WHERE title LIKE ? ESCAPE '\' OR content LIKE ? ESCAPE '\'
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(i64::from(pagination.limit))
        .bind(i64::from(pagination.skip))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PostRecord::try_from).collect()
    }
}

/// 已完成迁移的内存仓储，供测试使用
#[cfg(test)]
pub(crate) async fn in_memory_post_repository() -> SqlitePostRepository {
    let pool = super::create_pool(&super::DatabaseConfig::in_memory())
        .await
        .unwrap();
    super::run_migrations(&pool).await.unwrap();
    SqlitePostRepository::new(pool)
}
