//! Post Queries

use crate::domain::{Pagination, SearchTerm};

/// 获取单个帖子
#[derive(Debug, Clone)]
pub struct GetPost {
    pub post_id: i64,
}

/// 分页列出帖子
#[derive(Debug, Clone, Default)]
pub struct ListPosts {
    pub pagination: Pagination,
}

/// 子串搜索帖子
#[derive(Debug, Clone)]
pub struct SearchPosts {
    pub term: SearchTerm,
    pub pagination: Pagination,
}
