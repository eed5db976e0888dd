//! Post Commands

use crate::domain::PostDraft;

/// 创建帖子命令
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub draft: PostDraft,
}

/// 更新帖子命令（整体替换标题和正文）
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub post_id: i64,
    pub draft: PostDraft,
}

/// 删除帖子命令
#[derive(Debug, Clone)]
pub struct DeletePost {
    pub post_id: i64,
}
