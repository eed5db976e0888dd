//! Post Context - 帖子限界上下文
//!
//! 职责:
//! - 帖子内容（标题 + 正文）
//! - 分页窗口
//! - 子串搜索词

mod value_objects;

pub use value_objects::{Pagination, PostDraft, SearchTerm, DEFAULT_LIMIT};
