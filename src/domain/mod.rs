//! Domain Layer - 领域层
//!
//! - Post Context: 帖子管理

pub mod post;

pub use post::{Pagination, PostDraft, SearchTerm};
