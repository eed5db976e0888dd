//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 仓储端口定义
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreatePostHandler, DeletePostHandler, UpdatePostHandler},
    CreatePost, DeletePost, UpdatePost,
};

pub use error::ApplicationError;

pub use ports::{PostRecord, PostRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{GetPostHandler, ListPostsHandler, SearchPostsHandler},
    GetPost, ListPosts, SearchPosts,
};
