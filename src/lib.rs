//! Postboard - 帖子 CRUD 服务
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Post Context: 帖子内容、分页窗口、搜索词
//!
//! 应用层 (application/):
//! - Ports: PostRepositoryPort
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 获取 / 列表 / 搜索
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
