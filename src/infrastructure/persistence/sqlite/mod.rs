//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod post_repo;

pub use database::*;
pub use post_repo::*;
