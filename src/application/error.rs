//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 存储不可用
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Unavailable(msg) => Self::StoreUnavailable(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApplicationError::not_found("Post", 7);
        assert_eq!(err.to_string(), "Post not found: 7");
    }

    #[test]
    fn test_repository_error_conversion() {
        let err: ApplicationError = RepositoryError::Unavailable("pool timed out".into()).into();
        assert!(matches!(err, ApplicationError::StoreUnavailable(_)));

        let err: ApplicationError = RepositoryError::DatabaseError("constraint".into()).into();
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }
}
