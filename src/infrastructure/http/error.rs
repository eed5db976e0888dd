//! HTTP Error Handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// 统一错误响应格式，errno 与 HTTP 状态码一致
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errno: u16,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            errno: status.as_u16(),
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// 请求提取失败，保留提取器给出的状态码（400 / 413 / 415 / 422）
    Rejected(StatusCode, String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected(status, _) => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Resource not found");
                msg
            }
            ApiError::Rejected(_, msg) => {
                tracing::warn!(errno = status.as_u16(), error = %msg, "Request rejected");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Internal server error");
                msg
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(errno = status.as_u16(), error = %msg, "Service unavailable");
                msg
            }
        };

        (status, Json(ErrorResponse::new(status, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::StoreUnavailable(msg) => ApiError::ServiceUnavailable(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_mapping() {
        let err = ApiError::from(ApplicationError::not_found("Post", 3));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == "Post not found: 3"));

        let err = ApiError::from(ApplicationError::StoreUnavailable("pool closed".into()));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let err = ApiError::from(ApplicationError::RepositoryError("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_rejection_keeps_its_status() {
        let err = ApiError::from(JsonRejection::from(
            axum::extract::rejection::MissingJsonContentType::default(),
        ));
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_response_uses_real_status_code() {
        let response = ApiError::NotFound("Post not found: 1".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
