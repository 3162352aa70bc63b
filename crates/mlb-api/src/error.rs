//! エラー型定義 (mlb-api)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use mlb_core::Error as CoreError;

/// mlb-api のエラー型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::InvalidArgument(_)) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Core(CoreError::ToolNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Core(CoreError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the request itself was at fault
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::Core(e) => e.is_caller_error(),
            Self::InvalidBody(_) => true,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if self.is_caller_error() {
            debug!(status = status.as_u16(), "{}", message);
        } else {
            error!(status = status.as_u16(), "{}", message);
        }

        (
            status,
            Json(json!({
                "error": message,
                "status": status.as_u16(),
            })),
        )
            .into_response()
    }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CoreError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::ToolNotFound("x".into()), StatusCode::NOT_FOUND),
            (CoreError::Upstream("x".into()), StatusCode::BAD_GATEWAY),
            (CoreError::Mcp("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
        assert_eq!(
            ApiError::InvalidBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_caller_errors() {
        assert!(ApiError::InvalidBody("eof".into()).is_caller_error());
        assert!(ApiError::from(CoreError::ToolNotFound("x".into())).is_caller_error());
        assert!(!ApiError::from(CoreError::Upstream("x".into())).is_caller_error());
    }

    #[test]
    fn test_message_is_verbatim() {
        let err = ApiError::from(CoreError::Upstream("MLB Stats API error: 404".into()));
        assert_eq!(err.to_string(), "Upstream failure: MLB Stats API error: 404");
    }
}
