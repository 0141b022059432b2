use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Post source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Assistant unavailable: {0}")]
    AssistantUnavailable(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::PostNotFound(_) => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::SourceUnavailable(e) => {
                tracing::error!("Post source unavailable: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::AssistantUnavailable(e) => {
                // Chat handlers degrade to an apology string before this
                // can surface.
                tracing::error!("Assistant unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Assistant unavailable".to_string(),
                )
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn response_status(err: AppError) -> StatusCode {
        let response = err.into_response();
        response.status()
    }

    #[test]
    fn post_not_found_returns_404() {
        assert_eq!(
            response_status(AppError::PostNotFound("abc".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn bad_request_returns_400() {
        assert_eq!(
            response_status(AppError::BadRequest("oops".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn source_unavailable_returns_500() {
        assert_eq!(
            response_status(AppError::SourceUnavailable("io".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn assistant_unavailable_returns_503() {
        assert_eq!(
            response_status(AppError::AssistantUnavailable("no key".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
