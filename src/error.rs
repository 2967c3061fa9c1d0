use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Problem-detail body returned for every failed request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

impl ProblemDetail {
    pub fn new(status: StatusCode, detail: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            type_: "about:blank".to_string(),
            title: status.canonical_reason().unwrap_or("Unknown").to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: instance.into(),
        }
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into a problem-detail body for the request at `instance`.
    /// Server-side failures are logged and answered with a generic detail.
    pub fn to_problem(&self, instance: &str) -> ProblemDetail {
        let status = self.status();
        let detail = match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::BadRequest(message) => message.clone(),
            other => {
                error!("{} {}", instance, other);
                "Internal server error".to_string()
            }
        };
        ProblemDetail::new(status, detail, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_share_bad_request_status() {
        assert_eq!(
            AppError::Validation("이름을 입력해주세요.".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("고객 정보를 찾을 수 없습니다.".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_problem_detail_shape() {
        let problem = AppError::NotFound("고객 정보를 찾을 수 없습니다.".to_string())
            .to_problem("/customer/1000");

        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["title"], "Bad Request");
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "고객 정보를 찾을 수 없습니다.");
        assert_eq!(json["instance"], "/customer/1000");
    }

    #[test]
    fn test_database_error_detail_is_hidden() {
        let problem =
            AppError::Database("no such table: customer".to_string()).to_problem("/customer");

        assert_eq!(problem.status, 500);
        assert_eq!(problem.title, "Internal Server Error");
        assert_eq!(problem.detail, "Internal server error");
    }
}
