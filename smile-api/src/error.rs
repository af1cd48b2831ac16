use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use smile_core::PriceError;

#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed query parameters. Always 400, never 422.
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<PriceError> for AppError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::MissingParameter | PriceError::InvalidDate(_) => {
                AppError::ValidationError(err.to_string())
            }
            PriceError::NotFound(not_found) => AppError::NotFoundError(not_found.to_string()),
            PriceError::Catalog(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
