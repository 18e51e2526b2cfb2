use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Errors produced by the user service. Every variant maps to a single
/// HTTP status and a `{"error": "..."}` JSON body.
#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Invalid ID format")]
    InvalidId,

    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ResponseError for UserServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            UserServiceError::Validation(_) | UserServiceError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            UserServiceError::NotFound => StatusCode::NOT_FOUND,
            UserServiceError::Database(_) | UserServiceError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
