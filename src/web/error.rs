//! Errors returned by pages and by the JSON API.

use crate::auth::AuthError;
use crate::store::StoreError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Page handler failures. Not rendered by the page: actix-web's default error
/// response (500) applies.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for PageError {}

/// API failures, rendered as `{ "error": "..." }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to load session")]
    Session(#[from] AuthError),
    #[error("Failed to store session")]
    SessionWrite(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::TournamentNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Session(_) | ApiError::SessionWrite(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("API error: {:?}", self);
            "Internal error".to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(serde_json::json!({ "error": message }))
    }
}
