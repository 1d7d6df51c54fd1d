//! Session resolution: obtain the current session (or none) for a request.

mod cookie;

pub use cookie::{CookieSessionResolver, SESSION_KEY};

use crate::models::Session;
use actix_web::HttpRequest;
use async_trait::async_trait;

/// The auth collaborator failed to produce an answer (distinct from "no session").
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to read session: {0}")]
    Read(String),
    #[error("auth backend unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the session attached to a request.
#[async_trait(?Send)]
pub trait SessionResolver: Send + Sync {
    /// `Ok(None)` when the request carries no (live) session.
    async fn resolve_session(&self, req: &HttpRequest) -> Result<Option<Session>, AuthError>;
}
