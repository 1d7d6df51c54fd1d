//! Session resolver backed by actix-session's signed cookie store.

use super::{AuthError, SessionResolver};
use crate::models::Session;
use actix_session::SessionExt;
use actix_web::HttpRequest;
use async_trait::async_trait;
use chrono::Utc;

/// Key under which the serialized [`Session`] lives in the cookie session.
pub const SESSION_KEY: &str = "session";

/// Reads the [`Session`] that `POST /api/session` stored. Requires `SessionMiddleware`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieSessionResolver;

#[async_trait(?Send)]
impl SessionResolver for CookieSessionResolver {
    async fn resolve_session(&self, req: &HttpRequest) -> Result<Option<Session>, AuthError> {
        let stored = req
            .get_session()
            .get::<Session>(SESSION_KEY)
            .map_err(|e| AuthError::Read(e.to_string()))?;
        Ok(stored.filter(|s| !s.is_expired(Utc::now())))
    }
}
