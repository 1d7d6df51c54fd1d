//! HTTP layer: shared state, routes and session middleware.

mod api;
mod error;
mod pages;

pub use error::{ApiError, PageError};

use crate::auth::{CookieSessionResolver, SessionResolver};
use crate::store::{InMemoryStore, StatsStore, TournamentRepository};
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::web;
use std::sync::Arc;

/// Collaborators shared by all workers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn SessionResolver>,
    pub stats: Arc<dyn StatsStore>,
    pub tournaments: Arc<dyn TournamentRepository>,
}

impl AppState {
    pub fn new(
        resolver: Arc<dyn SessionResolver>,
        stats: Arc<dyn StatsStore>,
        tournaments: Arc<dyn TournamentRepository>,
    ) -> Self {
        Self {
            resolver,
            stats,
            tournaments,
        }
    }

    /// Cookie sessions over one in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    /// Cookie sessions over the given store.
    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            resolver: Arc::new(CookieSessionResolver),
            stats: store.clone(),
            tournaments: store,
        }
    }
}

/// Signed cookie sessions.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .build()
}

/// Register pages and API routes. Static files are mounted by the binary.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::index)
        .service(pages::profile_page)
        .service(pages::favicon)
        .service(api::api_health)
        .service(api::api_sign_in)
        .service(api::api_sign_out)
        .service(api::api_profile_stats)
        .service(api::api_create_tournament)
        .service(api::api_get_tournament)
        .service(api::api_join_tournament)
        .service(api::api_record_match);
}
