//! TourneyPro web app: library with models, profile aggregation, rendering and routes.

pub mod auth;
pub mod config;
pub mod models;
pub mod profile;
pub mod store;
pub mod view;
pub mod web;

pub use auth::{AuthError, CookieSessionResolver, SessionResolver};
pub use config::ServerConfig;
pub use models::{
    GameMatch, Identity, MatchId, ProfileStats, Session, Tournament, TournamentId,
    TournamentParticipant, UserId,
};
pub use profile::{aggregate_stats, load_view_state, ViewState};
pub use store::{InMemoryStore, StatsStore, StoreError, TournamentRepository};
pub use web::{ApiError, AppState, PageError};
