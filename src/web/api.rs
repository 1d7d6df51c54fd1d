//! JSON API: health, development sign-in, stats and tournament writes.

use super::{ApiError, AppState};
use crate::auth::SESSION_KEY;
use crate::models::{Identity, Session, TournamentId, UserId};
use crate::profile::aggregate_stats;
use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    HttpRequest, HttpResponse,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Session lifetime when the sign-in body does not give one (30 days).
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 30 * 24 * 3600;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Body of `POST /api/session`. A missing `user` stores a session without a user record.
#[derive(Deserialize)]
pub(super) struct SignInBody {
    #[serde(default)]
    user: Option<Identity>,
    #[serde(default)]
    max_age_secs: Option<i64>,
}

#[derive(Deserialize)]
pub(super) struct CreateTournamentBody {
    name: String,
}

#[derive(Deserialize)]
pub(super) struct RecordMatchBody {
    #[serde(default)]
    winner_id: Option<UserId>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
pub(super) struct TournamentPath {
    id: TournamentId,
}

/// Signed-in identity, or the error the API reports instead.
async fn require_identity(req: &HttpRequest, state: &AppState) -> Result<Identity, ApiError> {
    state
        .resolver
        .resolve_session(req)
        .await?
        .and_then(|s| s.user)
        .ok_or(ApiError::Unauthorized)
}

#[get("/api/health")]
pub(super) async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tourney-pro-web",
    })
}

/// Store a session in the signed cookie. Stands in for a real identity provider.
#[post("/api/session")]
pub(super) async fn api_sign_in(
    session: actix_session::Session,
    body: Json<SignInBody>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();
    let max_age = body.max_age_secs.unwrap_or(DEFAULT_SESSION_MAX_AGE_SECS);
    if let Some(user) = &body.user {
        if user.id.as_str().trim().is_empty() {
            return Err(ApiError::BadRequest("User id must not be empty".to_string()));
        }
    }
    let expires = Duration::try_seconds(max_age)
        .and_then(|d| Utc::now().checked_add_signed(d))
        .ok_or_else(|| ApiError::BadRequest("max_age_secs out of range".to_string()))?;
    let stored = Session::new(body.user, expires);
    session.renew();
    session
        .insert(SESSION_KEY, &stored)
        .map_err(|e| ApiError::SessionWrite(e.to_string()))?;
    log::info!(
        "Session created for {}",
        stored
            .user
            .as_ref()
            .map(|u| u.id.as_str())
            .unwrap_or("<no user>")
    );
    Ok(HttpResponse::Ok().json(&stored))
}

#[delete("/api/session")]
pub(super) async fn api_sign_out(session: actix_session::Session) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// The signed-in user's profile counts.
#[get("/api/profile/stats")]
pub(super) async fn api_profile_stats(
    req: HttpRequest,
    state: Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req, &state).await?;
    let stats = aggregate_stats(state.stats.as_ref(), &identity.id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Create a tournament organized by the signed-in user.
#[post("/api/tournaments")]
pub(super) async fn api_create_tournament(
    req: HttpRequest,
    state: Data<AppState>,
    body: Json<CreateTournamentBody>,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req, &state).await?;
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Tournament name must not be empty".to_string()));
    }
    let tournament = state.tournaments.create_tournament(name, &identity.id).await?;
    log::info!("Tournament {} created by {}", tournament.id, identity.id);
    Ok(HttpResponse::Ok().json(tournament))
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
pub(super) async fn api_get_tournament(
    state: Data<AppState>,
    path: Path<TournamentPath>,
) -> Result<HttpResponse, ApiError> {
    let tournament = state.tournaments.get_tournament(path.id).await?;
    Ok(HttpResponse::Ok().json(tournament))
}

/// Join a tournament as the signed-in user.
#[post("/api/tournaments/{id}/participants")]
pub(super) async fn api_join_tournament(
    req: HttpRequest,
    state: Data<AppState>,
    path: Path<TournamentPath>,
) -> Result<HttpResponse, ApiError> {
    let identity = require_identity(&req, &state).await?;
    let participant = state
        .tournaments
        .join_tournament(path.id, &identity.id)
        .await?;
    Ok(HttpResponse::Ok().json(participant))
}

/// Record a match in a tournament, optionally with its winner.
#[post("/api/tournaments/{id}/matches")]
pub(super) async fn api_record_match(
    req: HttpRequest,
    state: Data<AppState>,
    path: Path<TournamentPath>,
    body: Json<RecordMatchBody>,
) -> Result<HttpResponse, ApiError> {
    require_identity(&req, &state).await?;
    let game = state
        .tournaments
        .record_match(path.id, body.into_inner().winner_id)
        .await?;
    Ok(HttpResponse::Ok().json(game))
}
