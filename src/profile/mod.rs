//! Profile page logic: resolve the session, then aggregate the user's stats.

use crate::auth::SessionResolver;
use crate::models::{Identity, ProfileStats, UserId};
use crate::store::{StatsStore, StoreError};
use actix_web::HttpRequest;

/// Terminal render state of one profile request. Exactly one holds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewState {
    /// The session resolver faulted.
    AuthError,
    /// No session.
    Unauthenticated,
    /// A session without a user record.
    ProfileMissing,
    Loaded(Identity, ProfileStats),
}

impl ViewState {
    /// The signed-in identity, only when the profile loaded.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            ViewState::Loaded(identity, _) => Some(identity),
            _ => None,
        }
    }
}

/// Run the three counts for `user_id` concurrently. All succeed or the first
/// failure is returned.
pub async fn aggregate_stats(
    store: &dyn StatsStore,
    user_id: &UserId,
) -> Result<ProfileStats, StoreError> {
    let (tournaments_joined, matches_won, tournaments_organized) = tokio::try_join!(
        store.count_participations(user_id),
        store.count_matches_won(user_id),
        store.count_tournaments_organized(user_id),
    )?;
    Ok(ProfileStats {
        tournaments_joined,
        matches_won,
        tournaments_organized,
    })
}

/// Resolve the view state for a profile request.
///
/// Resolver faults become [`ViewState::AuthError`]; store faults are returned
/// to the caller unchanged.
pub async fn load_view_state(
    resolver: &dyn SessionResolver,
    store: &dyn StatsStore,
    req: &HttpRequest,
) -> Result<ViewState, StoreError> {
    let session = match resolver.resolve_session(req).await {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Session resolution failed: {}", e);
            return Ok(ViewState::AuthError);
        }
    };
    let Some(session) = session else {
        return Ok(ViewState::Unauthenticated);
    };
    let Some(identity) = session.user else {
        return Ok(ViewState::ProfileMissing);
    };
    let stats = aggregate_stats(store, &identity.id).await.map_err(|e| {
        log::error!("Profile stats query failed for user {}: {}", identity.id, e);
        e
    })?;
    Ok(ViewState::Loaded(identity, stats))
}
