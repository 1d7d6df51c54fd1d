//! Store collaborator: read-only counts for the profile page, plus the
//! tournament writes that produce those records.

mod memory;

pub use memory::InMemoryStore;

use crate::models::{GameMatch, Tournament, TournamentId, TournamentParticipant, UserId};
use async_trait::async_trait;

/// Errors raised by the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
    #[error("tournament {0} not found")]
    TournamentNotFound(TournamentId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Three independent counts keyed by user id.
#[async_trait(?Send)]
pub trait StatsStore: Send + Sync {
    /// Participation records where the participant is `user_id`.
    async fn count_participations(&self, user_id: &UserId) -> Result<u64, StoreError>;

    /// Match records won by `user_id`.
    async fn count_matches_won(&self, user_id: &UserId) -> Result<u64, StoreError>;

    /// Tournament records organized by `user_id`.
    async fn count_tournaments_organized(&self, user_id: &UserId) -> Result<u64, StoreError>;
}

/// Writes behind the tournament API.
#[async_trait(?Send)]
pub trait TournamentRepository: Send + Sync {
    async fn get_tournament(&self, id: TournamentId) -> Result<Tournament, StoreError>;

    async fn create_tournament(
        &self,
        name: &str,
        organizer_id: &UserId,
    ) -> Result<Tournament, StoreError>;

    /// Idempotent: joining twice keeps one participation record.
    async fn join_tournament(
        &self,
        tournament_id: TournamentId,
        user_id: &UserId,
    ) -> Result<TournamentParticipant, StoreError>;

    async fn record_match(
        &self,
        tournament_id: TournamentId,
        winner_id: Option<UserId>,
    ) -> Result<GameMatch, StoreError>;
}
