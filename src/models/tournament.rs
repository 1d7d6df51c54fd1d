//! Store records: tournaments, participations and matches.

use crate::models::identity::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A tournament and the user who organizes it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub organizer_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn new(name: impl Into<String>, organizer_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            organizer_id,
            created_at: Utc::now(),
        }
    }
}

/// One user taking part in one tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentParticipant {
    pub tournament_id: TournamentId,
    pub user_id: UserId,
    pub joined_at: DateTime<Utc>,
}

/// A played (or pending) match inside a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// None if not yet decided.
    pub winner_id: Option<UserId>,
    pub played_at: DateTime<Utc>,
}

impl GameMatch {
    pub fn new(tournament_id: TournamentId, winner_id: Option<UserId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            winner_id,
            played_at: Utc::now(),
        }
    }
}
