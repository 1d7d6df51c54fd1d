//! In-memory store: tournaments, participants and matches behind one RwLock.

use super::{StatsStore, StoreError, TournamentRepository};
use crate::models::{GameMatch, Tournament, TournamentId, TournamentParticipant, UserId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    tournaments: HashMap<TournamentId, Tournament>,
    participants: Vec<TournamentParticipant>,
    matches: Vec<GameMatch>,
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait(?Send)]
impl StatsStore for InMemoryStore {
    async fn count_participations(&self, user_id: &UserId) -> Result<u64, StoreError> {
        let g = self.read()?;
        Ok(g.participants.iter().filter(|p| &p.user_id == user_id).count() as u64)
    }

    async fn count_matches_won(&self, user_id: &UserId) -> Result<u64, StoreError> {
        let g = self.read()?;
        Ok(g.matches
            .iter()
            .filter(|m| m.winner_id.as_ref() == Some(user_id))
            .count() as u64)
    }

    async fn count_tournaments_organized(&self, user_id: &UserId) -> Result<u64, StoreError> {
        let g = self.read()?;
        Ok(g.tournaments
            .values()
            .filter(|t| &t.organizer_id == user_id)
            .count() as u64)
    }
}

#[async_trait(?Send)]
impl TournamentRepository for InMemoryStore {
    async fn get_tournament(&self, id: TournamentId) -> Result<Tournament, StoreError> {
        self.read()?
            .tournaments
            .get(&id)
            .cloned()
            .ok_or(StoreError::TournamentNotFound(id))
    }

    async fn create_tournament(
        &self,
        name: &str,
        organizer_id: &UserId,
    ) -> Result<Tournament, StoreError> {
        let tournament = Tournament::new(name, organizer_id.clone());
        self.write()?
            .tournaments
            .insert(tournament.id, tournament.clone());
        Ok(tournament)
    }

    async fn join_tournament(
        &self,
        tournament_id: TournamentId,
        user_id: &UserId,
    ) -> Result<TournamentParticipant, StoreError> {
        let mut g = self.write()?;
        if !g.tournaments.contains_key(&tournament_id) {
            return Err(StoreError::TournamentNotFound(tournament_id));
        }
        if let Some(existing) = g
            .participants
            .iter()
            .find(|p| p.tournament_id == tournament_id && &p.user_id == user_id)
        {
            return Ok(existing.clone());
        }
        let participant = TournamentParticipant {
            tournament_id,
            user_id: user_id.clone(),
            joined_at: Utc::now(),
        };
        g.participants.push(participant.clone());
        Ok(participant)
    }

    async fn record_match(
        &self,
        tournament_id: TournamentId,
        winner_id: Option<UserId>,
    ) -> Result<GameMatch, StoreError> {
        let mut g = self.write()?;
        if !g.tournaments.contains_key(&tournament_id) {
            return Err(StoreError::TournamentNotFound(tournament_id));
        }
        let game = GameMatch::new(tournament_id, winner_id);
        g.matches.push(game.clone());
        Ok(game)
    }
}
