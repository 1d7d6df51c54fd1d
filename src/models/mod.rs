//! Data structures: identities, sessions, profile stats and store records.

mod identity;
mod stats;
mod tournament;

pub use identity::{Identity, Session, UserId};
pub use stats::ProfileStats;
pub use tournament::{GameMatch, MatchId, Tournament, TournamentId, TournamentParticipant};
