//! ProfileStats: the three aggregate counts shown on the profile page.

use serde::{Deserialize, Serialize};

/// Per-user counts, computed fresh for every request.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub tournaments_joined: u64,
    pub matches_won: u64,
    pub tournaments_organized: u64,
}
