//! End-of-journey summary used by result screens and reports.
use serde::{Deserialize, Serialize};

use crate::state::{GameState, JourneyStats};
use crate::status::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySummary {
    pub status: GameStatus,
    pub headline: String,
    pub days: u32,
    pub distance: u32,
    pub remaining_miles: u32,
    pub food: u32,
    pub oxen: u32,
    pub wagon_parts: u32,
    pub survivors: u32,
    pub party_size: u32,
    /// Sum of party health over the roster size, rounded down.
    pub average_health: u32,
    pub stats: JourneyStats,
}

impl JourneySummary {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let ledger = &state.ledger;
        let status = state.status();
        let party_size = ledger.party_size();
        let total_health: u32 = ledger
            .party
            .iter()
            .map(|member| u32::from(member.health))
            .sum();
        Self {
            status,
            headline: status.to_string(),
            days: ledger.day,
            distance: ledger.distance,
            remaining_miles: state.remaining_distance(),
            food: ledger.food,
            oxen: ledger.oxen,
            wagon_parts: ledger.wagon_parts,
            survivors: ledger.alive_count(),
            party_size,
            average_health: total_health.checked_div(party_size).unwrap_or(0),
            stats: state.stats,
        }
    }

    /// `won`, `lost`, or `ongoing`.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        self.status.key()
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.status.is_win()
    }
}
