//! Win/lose evaluation run after every dispatched action.

use serde::{Deserialize, Serialize};

use crate::constants::STARVATION_GRACE_DAYS;
use crate::state::GameState;

/// Why a journey ended in defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossCause {
    /// Every party member reached zero health.
    PartyPerished,
    /// No oxen remain to pull the wagon.
    NoOxen,
    /// Out of food after the opening grace period.
    Starvation,
}

impl LossCause {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PartyPerished => "party_perished",
            Self::NoOxen => "no_oxen",
            Self::Starvation => "starvation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing { remaining_miles: u32 },
    Won { days: u32 },
    Lost { cause: LossCause, day: u32 },
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing { .. })
    }

    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won { .. })
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ongoing { .. } => "ongoing",
            Self::Won { .. } => "won",
            Self::Lost { .. } => "lost",
        }
    }
}

/// Evaluate the journey without mutating it. Victory is checked before any
/// loss condition.
#[must_use]
pub fn evaluate_status(state: &GameState) -> GameStatus {
    let ledger = &state.ledger;
    let destination = state.destination_distance;
    if ledger.distance >= destination {
        return GameStatus::Won { days: ledger.day };
    }
    let cause = if ledger.alive_count() == 0 {
        Some(LossCause::PartyPerished)
    } else if ledger.oxen == 0 {
        Some(LossCause::NoOxen)
    } else if ledger.food == 0 && ledger.day > STARVATION_GRACE_DAYS {
        Some(LossCause::Starvation)
    } else {
        None
    };
    match cause {
        Some(cause) => GameStatus::Lost {
            cause,
            day: ledger.day,
        },
        None => GameStatus::Ongoing {
            remaining_miles: destination - ledger.distance,
        },
    }
}
