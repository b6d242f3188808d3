//! Structured journal of what a dispatched action did.
//!
//! Notices carry data only. English wording lives in [`crate::text`] so a
//! view can substitute its own copy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::action::ActionId;
use crate::events::EventOutcome;
use crate::scene::SceneId;

/// Most turns produce one to three notices.
pub type TurnNotices = SmallVec<[Notice; 4]>;

/// Why travel did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelBlock {
    NoOxen,
    BrokenWagon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    JourneyBegun,
    ReturnedToTrail,
    Traveled {
        miles: u32,
        bonus_miles: u32,
    },
    TravelBlocked {
        reason: TravelBlock,
    },
    /// The larder is empty; the whole party lost health.
    Starving {
        health_lost: u32,
    },
    Hunted {
        food_gained: u32,
    },
    LeaderInjured {
        name: String,
        health: u8,
    },
    Rested,
    /// Rest with an empty larder; the party still lost health.
    RestedWithoutFood {
        health_lost: u32,
    },
    SuppliesChecked,
    Repaired {
        parts_left: u32,
    },
    NoSpareParts,
    ActionUnavailable {
        action: ActionId,
        scene: SceneId,
    },
    UnknownAction {
        id: String,
    },
    JourneyOver,
    Event(EventOutcome),
}

impl Notice {
    /// Whether this notice reports a random event rather than the action itself.
    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }

    /// Notices that mean the action changed nothing.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::TravelBlocked { .. }
                | Self::NoSpareParts
                | Self::ActionUnavailable { .. }
                | Self::UnknownAction { .. }
                | Self::JourneyOver
        )
    }
}
