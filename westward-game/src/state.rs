//! The owned game aggregate passed explicitly to every core operation.

use serde::{Deserialize, Serialize};

use crate::config::TrailConfig;
use crate::ledger::ResourceLedger;
use crate::scene::SceneId;
use crate::status::{GameStatus, evaluate_status};

/// Running counters kept for summaries and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct JourneyStats {
    pub travel_days: u32,
    pub hunt_days: u32,
    pub rest_days: u32,
    pub blocked_actions: u32,
    pub random_events: u32,
    pub bonus_miles: u32,
    pub food_hunted: u32,
    pub parts_used: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub ledger: ResourceLedger,
    pub scene: SceneId,
    pub destination_distance: u32,
    /// Terminal status, recorded the first time the journey ends.
    #[serde(default)]
    pub ending: Option<GameStatus>,
    #[serde(default)]
    pub stats: JourneyStats,
}

impl GameState {
    /// Opening state for a configuration, parked on the `initial` scene.
    #[must_use]
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            ledger: ResourceLedger::from_config(config),
            scene: SceneId::Initial,
            destination_distance: config.destination_distance,
            ending: None,
            stats: JourneyStats::default(),
        }
    }

    /// Current status: the recorded ending if any, otherwise a fresh evaluation.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.ending.unwrap_or_else(|| evaluate_status(self))
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.scene.is_terminal()
    }

    #[must_use]
    pub const fn remaining_distance(&self) -> u32 {
        self.destination_distance.saturating_sub(self.ledger.distance)
    }

    /// Rendered text for the active scene.
    #[must_use]
    pub fn scene_text(&self) -> String {
        self.scene.render_text(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&TrailConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::LossCause;

    #[test]
    fn new_state_starts_on_initial_scene() {
        let state = GameState::default();
        assert_eq!(state.scene, SceneId::Initial);
        assert_eq!(state.destination_distance, 2_000);
        assert_eq!(state.remaining_distance(), 2_000);
        assert!(state.ending.is_none());
        assert!(!state.is_over());
        assert!(state.scene_text().contains("2000 miles"));
    }

    #[test]
    fn recorded_ending_wins_over_live_evaluation() {
        let mut state = GameState::default();
        state.ending = Some(GameStatus::Lost {
            cause: LossCause::NoOxen,
            day: 3,
        });
        state.ledger.distance = 5_000;
        assert_eq!(
            state.status(),
            GameStatus::Lost {
                cause: LossCause::NoOxen,
                day: 3
            }
        );
        assert_eq!(state.remaining_distance(), 0);
    }

    #[test]
    fn state_serializes_round_trip() {
        let mut state = GameState::default();
        state.stats.travel_days = 4;
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, state);
    }
}
