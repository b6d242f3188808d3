//! Read-only view of the journey handed to renderers after each turn.

use serde::Serialize;

use crate::dispatch::TurnReport;
use crate::notice::Notice;
use crate::scene::{Choice, SceneId};
use crate::state::GameState;
use crate::status::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSnapshot {
    pub name: String,
    pub health: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub day: u32,
    pub distance: u32,
    pub destination_distance: u32,
    pub food: u32,
    pub oxen: u32,
    pub wagon_parts: u32,
    pub party: Vec<MemberSnapshot>,
    pub scene: SceneId,
    pub scene_text: String,
    pub choices: Vec<Choice>,
    pub status: GameStatus,
    pub status_message: String,
    /// Structured notices from the last turn.
    pub notices: Vec<Notice>,
    /// Rendered copy for every notice of the last turn, in order.
    pub messages: Vec<String>,
    /// Rendered copy for the random events of the last turn only.
    pub event_messages: Vec<String>,
}

impl Snapshot {
    /// Capture `state`, attaching the notices of `last_turn` when given.
    #[must_use]
    pub fn capture(state: &GameState, last_turn: Option<&TurnReport>) -> Self {
        let ledger = &state.ledger;
        let status = last_turn.map_or_else(|| state.status(), |report| report.status);
        let notices: Vec<Notice> = last_turn
            .map(|report| report.notices.to_vec())
            .unwrap_or_default();
        Self {
            day: ledger.day,
            distance: ledger.distance,
            destination_distance: state.destination_distance,
            food: ledger.food,
            oxen: ledger.oxen,
            wagon_parts: ledger.wagon_parts,
            party: ledger
                .party
                .iter()
                .map(|member| MemberSnapshot {
                    name: member.name.clone(),
                    health: member.health,
                })
                .collect(),
            scene: state.scene,
            scene_text: state.scene_text(),
            choices: state.scene.choices().to_vec(),
            status,
            status_message: status.to_string(),
            messages: notices.iter().map(ToString::to_string).collect(),
            event_messages: last_turn
                .map(TurnReport::event_messages)
                .unwrap_or_default(),
            notices,
        }
    }

    #[must_use]
    pub fn party_health(&self) -> Vec<u8> {
        self.party.iter().map(|member| member.health).collect()
    }

    /// Fraction of the trail covered, capped at 1.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.destination_distance == 0 {
            return 1.0;
        }
        (f64::from(self.distance) / f64::from(self.destination_distance)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionId;
    use crate::dispatch::dispatch;
    use crate::rng::ScriptedRng;

    #[test]
    fn fresh_snapshot_shows_opening_scene() {
        let state = GameState::default();
        let snapshot = Snapshot::capture(&state, None);
        assert_eq!(snapshot.scene, SceneId::Initial);
        assert_eq!(snapshot.choices.len(), 1);
        assert_eq!(snapshot.choices[0].action, ActionId::InitialStart);
        assert_eq!(snapshot.party_health(), vec![100, 100, 100, 100]);
        assert_eq!(snapshot.status_message, "Distance to go: 2000 miles.");
        assert!(snapshot.messages.is_empty());
        assert!(snapshot.event_messages.is_empty());
        assert!(snapshot.progress().abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_carries_last_turn_messages() {
        let mut state = GameState::default();
        let mut rng = ScriptedRng::new([]);
        let report = dispatch(ActionId::InitialStart, &mut state, &mut rng);
        let snapshot = Snapshot::capture(&state, Some(&report));
        assert_eq!(snapshot.scene, SceneId::Main);
        assert_eq!(snapshot.choices.len(), 4);
        assert_eq!(
            snapshot.messages,
            vec!["The journey has begun! Head west!".to_string()]
        );
        assert!(snapshot.event_messages.is_empty());
    }

    #[test]
    fn event_messages_hold_only_random_events() {
        let mut state = GameState::default();
        // Good weather on the first travel day.
        let mut rng = ScriptedRng::new([0.1, 0.4]);
        let report = dispatch(ActionId::Travel, &mut state, &mut rng);
        let snapshot = Snapshot::capture(&state, Some(&report));

        assert_eq!(snapshot.messages.len(), 2);
        assert!(snapshot.messages[0].starts_with("You traveled 55 miles"));
        assert_eq!(snapshot.event_messages.len(), 1);
        assert!(snapshot.event_messages[0].starts_with("**RANDOM EVENT:**"));
        assert_eq!(snapshot.event_messages[0], snapshot.messages[1]);
        assert_eq!(snapshot.status_message, "Distance to go: 1945 miles.");
    }

    #[test]
    fn snapshot_serializes_for_views() {
        let snapshot = Snapshot::capture(&GameState::default(), None);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["scene"], "initial");
        assert_eq!(json["status"]["state"], "ongoing");
        assert_eq!(json["choices"][0]["label"], "Start Journey");
        assert_eq!(json["party"][3]["name"], "Child 2");
    }
}
