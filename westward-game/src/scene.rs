//! Narrative scenes and the choices each one offers.
//!
//! Scenes never transition on their own; the dispatcher moves between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::action::ActionId;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    #[default]
    Initial,
    Main,
    Supplies,
    BrokenWagon,
    EndWin,
    EndLose,
}

/// A labelled button offered by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: &'static str,
    pub action: ActionId,
}

const fn choice(label: &'static str, action: ActionId) -> Choice {
    Choice { label, action }
}

const INITIAL_CHOICES: [Choice; 1] = [choice("Start Journey", ActionId::InitialStart)];
const MAIN_CHOICES: [Choice; 4] = [
    choice("Travel Forward", ActionId::Travel),
    choice("Stop and Hunt", ActionId::Hunt),
    choice("Rest for a Day", ActionId::Rest),
    choice("Check Supplies", ActionId::Supplies),
];
const SUPPLIES_CHOICES: [Choice; 1] = [choice("Return to Trail", ActionId::Main)];
const BROKEN_WAGON_CHOICES: [Choice; 2] = [
    choice("Use a Spare Part (1 needed)", ActionId::Repair),
    choice("Rest and Wait (DANGER)", ActionId::Rest),
];

impl SceneId {
    pub const ALL: [Self; 6] = [
        Self::Initial,
        Self::Main,
        Self::Supplies,
        Self::BrokenWagon,
        Self::EndWin,
        Self::EndLose,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Main => "main",
            Self::Supplies => "supplies",
            Self::BrokenWagon => "broken_wagon",
            Self::EndWin => "end_win",
            Self::EndLose => "end_lose",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::EndWin | Self::EndLose)
    }

    /// Buttons presented in this scene, in display order.
    #[must_use]
    pub const fn choices(self) -> &'static [Choice] {
        match self {
            Self::Initial => &INITIAL_CHOICES,
            Self::Main => &MAIN_CHOICES,
            Self::Supplies => &SUPPLIES_CHOICES,
            Self::BrokenWagon => &BROKEN_WAGON_CHOICES,
            Self::EndWin | Self::EndLose => &[],
        }
    }

    /// Display text for this scene, rendered from the current state.
    #[must_use]
    pub fn render_text(self, state: &GameState) -> String {
        let ledger = &state.ledger;
        match self {
            Self::Initial => format!(
                "Welcome to the trail! Your goal is to travel {} miles to your destination. \
                 Choose Start Journey to begin.",
                state.destination_distance
            ),
            Self::Main => "You are on the trail. What is your next move?".to_string(),
            Self::Supplies => format!(
                "Current Supplies:\nFood: {} lbs\nOxen: {}\nSpare Parts: {}",
                ledger.food, ledger.oxen, ledger.wagon_parts
            ),
            Self::BrokenWagon => {
                "Your wagon is broken! You must repair it before moving on.".to_string()
            }
            Self::EndWin => format!(
                "You reached your destination after {} days on the trail.",
                ledger.day
            ),
            Self::EndLose => format!(
                "The journey ended {} miles short of your destination.",
                state.remaining_distance()
            ),
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scene| scene.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrailConfig;

    #[test]
    fn terminal_scenes_offer_nothing() {
        for scene in [SceneId::EndWin, SceneId::EndLose] {
            assert!(scene.is_terminal());
            assert!(scene.choices().is_empty());
        }
    }

    #[test]
    fn hub_choices_keep_their_order() {
        let actions: Vec<_> = SceneId::Main.choices().iter().map(|c| c.action).collect();
        assert_eq!(
            actions,
            vec![
                ActionId::Travel,
                ActionId::Hunt,
                ActionId::Rest,
                ActionId::Supplies
            ]
        );
        assert!(
            SceneId::Main
                .choices()
                .iter()
                .all(|c| c.action != ActionId::Repair)
        );
    }

    #[test]
    fn supplies_text_reflects_current_ledger() {
        let mut state = GameState::new(&TrailConfig::default());
        let before = SceneId::Supplies.render_text(&state);
        assert!(before.contains("Food: 500 lbs"));
        state.ledger.food = 123;
        state.ledger.wagon_parts = 0;
        let after = SceneId::Supplies.render_text(&state);
        assert!(after.contains("Food: 123 lbs"));
        assert!(after.contains("Spare Parts: 0"));
    }

    #[test]
    fn initial_text_names_the_destination() {
        let state = GameState::new(&TrailConfig::default().with_destination(750));
        assert!(SceneId::Initial.render_text(&state).contains("750 miles"));
    }

    #[test]
    fn ids_parse_back() {
        for scene in SceneId::ALL {
            assert_eq!(scene.as_str().parse::<SceneId>(), Ok(scene));
        }
        assert!("river".parse::<SceneId>().is_err());
    }
}
