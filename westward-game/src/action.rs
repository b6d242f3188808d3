//! Player actions accepted by the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    Travel,
    Hunt,
    Rest,
    Supplies,
    Repair,
    InitialStart,
    Main,
}

impl ActionId {
    pub const ALL: [Self; 7] = [
        Self::Travel,
        Self::Hunt,
        Self::Rest,
        Self::Supplies,
        Self::Repair,
        Self::InitialStart,
        Self::Main,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::Hunt => "hunt",
            Self::Rest => "rest",
            Self::Supplies => "supplies",
            Self::Repair => "repair",
            Self::InitialStart => "initial_start",
            Self::Main => "main",
        }
    }

    /// Whether the action spends a day on the trail.
    #[must_use]
    pub const fn consumes_day(self) -> bool {
        matches!(self, Self::Travel | Self::Hunt | Self::Rest)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action id `{0}`")]
pub struct ParseActionError(pub String);

impl FromStr for ActionId {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == trimmed)
            .ok_or_else(|| ParseActionError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for action in ActionId::ALL {
            assert_eq!(action.as_str().parse::<ActionId>(), Ok(action));
            assert_eq!(action.to_string(), action.as_str());
        }
        assert_eq!(" hunt ".parse::<ActionId>(), Ok(ActionId::Hunt));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let err = "ford_river".parse::<ActionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown action id `ford_river`");
    }

    #[test]
    fn only_trail_actions_consume_days() {
        let consuming: Vec<_> = ActionId::ALL
            .into_iter()
            .filter(|a| a.consumes_day())
            .collect();
        assert_eq!(
            consuming,
            vec![ActionId::Travel, ActionId::Hunt, ActionId::Rest]
        );
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&ActionId::InitialStart).unwrap();
        assert_eq!(json, "\"initial_start\"");
    }
}
