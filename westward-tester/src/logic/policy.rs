use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use westward_game::{ActionId, GameState, SceneId};

/// Decision returned by a [`PlayerPolicy`]
#[derive(Debug, Clone)]
pub struct PolicyDecision {
    pub action: ActionId,
    pub rationale: Option<String>,
}

impl PolicyDecision {
    #[must_use]
    pub const fn new(action: ActionId, rationale: Option<String>) -> Self {
        Self { action, rationale }
    }

    fn because(action: ActionId, rationale: impl Into<String>) -> Self {
        Self::new(action, Some(rationale.into()))
    }
}

/// Policy interface for automated play strategies.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Select the next action for the current scene.
    fn pick_action(&mut self, state: &GameState) -> PolicyDecision;
}

/// Built-in gameplay strategies for automated runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameplayStrategy {
    Steady,
    Cautious,
    Reckless,
    Random,
}

impl GameplayStrategy {
    pub const ALL: [Self; 4] = [Self::Steady, Self::Cautious, Self::Reckless, Self::Random];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Steady => "Steady",
            Self::Cautious => "Cautious",
            Self::Reckless => "Reckless",
            Self::Random => "Random",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy + Send> {
        match self {
            Self::Steady => Box::new(ProvisionPolicy::steady()),
            Self::Cautious => Box::new(ProvisionPolicy::cautious()),
            Self::Reckless => Box::new(RecklessPolicy),
            Self::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

impl fmt::Display for GameplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold-driven play: hunt below a food floor, rest below a health
/// floor, repair whenever possible, otherwise travel.
struct ProvisionPolicy {
    name: &'static str,
    food_floor: u32,
    health_floor: u8,
    check_supplies_every: Option<u32>,
    last_check_day: Option<u32>,
}

impl ProvisionPolicy {
    const fn steady() -> Self {
        Self {
            name: "Steady",
            food_floor: 60,
            health_floor: 40,
            check_supplies_every: None,
            last_check_day: None,
        }
    }

    const fn cautious() -> Self {
        Self {
            name: "Cautious",
            food_floor: 150,
            health_floor: 70,
            check_supplies_every: Some(10),
            last_check_day: None,
        }
    }

    fn wants_supply_check(&self, day: u32) -> bool {
        self.check_supplies_every
            .is_some_and(|every| day > 0 && day % every == 0 && self.last_check_day != Some(day))
    }
}

impl PlayerPolicy for ProvisionPolicy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn pick_action(&mut self, state: &GameState) -> PolicyDecision {
        let ledger = &state.ledger;
        match state.scene {
            SceneId::Initial => PolicyDecision::because(ActionId::InitialStart, "begin"),
            SceneId::Supplies => PolicyDecision::because(ActionId::Main, "back to trail"),
            SceneId::BrokenWagon if ledger.wagon_parts > 0 => {
                PolicyDecision::because(ActionId::Repair, "spare part on hand")
            }
            SceneId::BrokenWagon => PolicyDecision::because(ActionId::Rest, "no parts; waiting"),
            SceneId::Main | SceneId::EndWin | SceneId::EndLose => {
                if self.wants_supply_check(ledger.day) {
                    self.last_check_day = Some(ledger.day);
                    return PolicyDecision::because(ActionId::Supplies, "periodic check");
                }
                let weakest = ledger
                    .party
                    .iter()
                    .filter(|member| member.is_alive())
                    .map(|member| member.health)
                    .min()
                    .unwrap_or(0);
                if ledger.food < self.food_floor {
                    PolicyDecision::because(
                        ActionId::Hunt,
                        format!("food {} < {}", ledger.food, self.food_floor),
                    )
                } else if weakest < self.health_floor {
                    PolicyDecision::because(
                        ActionId::Rest,
                        format!("health {weakest} < {}", self.health_floor),
                    )
                } else {
                    PolicyDecision::because(ActionId::Travel, "provisions ok")
                }
            }
        }
    }
}

/// Always pushes on. Never hunts or rests on the trail.
struct RecklessPolicy;

impl PlayerPolicy for RecklessPolicy {
    fn name(&self) -> &'static str {
        "Reckless"
    }

    fn pick_action(&mut self, state: &GameState) -> PolicyDecision {
        let action = match state.scene {
            SceneId::Initial => ActionId::InitialStart,
            SceneId::Supplies => ActionId::Main,
            SceneId::BrokenWagon if state.ledger.wagon_parts > 0 => ActionId::Repair,
            SceneId::BrokenWagon => ActionId::Rest,
            SceneId::Main | SceneId::EndWin | SceneId::EndLose => ActionId::Travel,
        };
        PolicyDecision::new(action, None)
    }
}

/// Uniform pick among the offered choices.
struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
        }
    }
}

impl PlayerPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn pick_action(&mut self, state: &GameState) -> PolicyDecision {
        let choices = state.scene.choices();
        if choices.is_empty() {
            return PolicyDecision::because(ActionId::Main, "no choices");
        }
        let idx = self.rng.gen_range(0..choices.len());
        PolicyDecision::because(choices[idx].action, format!("choice {idx}"))
    }
}
