use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use westward_game::{
    ActionId, GameState, GameStatus, HEALTH_MAX, JourneySummary, SceneId, TrailConfig,
    TrailSession, TurnReport, encode_seed_code,
};

use crate::logic::policy::GameplayStrategy;

pub const DEFAULT_MAX_TURNS: u32 = 1_500;

/// One dispatched action as seen by the harness.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub day: u32,
    pub scene: SceneId,
    pub action: ActionId,
    pub policy_name: &'static str,
    pub rationale: Option<String>,
    pub messages: Vec<String>,
    pub status: GameStatus,
}

/// Everything observed during a single automated journey.
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub seed: u64,
    pub seed_code: String,
    pub strategy: GameplayStrategy,
    pub turns: Vec<TurnRecord>,
    pub final_state: GameState,
    pub journey: JourneySummary,
    pub game_ended: bool,
    pub violations: Vec<String>,
}

impl SimulationSummary {
    #[must_use]
    pub fn ending_message(&self) -> String {
        self.journey.headline.clone()
    }
}

/// Declarative plan for running a simulation session.
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub strategy: GameplayStrategy,
    pub config: TrailConfig,
    pub max_turns: u32,
    pub setup: Option<fn(&mut GameState)>,
    pub verify_replay: bool,
    pub expectations: Vec<SimulationExpectation>,
}

impl SimulationPlan {
    #[must_use]
    pub fn new(strategy: GameplayStrategy) -> Self {
        Self {
            strategy,
            config: TrailConfig::default(),
            max_turns: DEFAULT_MAX_TURNS,
            setup: None,
            verify_replay: false,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: TrailConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_setup(mut self, setup: fn(&mut GameState)) -> Self {
        self.setup = Some(setup);
        self
    }

    #[must_use]
    pub const fn with_replay_check(mut self) -> Self {
        self.verify_replay = true;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: impl Into<SimulationExpectation>) -> Self {
        self.expectations.push(expectation.into());
        self
    }
}

/// Assertion hook run after a simulation completes.
type SimulationExpectationFn =
    Arc<dyn Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static>;

#[derive(Clone)]
pub struct SimulationExpectation(SimulationExpectationFn);

impl std::fmt::Debug for SimulationExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationExpectation").finish()
    }
}

impl SimulationExpectation {
    #[must_use]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the hook against a summary.
    ///
    /// # Errors
    ///
    /// Returns whatever the hook reports.
    pub fn evaluate(&self, summary: &SimulationSummary) -> Result<()> {
        (self.0)(summary)
    }
}

impl<F> From<F> for SimulationExpectation
where
    F: Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Drives seeded sessions with a scripted player.
#[derive(Debug, Clone, Copy)]
pub struct GameTester {
    verbose: bool,
}

impl GameTester {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    #[must_use]
    pub fn run_plan(&self, plan: &SimulationPlan, seed: u64) -> SimulationSummary {
        let mut summary = self.play(plan, seed);
        if plan.verify_replay {
            let replay = self.play(plan, seed);
            if replay.final_state != summary.final_state {
                summary
                    .violations
                    .push(format!("replay of seed {seed} diverged in final state"));
            }
            let actions = |s: &SimulationSummary| -> Vec<ActionId> {
                s.turns.iter().map(|t| t.action).collect()
            };
            if actions(&replay) != actions(&summary) {
                summary
                    .violations
                    .push(format!("replay of seed {seed} chose different actions"));
            }
        }
        summary
    }

    fn play(&self, plan: &SimulationPlan, seed: u64) -> SimulationSummary {
        let mut session = TrailSession::new(&plan.config, seed);
        if let Some(setup) = plan.setup {
            session.with_state_mut(setup);
        }
        let mut policy = plan.strategy.create_policy(seed);
        let mut turns = Vec::new();
        let mut violations = Vec::new();

        while !session.is_over() && session.turns() < plan.max_turns {
            let before = session.state().clone();
            let decision = policy.pick_action(&before);
            let report = session.dispatch(decision.action).clone();
            violations.extend(check_turn(&before, &report, session.state()));

            if self.verbose {
                log::debug!(
                    "seed {seed} turn {} day {}: {} -> {:?}",
                    session.turns(),
                    session.state().ledger.day,
                    decision.action,
                    report.status
                );
            }
            turns.push(TurnRecord {
                turn: session.turns(),
                day: session.state().ledger.day,
                scene: before.scene,
                action: decision.action,
                policy_name: policy.name(),
                rationale: decision.rationale,
                messages: report.messages(),
                status: report.status,
            });
        }

        let final_state = session.into_state();
        SimulationSummary {
            seed,
            seed_code: encode_seed_code(seed),
            strategy: plan.strategy,
            turns,
            journey: JourneySummary::from_state(&final_state),
            game_ended: final_state.is_over(),
            final_state,
            violations,
        }
    }
}

/// Ledger and scene rules every dispatched turn must respect.
#[must_use]
pub fn check_turn(before: &GameState, report: &TurnReport, after: &GameState) -> Vec<String> {
    let mut violations = Vec::new();
    let Some(action) = report.action else {
        return violations;
    };
    let day = after.ledger.day;

    if after.ledger.party.iter().any(|m| m.health > HEALTH_MAX) {
        violations.push(format!("day {day}: health above {HEALTH_MAX}"));
    }
    if after.ledger.distance < before.ledger.distance {
        violations.push(format!("day {day}: distance went backwards"));
    }
    if after.ledger.day < before.ledger.day {
        violations.push(format!("day {day}: day counter went backwards"));
    }

    let spent_day = action.consumes_day() && !report.was_rejected();
    let expected_day = before.ledger.day + u32::from(spent_day);
    if after.ledger.day != expected_day {
        violations.push(format!(
            "{action} moved day {} -> {} (expected {expected_day})",
            before.ledger.day, after.ledger.day
        ));
    }
    if !spent_day {
        let mut expected = before.ledger.clone();
        if action == ActionId::Repair && !report.was_rejected() {
            expected.wagon_parts = expected.wagon_parts.saturating_sub(1);
        }
        if after.ledger != expected {
            violations.push(format!("{action} changed the ledger without spending a day"));
        }
    }
    if report.events().count() > 1 {
        violations.push(format!("{action} fired more than one event"));
    }
    if report.status.is_over() != after.scene.is_terminal() {
        violations.push(format!(
            "status {} disagrees with scene {}",
            report.status.key(),
            after.scene
        ));
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_plan_finishes_a_journey() {
        let tester = GameTester::new(false);
        let plan = SimulationPlan::new(GameplayStrategy::Steady);
        let summary = tester.run_plan(&plan, 1337);
        assert!(summary.game_ended);
        assert!(summary.violations.is_empty(), "{:?}", summary.violations);
        assert_eq!(summary.turns[0].action, ActionId::InitialStart);
        assert!(summary.seed_code.starts_with("WT-"));
        assert_eq!(summary.ending_message(), summary.journey.headline);
    }

    #[test]
    fn turn_cap_halts_long_runs() {
        let tester = GameTester::new(false);
        let plan = SimulationPlan::new(GameplayStrategy::Steady).with_max_turns(3);
        let summary = tester.run_plan(&plan, 5);
        assert_eq!(summary.turns.len(), 3);
        assert!(!summary.game_ended);
    }

    #[test]
    fn setup_hook_runs_before_first_turn() {
        let tester = GameTester::new(false);
        let plan = SimulationPlan::new(GameplayStrategy::Reckless)
            .with_setup(|state| state.ledger.oxen = 0);
        let summary = tester.run_plan(&plan, 5);
        assert_eq!(summary.turns.len(), 1);
        assert!(summary.game_ended);
        assert!(!summary.journey.is_win());
    }

    #[test]
    fn replay_check_is_clean_for_seeded_sessions() {
        let tester = GameTester::new(false);
        let plan = SimulationPlan::new(GameplayStrategy::Random)
            .with_max_turns(200)
            .with_replay_check();
        let summary = tester.run_plan(&plan, 77);
        assert!(summary.violations.is_empty(), "{:?}", summary.violations);
    }

    #[test]
    fn check_turn_flags_ledger_changes_on_free_actions() {
        let before = GameState::default();
        let mut after = before.clone();
        after.ledger.food -= 1;
        let report = TurnReport {
            action: Some(ActionId::Supplies),
            status: after.status(),
            notices: Default::default(),
        };
        let violations = check_turn(&before, &report, &after);
        assert_eq!(violations.len(), 1, "{violations:?}");
    }
}
