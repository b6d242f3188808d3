use anyhow::{Result, ensure};
use westward_game::{GameState, LossCause, GameStatus, SceneId, TrailConfig};

use crate::logic::{GameplayStrategy, SimulationPlan, SimulationSummary};

/// A named simulation plan runnable from the command line.
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub plan: SimulationPlan,
}

const CATALOG: [(&str, &str); 9] = [
    ("smoke", "Smoke Test"),
    ("invariants", "Ledger Invariants Under Random Play"),
    ("determinism", "Seeded Replay Determinism"),
    ("steady-journey", "Full Journey - Steady Strategy"),
    ("cautious-journey", "Full Journey - Cautious Strategy"),
    ("reckless-journey", "Full Journey - Reckless Strategy"),
    ("random-walk", "Short Trail - Random Choices"),
    ("stranded", "Broken Wagon Without Spare Parts"),
    ("oxless", "Journey Without Oxen"),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Expand the `all` keyword into every catalog entry, keeping other names.
pub fn expand_scenarios(names: Vec<String>) -> Vec<String> {
    if !names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        return names;
    }
    let mut expanded: Vec<String> = names
        .into_iter()
        .filter(|n| !n.eq_ignore_ascii_case("all"))
        .collect();
    for (key, _) in CATALOG {
        if !expanded.iter().any(|n| n == key) {
            expanded.push(key.to_string());
        }
    }
    expanded
}

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.to_lowercase();
    let (name, description) = CATALOG.iter().copied().find(|(k, _)| *k == key)?;
    let plan = match name {
        "smoke" => SimulationPlan::new(GameplayStrategy::Steady)
            .with_max_turns(30)
            .with_expectation(survival_expectation),
        "invariants" => SimulationPlan::new(GameplayStrategy::Random).with_max_turns(400),
        "determinism" => SimulationPlan::new(GameplayStrategy::Steady)
            .with_max_turns(200)
            .with_replay_check(),
        "steady-journey" => journey_plan(GameplayStrategy::Steady),
        "cautious-journey" => journey_plan(GameplayStrategy::Cautious),
        "reckless-journey" => journey_plan(GameplayStrategy::Reckless),
        "random-walk" => SimulationPlan::new(GameplayStrategy::Random)
            .with_config(TrailConfig::default().with_destination(300))
            .with_expectation(ended_expectation),
        "stranded" => SimulationPlan::new(GameplayStrategy::Steady)
            .with_config(TrailConfig::default().with_wagon_parts(0))
            .with_setup(strand_wagon)
            .with_expectation(ended_expectation)
            .with_expectation(stranded_expectation),
        "oxless" => SimulationPlan::new(GameplayStrategy::Steady)
            .with_config(TrailConfig::default().with_oxen(0))
            .with_expectation(oxless_expectation),
        _ => return None,
    };
    Some(TestScenario {
        name,
        description,
        plan,
    })
}

fn journey_plan(strategy: GameplayStrategy) -> SimulationPlan {
    SimulationPlan::new(strategy)
        .with_expectation(survival_expectation)
        .with_expectation(ended_expectation)
}

fn strand_wagon(state: &mut GameState) {
    state.scene = SceneId::BrokenWagon;
}

fn survival_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.final_state.ledger.day >= 1,
        "journey should last at least one day"
    );
    Ok(())
}

fn ended_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.game_ended,
        "journey still running after {} turns",
        summary.turns.len()
    );
    Ok(())
}

fn stranded_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        !summary.journey.is_win(),
        "a stranded wagon should never reach the destination"
    );
    ensure!(
        summary.final_state.ledger.distance == 0,
        "stranded wagon moved {} miles",
        summary.final_state.ledger.distance
    );
    Ok(())
}

fn oxless_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        matches!(
            summary.journey.status,
            GameStatus::Lost {
                cause: LossCause::NoOxen,
                day: 0
            }
        ),
        "expected an immediate no-oxen loss, got {}",
        summary.ending_message()
    );
    ensure!(summary.turns.len() == 1, "expected a single turn");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::GameTester;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, description) in list_scenarios() {
            let scenario = get_scenario(key).expect("listed scenario");
            assert_eq!(scenario.name, key);
            assert_eq!(scenario.description, description);
        }
        assert!(get_scenario("SMOKE").is_some());
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn all_keyword_expands_without_duplicates() {
        let expanded = expand_scenarios(vec!["smoke".to_string(), "all".to_string()]);
        assert_eq!(expanded.len(), CATALOG.len());
        assert_eq!(expanded[0], "smoke");
        assert!(!expanded.contains(&"all".to_string()));

        let untouched = expand_scenarios(vec!["stranded".to_string(), "smoke".to_string()]);
        assert_eq!(untouched, vec!["stranded".to_string(), "smoke".to_string()]);
    }

    #[test]
    fn stranded_trail_starts_without_spare_parts() {
        let scenario = get_scenario("stranded").expect("listed scenario");
        assert_eq!(scenario.plan.config.start_wagon_parts, 0);
        let summary = GameTester::new(false).run_plan(&scenario.plan, 7);
        assert_eq!(summary.final_state.ledger.wagon_parts, 0);
        assert!(
            summary
                .turns
                .iter()
                .all(|turn| turn.action != westward_game::ActionId::Travel)
        );
    }

    #[test]
    fn catalog_expectations_hold_for_a_fixed_seed() {
        let tester = GameTester::new(false);
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).expect("listed scenario");
            let summary = tester.run_plan(&scenario.plan, 2024);
            assert!(summary.violations.is_empty(), "{key}: {:?}", summary.violations);
            for expectation in &scenario.plan.expectations {
                expectation
                    .evaluate(&summary)
                    .unwrap_or_else(|err| panic!("{key}: {err}"));
            }
        }
    }
}
