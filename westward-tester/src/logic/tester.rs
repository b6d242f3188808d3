use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::logic::seeds::SeedInfo;
use crate::logic::simulation::{GameTester, SimulationPlan, SimulationSummary};
use crate::scenarios::TestScenario;

/// Flattened outcome of one automated journey, used by CSV reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub scenario: String,
    pub strategy: String,
    pub seed: u64,
    pub seed_code: String,
    pub outcome: String,
    pub days: u32,
    pub distance: u32,
    pub food: u32,
    pub oxen: u32,
    pub survivors: u32,
    pub random_events: u32,
    pub turns: usize,
}

impl RunRecord {
    fn from_summary(scenario: &str, summary: &SimulationSummary) -> Self {
        let journey = &summary.journey;
        Self {
            scenario: scenario.to_string(),
            strategy: summary.strategy.label().to_string(),
            seed: summary.seed,
            seed_code: summary.seed_code.clone(),
            outcome: journey.outcome().to_string(),
            days: journey.days,
            distance: journey.distance,
            food: journey.food,
            oxen: journey.oxen,
            survivors: journey.survivors,
            random_events: journey.stats.random_events,
            turns: summary.turns.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "millis")]
    pub average_duration: Duration,
    #[serde(with = "millis_vec")]
    pub performance_data: Vec<Duration>,
    pub runs: Vec<RunRecord>,
}

pub struct LogicTester {
    tester: GameTester,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self {
            tester: GameTester::new(verbose),
            verbose,
        }
    }

    /// Run `iterations` journeys of `scenario` from each seed, one result per seed.
    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[SeedInfo],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|seed| {
                if self.verbose {
                    println!(
                        "🧪 {} [{}] seed {}",
                        scenario.name.bright_white(),
                        scenario.plan.strategy,
                        seed.label()
                    );
                }
                self.run_seed(scenario, seed.seed, iterations)
            })
            .collect()
    }

    fn run_seed(&self, scenario: &TestScenario, seed: u64, iterations: usize) -> ScenarioResult {
        let (runs, failures, performance_data) =
            self.run_simulation_iterations(scenario, seed, iterations);

        let average_duration = u32::try_from(performance_data.len())
            .ok()
            .filter(|count| *count > 0)
            .map_or(Duration::ZERO, |count| {
                performance_data.iter().sum::<Duration>() / count
            });

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations.saturating_sub(failures.len()),
            failures,
            average_duration,
            performance_data,
            runs,
        }
    }

    fn run_simulation_iterations(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> (Vec<RunRecord>, Vec<String>, Vec<Duration>) {
        let mut runs = Vec::with_capacity(iterations);
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for (iteration, offset) in (1..=iterations).zip(0_u64..) {
            let started = Instant::now();
            let summary = self.tester.run_plan(&scenario.plan, seed.wrapping_add(offset));
            let elapsed = started.elapsed();
            runs.push(RunRecord::from_summary(scenario.name, &summary));

            match evaluate_expectations(&scenario.plan, &summary) {
                None => {
                    performance_data.push(elapsed);
                    if self.verbose {
                        println!(
                            "  ✅ {iteration}/{iterations} {} after {} days ({elapsed:?})",
                            summary.journey.outcome(),
                            summary.journey.days
                        );
                    }
                }
                Some(err) => {
                    let path = summarize_decision_path(&summary);
                    if self.verbose {
                        println!("  ❌ {iteration}/{iterations} {}", err.as_str().red());
                        println!("     ↳ {path}");
                    }
                    failures.push(describe_failure(iteration, &summary, &err, &path));
                }
            }
        }

        (runs, failures, performance_data)
    }
}

fn describe_failure(iteration: usize, summary: &SimulationSummary, err: &str, path: &str) -> String {
    let ledger = &summary.final_state.ledger;
    let state = if summary.game_ended { "ended" } else { "halted" };
    format!(
        "#{iteration} {} seed {} [{}] {state} after {} turns ('{}'): {err} | {path} | \
         day {} mile {} food {} oxen {}",
        summary.strategy,
        summary.seed,
        summary.seed_code,
        summary.turns.len(),
        summary.ending_message(),
        ledger.day,
        ledger.distance,
        ledger.food,
        ledger.oxen
    )
}

fn evaluate_expectations(plan: &SimulationPlan, summary: &SimulationSummary) -> Option<String> {
    if let Some(violation) = summary.violations.first() {
        return Some(format!(
            "invariant violated: {violation} ({} total)",
            summary.violations.len()
        ));
    }
    for expectation in &plan.expectations {
        if let Err(err) = expectation.evaluate(summary) {
            return Some(err.to_string());
        }
    }
    None
}

fn summarize_decision_path(summary: &SimulationSummary) -> String {
    if summary.turns.is_empty() {
        return "no decisions recorded".to_string();
    }

    summary
        .turns
        .iter()
        .rev()
        .take(3)
        .map(|entry| {
            let rationale = entry
                .rationale
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("-");
            format!(
                "day {} ({}): {} [{}] reason {}",
                entry.day, entry.scene, entry.action, entry.policy_name, rationale
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn clamp_millis(duration: &Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Durations travel as whole milliseconds in JSON reports.
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(super::clamp_millis(duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

mod millis_vec {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        durations: &[Duration],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(durations.iter().map(super::clamp_millis))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Duration>, D::Error> {
        Vec::<u64>::deserialize(deserializer)
            .map(|millis| millis.into_iter().map(Duration::from_millis).collect())
    }
}
