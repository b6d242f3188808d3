mod logic;
mod scenarios;
mod util;
mod view;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Stdout, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;
use westward_game::{TrailConfig, TrailSession};

use logic::{LogicTester, RunRecord, ScenarioResult, SeedInfo, resolve_seed_inputs};
use scenarios::{expand_scenarios, get_scenario, list_scenarios};
use util::{load_config, split_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Automated journeys driven by scripted players
    Logic,
    /// Interactive terminal play reading choices from stdin
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "westward-tester", version)]
#[command(about = "Automated playthroughs and terminal play for the Westward trail simulation")]
struct Args {
    /// Run automated scenarios or play interactively
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated numbers, WT- share codes, or `all`)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON trail configuration overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let seed_infos = resolve_seed_inputs(&split_csv(&args.seeds))?;

    match args.mode {
        TestMode::Play => run_play(&config, &seed_infos),
        TestMode::Logic => {
            announce_banner();
            let start_time = Instant::now();
            let scenarios = expand_scenarios(split_csv(&args.scenarios));
            let results = run_logic_scenarios(&args, &config, &scenarios, &seed_infos);
            write_reports(&args, &results, start_time)?;

            if results.iter().any(|r| !r.passed) {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut sink = ReportSink::open(args.output.as_deref())?;
    writeln!(sink, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(sink, "  {key:25} - {description}")?;
    }
    sink.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🐂 Westward Automated Tester".bright_cyan().bold());
    println!("{}", "============================".cyan());
}

fn run_play(config: &TrailConfig, seed_infos: &[SeedInfo]) -> Result<()> {
    let seed = seed_infos
        .first()
        .cloned()
        .unwrap_or_else(|| SeedInfo::from_numeric(1337));
    println!(
        "{} seed {} ({})",
        "🐂 Westward".bright_cyan().bold(),
        seed.share_code(),
        seed.seed
    );
    let mut session = TrailSession::new(config, seed.seed);
    let stdin = std::io::stdin();
    let mut out = stdout().lock();
    view::play(&mut session, stdin.lock(), &mut out)
}

fn run_logic_scenarios(
    args: &Args,
    config: &TrailConfig,
    scenarios: &[String],
    seed_infos: &[SeedInfo],
) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);
    let mut results = Vec::new();

    for scenario_name in scenarios {
        let Some(mut scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        // Scenarios that pin their own trail keep it.
        if scenario.plan.config == TrailConfig::default() {
            scenario.plan.config = config.clone();
        }
        results.extend(logic_tester.run_scenario(&scenario, seed_infos, args.iterations));
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut sink = ReportSink::open(args.output.as_deref())?;

    match args.report {
        ReportFormat::Json if results.is_empty() => writeln!(sink, "[]")?,
        ReportFormat::Json => logic::reports::generate_json_report(&mut sink, results)?,
        ReportFormat::Markdown if results.is_empty() => writeln!(
            sink,
            "# Westward Logic Test Results\n\n_No scenarios executed._"
        )?,
        ReportFormat::Markdown => logic::reports::generate_markdown_report(&mut sink, results)?,
        ReportFormat::Csv => {
            let records: Vec<RunRecord> = results
                .iter()
                .flat_map(|result| result.runs.iter().cloned())
                .collect();
            logic::reports::generate_csv_report(&mut sink, &records)?;
        }
        ReportFormat::Console => {
            let duration = start_time.elapsed();
            if results.is_empty() {
                writeln!(sink, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(&mut sink, results, duration)?;
            }
            writeln!(sink, "\n🏁 Total time: {duration:?}")?;
        }
    }

    sink.flush()?;
    Ok(())
}

/// Where reports go: a file when `--output` is given, stdout otherwise.
enum ReportSink {
    Stdout(Stdout),
    File(BufWriter<File>),
}

impl ReportSink {
    fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(stdout()));
        };
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self::File(BufWriter::new(file)))
    }
}

impl Write for ReportSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(file) => file.flush(),
        }
    }
}
