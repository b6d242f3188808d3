//! Terminal renderer and interactive loop for `--mode play`.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use std::io::{BufRead, Write};
use westward_game::{ActionId, JourneySummary, SceneId, Snapshot, TrailRng, TrailSession};

const BAR_WIDTH: usize = 20;

/// Scenery band drawn behind the wagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Prairie,
    Foothills,
    Badlands,
}

impl Terrain {
    #[must_use]
    pub const fn for_distance(distance: u32) -> Self {
        if distance > 1_000 {
            Self::Badlands
        } else if distance > 500 {
            Self::Foothills
        } else {
            Self::Prairie
        }
    }

    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Prairie => (0x5c, 0x5c, 0x5c),
            Self::Foothills => (0x8a, 0x79, 0x5d),
            Self::Badlands => (0xa5, 0x2a, 0x2a),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Prairie => "prairie",
            Self::Foothills => "foothills",
            Self::Badlands => "badlands",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        let (r, g, b) = self.rgb();
        text.truecolor(r, g, b)
    }
}

/// Fixed-width bar colored by how healthy the member is.
#[must_use]
pub fn health_bar(health: u8) -> String {
    let filled = (usize::from(health.min(100)) * BAR_WIDTH).div_ceil(100);
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    );
    let painted = if health > 50 {
        bar.green()
    } else if health > 20 {
        bar.truecolor(0xff, 0xa5, 0x00)
    } else {
        bar.red()
    };
    painted.to_string()
}

fn wagon_art(oxen: u32, terrain: Terrain) -> Vec<String> {
    let team = match oxen {
        0 => "",
        1 => " ~(oo)",
        _ => " ~(oo)(oo)",
    };
    vec![
        terrain.paint(&format!("{:>44}", "/\\")).to_string(),
        format!("   ______{}", terrain.paint(&format!("{:>34}", "/  \\"))),
        format!("  (______){team:<24}{}", terrain.paint("/    \\")),
        "  |______|".to_string(),
        "   O    O".to_string(),
        format!("{}", "=".repeat(44).green()),
    ]
}

/// Render one snapshot as a block of terminal text.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let terrain = Terrain::for_distance(snapshot.distance);
    let mut lines = Vec::new();
    lines.push(format!(
        "{}  Day {}  |  {} / {} miles  |  Food {} lbs  |  Oxen {}  |  Parts {}",
        "WESTWARD".bright_cyan().bold(),
        snapshot.day,
        snapshot.distance,
        snapshot.destination_distance,
        snapshot.food,
        snapshot.oxen,
        snapshot.wagon_parts
    ));
    lines.push(format!(
        "Terrain: {} ({:.0}% of the trail)",
        terrain.label(),
        snapshot.progress() * 100.0
    ));
    lines.extend(wagon_art(snapshot.oxen, terrain));
    lines.push(String::new());

    if snapshot.scene == SceneId::Initial {
        lines.push("Party members ready.".to_string());
    } else {
        for member in &snapshot.party {
            lines.push(format!(
                "{:<10} HP {:>3}% {}",
                member.name,
                member.health,
                health_bar(member.health)
            ));
        }
    }
    lines.push(String::new());

    lines.push(snapshot.scene_text.clone());
    for message in &snapshot.messages {
        lines.push(message.clone());
    }
    lines.push(snapshot.status_message.bold().to_string());

    for (idx, choice) in snapshot.choices.iter().enumerate() {
        lines.push(format!("  [{}] {} ({})", idx + 1, choice.label, choice.action));
    }
    lines.join("\n")
}

fn render_summary(summary: &JourneySummary) -> String {
    let headline = if summary.is_win() {
        summary.headline.bright_green().bold()
    } else {
        summary.headline.bright_red().bold()
    };
    format!(
        "{headline}\nDays: {}  Miles: {}  Survivors: {}/{}  Food left: {} lbs\n\
         Travel days: {}  Hunts: {}  Rests: {}  Random events: {}",
        summary.days,
        summary.distance,
        summary.survivors,
        summary.party_size,
        summary.food,
        summary.stats.travel_days,
        summary.stats.hunt_days,
        summary.stats.rest_days,
        summary.stats.random_events
    )
}

/// Translate a line of player input into an action for the current scene.
/// Accepts a 1-based choice number or an action id.
fn resolve_input(snapshot: &Snapshot, line: &str) -> Result<ActionId, String> {
    if let Ok(number) = line.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|idx| snapshot.choices.get(idx))
            .map(|choice| choice.action)
            .ok_or_else(|| line.to_string());
    }
    line.parse::<ActionId>().map_err(|_| line.to_string())
}

/// Drive `session` from `input` until the journey ends, input runs out, or
/// the player quits with `q`.
pub fn play<R, I, W>(session: &mut TrailSession<R>, input: I, out: &mut W) -> Result<()>
where
    R: TrailRng,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        let snapshot = session.snapshot();
        writeln!(out, "{}\n", render(&snapshot))?;
        if session.is_over() {
            writeln!(out, "{}", render_summary(&session.summary()))?;
            break;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("failed to read player input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            writeln!(out, "Farewell, traveler.")?;
            break;
        }

        match resolve_input(&snapshot, line) {
            Ok(action) => {
                log::debug!("player chose {action}");
                session.dispatch(action);
            }
            Err(raw) => {
                session.dispatch_id(&raw);
            }
        }
    }
    out.flush()?;
    Ok(())
}
