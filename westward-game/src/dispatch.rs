//! Action dispatcher: applies one player action to the game state.
//!
//! Each [`ActionId`] maps to a handler through an exhaustive match. After the
//! handler runs, status is evaluated and terminal scenes are entered. Nothing
//! here fails; invalid requests become notices.

use serde::Serialize;

use crate::action::ActionId;
use crate::constants::{
    HUNT_FOOD_MAX, HUNT_FOOD_MIN, HUNT_FOOD_UPKEEP, HUNT_INJURY_CHANCE, HUNT_INJURY_HEALTH_LOSS,
    REST_FOOD_PER_MEMBER, REST_HEALTH_GAIN, STARVATION_HEALTH_LOSS, TRAVEL_FOOD_PER_MEMBER,
    TRAVEL_MAX_MILES, TRAVEL_MILES_PER_OX, TRAVEL_MIN_MILES,
};
use crate::events::{self, EventOutcome};
use crate::notice::{Notice, TravelBlock, TurnNotices};
use crate::rng::TrailRng;
use crate::scene::SceneId;
use crate::state::GameState;
use crate::status::{GameStatus, evaluate_status};

/// Result of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// `None` when the view sent an id that is not an action.
    pub action: Option<ActionId>,
    pub status: GameStatus,
    pub notices: TurnNotices,
}

impl TurnReport {
    /// Random events that fired during the turn.
    pub fn events(&self) -> impl Iterator<Item = &EventOutcome> {
        self.notices.iter().filter_map(|notice| match notice {
            Notice::Event(outcome) => Some(outcome),
            _ => None,
        })
    }

    /// All notices rendered with the default copy.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notices.iter().map(ToString::to_string).collect()
    }

    /// Event notices only, rendered with the default copy.
    #[must_use]
    pub fn event_messages(&self) -> Vec<String> {
        self.notices
            .iter()
            .filter(|notice| notice.is_event())
            .map(ToString::to_string)
            .collect()
    }

    /// Whether the action was refused without touching the ledger.
    #[must_use]
    pub fn was_rejected(&self) -> bool {
        self.notices.iter().any(Notice::is_rejection)
    }
}

/// Apply `action` to `state`, drawing randomness from `rng`.
///
/// A journey that already ended is left untouched. Otherwise the action runs
/// from whatever scene is active and status is evaluated afterwards.
pub fn dispatch<R>(action: ActionId, state: &mut GameState, rng: &mut R) -> TurnReport
where
    R: TrailRng + ?Sized,
{
    let mut notices = TurnNotices::new();
    if state.is_over() {
        notices.push(Notice::JourneyOver);
        return TurnReport {
            action: Some(action),
            status: state.status(),
            notices,
        };
    }

    log::debug!(
        "day {}: dispatch {action} from {}",
        state.ledger.day,
        state.scene
    );
    match action {
        ActionId::Travel => travel(state, rng, &mut notices),
        ActionId::Hunt => hunt(state, rng, &mut notices),
        ActionId::Rest => rest(state, rng, &mut notices),
        ActionId::Supplies => check_supplies(state, &mut notices),
        ActionId::Repair => repair(state, &mut notices),
        ActionId::InitialStart => start_journey(state, &mut notices),
        ActionId::Main => return_to_trail(state, &mut notices),
    }

    let status = settle(state);
    TurnReport {
        action: Some(action),
        status,
        notices,
    }
}

/// Dispatch a raw action id coming from a view.
///
/// Ids that do not name an action are no-ops, reported with a notice.
pub fn dispatch_id<R>(id: &str, state: &mut GameState, rng: &mut R) -> TurnReport
where
    R: TrailRng + ?Sized,
{
    match id.parse::<ActionId>() {
        Ok(action) => dispatch(action, state, rng),
        Err(err) => reject_unknown(&err.0, state),
    }
}

/// Record an unrecognised action id without changing the journey.
pub fn reject_unknown(id: &str, state: &mut GameState) -> TurnReport {
    let mut notices = TurnNotices::new();
    if state.is_over() {
        notices.push(Notice::JourneyOver);
        return TurnReport {
            action: None,
            status: state.status(),
            notices,
        };
    }
    log::warn!("ignoring unknown action id `{id}`");
    state.stats.blocked_actions += 1;
    notices.push(Notice::UnknownAction { id: id.to_string() });
    let status = settle(state);
    TurnReport {
        action: None,
        status,
        notices,
    }
}

/// Miles covered by a day of travel before any weather bonus.
#[must_use]
pub fn travel_rate(oxen: u32) -> u32 {
    oxen.saturating_mul(TRAVEL_MILES_PER_OX)
        .clamp(TRAVEL_MIN_MILES, TRAVEL_MAX_MILES)
}

fn travel<R>(state: &mut GameState, rng: &mut R, notices: &mut TurnNotices)
where
    R: TrailRng + ?Sized,
{
    let block = if state.ledger.oxen == 0 {
        Some(TravelBlock::NoOxen)
    } else if state.scene == SceneId::BrokenWagon {
        Some(TravelBlock::BrokenWagon)
    } else {
        None
    };
    if let Some(reason) = block {
        state.stats.blocked_actions += 1;
        notices.push(Notice::TravelBlocked { reason });
        return;
    }

    state.ledger.advance_day();
    let mut miles = travel_rate(state.ledger.oxen);
    let ration = state.ledger.party_size().saturating_mul(TRAVEL_FOOD_PER_MEMBER);
    state.ledger.consume_food(ration);

    let event = roll_event(state, rng);
    let bonus_miles = event.as_ref().map_or(0, EventOutcome::bonus_miles);
    miles = miles.saturating_add(bonus_miles);
    state.ledger.advance_distance(miles);
    notices.push(Notice::Traveled { miles, bonus_miles });
    if let Some(outcome) = event {
        notices.push(Notice::Event(outcome));
    }

    if state.ledger.is_out_of_food() {
        state.ledger.adjust_party_health(-STARVATION_HEALTH_LOSS);
        notices.push(Notice::Starving {
            health_lost: STARVATION_HEALTH_LOSS.unsigned_abs(),
        });
    }

    state.stats.travel_days += 1;
    state.stats.bonus_miles += bonus_miles;
    back_on_trail(state);
}

fn hunt<R>(state: &mut GameState, rng: &mut R, notices: &mut TurnNotices)
where
    R: TrailRng + ?Sized,
{
    state.ledger.advance_day();
    let food_gained = rng.int_inclusive(HUNT_FOOD_MIN, HUNT_FOOD_MAX);
    state.ledger.gain_food(food_gained);
    state.ledger.consume_food(HUNT_FOOD_UPKEEP);
    notices.push(Notice::Hunted { food_gained });

    if rng.unit() < HUNT_INJURY_CHANCE {
        state.ledger.adjust_health(0, -HUNT_INJURY_HEALTH_LOSS);
        if let Some(leader) = state.ledger.leader() {
            notices.push(Notice::LeaderInjured {
                name: leader.name.clone(),
                health: leader.health,
            });
        }
    }

    // Hunting never moves the wagon, so any weather bonus is dropped.
    if let Some(outcome) = roll_event(state, rng) {
        notices.push(Notice::Event(outcome));
    }

    state.stats.hunt_days += 1;
    state.stats.food_hunted += food_gained;
    back_on_trail(state);
}

fn rest<R>(state: &mut GameState, rng: &mut R, notices: &mut TurnNotices)
where
    R: TrailRng + ?Sized,
{
    state.ledger.advance_day();
    state.ledger.adjust_party_health(REST_HEALTH_GAIN);
    let ration = state.ledger.party_size().saturating_mul(REST_FOOD_PER_MEMBER);
    state.ledger.consume_food(ration);
    notices.push(Notice::Rested);

    if state.ledger.is_out_of_food() {
        state.ledger.adjust_party_health(-STARVATION_HEALTH_LOSS);
        notices.push(Notice::RestedWithoutFood {
            health_lost: STARVATION_HEALTH_LOSS.unsigned_abs(),
        });
    }

    if let Some(outcome) = roll_event(state, rng) {
        notices.push(Notice::Event(outcome));
    }

    state.stats.rest_days += 1;
    back_on_trail(state);
}

fn check_supplies(state: &mut GameState, notices: &mut TurnNotices) {
    state.scene = SceneId::Supplies;
    notices.push(Notice::SuppliesChecked);
}

fn repair(state: &mut GameState, notices: &mut TurnNotices) {
    if state.ledger.wagon_parts == 0 {
        notices.push(Notice::NoSpareParts);
        return;
    }
    state.ledger.adjust_wagon_parts(-1);
    state.scene = SceneId::Main;
    state.stats.parts_used += 1;
    notices.push(Notice::Repaired {
        parts_left: state.ledger.wagon_parts,
    });
}

/// Only the opening scene can start the journey.
fn start_journey(state: &mut GameState, notices: &mut TurnNotices) {
    if state.scene != SceneId::Initial {
        state.stats.blocked_actions += 1;
        notices.push(Notice::ActionUnavailable {
            action: ActionId::InitialStart,
            scene: state.scene,
        });
        return;
    }
    state.scene = SceneId::Main;
    notices.push(Notice::JourneyBegun);
}

fn return_to_trail(state: &mut GameState, notices: &mut TurnNotices) {
    state.scene = SceneId::Main;
    notices.push(Notice::ReturnedToTrail);
}

fn roll_event<R>(state: &mut GameState, rng: &mut R) -> Option<EventOutcome>
where
    R: TrailRng + ?Sized,
{
    let outcome = events::maybe_trigger(rng, state)?;
    state.stats.random_events += 1;
    Some(outcome)
}

/// A day on the trail ends at the hub unless the wagon is broken.
fn back_on_trail(state: &mut GameState) {
    if state.scene != SceneId::BrokenWagon {
        state.scene = SceneId::Main;
    }
}

/// Evaluate status and move into a terminal scene when the journey ends.
fn settle(state: &mut GameState) -> GameStatus {
    let status = evaluate_status(state);
    let terminal = match status {
        GameStatus::Ongoing { .. } => return status,
        GameStatus::Won { .. } => SceneId::EndWin,
        GameStatus::Lost { .. } => SceneId::EndLose,
    };
    state.scene = terminal;
    if state.ending.is_none() {
        log::info!("journey ended on day {}: {status:?}", state.ledger.day);
        state.ending = Some(status);
    }
    status
}
