//! Random trail events and their weighted selection.
//!
//! At most one event fires per turn-consuming action. Effects mutate the
//! state in place and report a structured outcome; wording is left to
//! [`crate::text`].

use serde::{Deserialize, Serialize};

use crate::constants::{
    BAD_LUCK_FOOD_LOSS, DISEASE_HEALTH_LOSS, EVENT_TRIGGER_CHANCE, EVENT_WEIGHT_BAD_LUCK,
    EVENT_WEIGHT_DISEASE, EVENT_WEIGHT_GOOD_WEATHER, EVENT_WEIGHT_OXEN_LOSS,
    EVENT_WEIGHT_WAGON_BREAK, GOOD_WEATHER_BONUS_MILES,
};
use crate::rng::TrailRng;
use crate::scene::SceneId;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomEvent {
    Disease,
    OxenLoss,
    GoodWeather,
    BadLuck,
    WagonBreak,
}

impl RandomEvent {
    /// Selection order; earlier entries win floating-point ties.
    pub const ALL: [Self; 5] = [
        Self::Disease,
        Self::OxenLoss,
        Self::GoodWeather,
        Self::BadLuck,
        Self::WagonBreak,
    ];

    /// Relative selection weight.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Disease => EVENT_WEIGHT_DISEASE,
            Self::OxenLoss => EVENT_WEIGHT_OXEN_LOSS,
            Self::GoodWeather => EVENT_WEIGHT_GOOD_WEATHER,
            Self::BadLuck => EVENT_WEIGHT_BAD_LUCK,
            Self::WagonBreak => EVENT_WEIGHT_WAGON_BREAK,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::OxenLoss => "oxen_loss",
            Self::GoodWeather => "good_weather",
            Self::BadLuck => "bad_luck",
            Self::WagonBreak => "wagon_break",
        }
    }

    #[must_use]
    pub fn total_weight() -> f64 {
        Self::ALL.iter().map(|event| event.weight()).sum()
    }

    /// Weighted roulette walk over [`Self::ALL`]. `roll` is in
    /// `[0, total_weight)`; a roll past the last bucket selects nothing.
    #[must_use]
    pub fn select(roll: f64) -> Option<Self> {
        let mut cumulative = 0.0;
        for event in Self::ALL {
            cumulative += event.weight();
            if roll < cumulative {
                return Some(event);
            }
        }
        None
    }

    /// Apply this event's effect to the state.
    pub fn apply<R>(self, state: &mut GameState, rng: &mut R) -> EventEffect
    where
        R: TrailRng + ?Sized,
    {
        let ledger = &mut state.ledger;
        match self {
            Self::Disease => {
                let living = ledger.living_members();
                if living.is_empty() {
                    return EventEffect::Nothing;
                }
                let member = living[rng.index(living.len())];
                ledger.adjust_health(member, -DISEASE_HEALTH_LOSS);
                let patient = &ledger.party[member];
                EventEffect::MemberFellIll {
                    member,
                    name: patient.name.clone(),
                    health: patient.health,
                }
            }
            Self::OxenLoss => {
                if ledger.oxen == 0 {
                    return EventEffect::Nothing;
                }
                ledger.adjust_oxen(-1);
                EventEffect::OxLost {
                    remaining: ledger.oxen,
                }
            }
            Self::GoodWeather => EventEffect::TravelBonus {
                miles: GOOD_WEATHER_BONUS_MILES,
            },
            Self::BadLuck => {
                let lost = ledger.consume_food(BAD_LUCK_FOOD_LOSS);
                EventEffect::FoodSpoiled {
                    lost,
                    remaining: ledger.food,
                }
            }
            Self::WagonBreak => {
                if state.scene == SceneId::BrokenWagon {
                    return EventEffect::Nothing;
                }
                state.scene = SceneId::BrokenWagon;
                EventEffect::WagonBroken
            }
        }
    }
}

/// What an event actually did to the journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum EventEffect {
    MemberFellIll {
        member: usize,
        name: String,
        health: u8,
    },
    OxLost {
        remaining: u32,
    },
    TravelBonus {
        miles: u32,
    },
    FoodSpoiled {
        lost: u32,
        remaining: u32,
    },
    WagonBroken,
    /// The event was drawn but found nothing to act on.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    pub event: RandomEvent,
    pub effect: EventEffect,
}

impl EventOutcome {
    /// Extra miles granted to today's travel, if any.
    #[must_use]
    pub const fn bonus_miles(&self) -> u32 {
        match self.effect {
            EventEffect::TravelBonus { miles } => miles,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn had_effect(&self) -> bool {
        !matches!(self.effect, EventEffect::Nothing)
    }
}

/// Roll for a random event and apply it.
///
/// One unit draw decides whether anything happens; a second picks the event
/// by weight. Effects that need a target (disease) draw once more.
pub fn maybe_trigger<R>(rng: &mut R, state: &mut GameState) -> Option<EventOutcome>
where
    R: TrailRng + ?Sized,
{
    let chance_roll = rng.unit();
    if chance_roll >= EVENT_TRIGGER_CHANCE {
        log::trace!("no event (roll {chance_roll:.3} >= {EVENT_TRIGGER_CHANCE})");
        return None;
    }

    let total = RandomEvent::total_weight();
    let weight_roll = rng.unit() * total;
    let Some(event) = RandomEvent::select(weight_roll) else {
        log::trace!("event roll {weight_roll:.4} fell past table total {total:.4}");
        return None;
    };

    let effect = event.apply(state, rng);
    log::debug!(
        "day {}: random event {} -> {:?}",
        state.ledger.day,
        event.key(),
        effect
    );
    Some(EventOutcome { event, effect })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn roll_for(event: RandomEvent) -> f64 {
        // Midpoint of the event's bucket, expressed as a unit draw.
        let mut start = 0.0;
        for candidate in RandomEvent::ALL {
            if candidate == event {
                return (start + candidate.weight() / 2.0) / RandomEvent::total_weight();
            }
            start += candidate.weight();
        }
        unreachable!("event is in the table")
    }

    fn trigger(event: RandomEvent, extra: &[f64], state: &mut GameState) -> Option<EventOutcome> {
        let mut script = vec![0.0, roll_for(event)];
        script.extend_from_slice(extra);
        let mut rng = ScriptedRng::new(script);
        maybe_trigger(&mut rng, state)
    }

    #[test]
    fn table_weights_sum_to_fifty_five_hundredths() {
        assert!((RandomEvent::total_weight() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn roulette_walks_buckets_in_declared_order() {
        assert_eq!(RandomEvent::select(0.0), Some(RandomEvent::Disease));
        assert_eq!(RandomEvent::select(0.149), Some(RandomEvent::Disease));
        assert_eq!(RandomEvent::select(0.15), Some(RandomEvent::OxenLoss));
        assert_eq!(RandomEvent::select(0.21), Some(RandomEvent::GoodWeather));
        assert_eq!(RandomEvent::select(0.45), Some(RandomEvent::BadLuck));
        assert_eq!(RandomEvent::select(0.52), Some(RandomEvent::WagonBreak));
        assert_eq!(RandomEvent::select(0.56), None);
    }

    #[test]
    fn high_chance_roll_skips_events() {
        let mut state = GameState::default();
        let before = state.clone();
        let mut rng = ScriptedRng::new([0.35]);
        assert!(maybe_trigger(&mut rng, &mut state).is_none());
        assert_eq!(state, before);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn disease_strikes_a_living_member() {
        let mut state = GameState::default();
        state.ledger.adjust_health(0, -100);
        // Living members are [1, 2, 3]; 0.5 picks the middle one.
        let outcome = trigger(RandomEvent::Disease, &[0.5], &mut state).expect("event");
        assert_eq!(
            outcome.effect,
            EventEffect::MemberFellIll {
                member: 2,
                name: "Child 1".to_string(),
                health: 75
            }
        );
        assert_eq!(state.ledger.party[2].health, 75);
    }

    #[test]
    fn disease_with_no_survivors_does_nothing() {
        let mut state = GameState::default();
        state.ledger.adjust_party_health(-100);
        let outcome = trigger(RandomEvent::Disease, &[], &mut state).expect("event");
        assert_eq!(outcome.effect, EventEffect::Nothing);
        assert!(!outcome.had_effect());
    }

    #[test]
    fn oxen_loss_floors_at_zero() {
        let mut state = GameState::default();
        state.ledger.oxen = 1;
        let outcome = trigger(RandomEvent::OxenLoss, &[], &mut state).expect("event");
        assert_eq!(outcome.effect, EventEffect::OxLost { remaining: 0 });
        let outcome = trigger(RandomEvent::OxenLoss, &[], &mut state).expect("event");
        assert_eq!(outcome.effect, EventEffect::Nothing);
        assert_eq!(state.ledger.oxen, 0);
    }

    #[test]
    fn good_weather_only_grants_bonus() {
        let mut state = GameState::default();
        let before = state.clone();
        let outcome = trigger(RandomEvent::GoodWeather, &[], &mut state).expect("event");
        assert_eq!(outcome.bonus_miles(), 15);
        assert_eq!(state, before);
    }

    #[test]
    fn bad_luck_spoils_food_down_to_zero() {
        let mut state = GameState::default();
        state.ledger.food = 30;
        let outcome = trigger(RandomEvent::BadLuck, &[], &mut state).expect("event");
        assert_eq!(
            outcome.effect,
            EventEffect::FoodSpoiled {
                lost: 30,
                remaining: 0
            }
        );
        assert_eq!(outcome.bonus_miles(), 0);
    }

    #[test]
    fn wagon_break_only_breaks_once() {
        let mut state = GameState::default();
        state.scene = SceneId::Main;
        let outcome = trigger(RandomEvent::WagonBreak, &[], &mut state).expect("event");
        assert_eq!(outcome.effect, EventEffect::WagonBroken);
        assert_eq!(state.scene, SceneId::BrokenWagon);
        let outcome = trigger(RandomEvent::WagonBreak, &[], &mut state).expect("event");
        assert_eq!(outcome.effect, EventEffect::Nothing);
    }
}
