//! Default English copy for notices, events, and statuses.

use std::fmt;

use crate::events::{EventEffect, EventOutcome, RandomEvent};
use crate::notice::{Notice, TravelBlock};
use crate::status::{GameStatus, LossCause};

impl fmt::Display for TravelBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOxen => f.write_str("You have no oxen!"),
            Self::BrokenWagon => f.write_str("You cannot travel with a broken wagon!"),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JourneyBegun => f.write_str("The journey has begun! Head west!"),
            Self::ReturnedToTrail => f.write_str("You return to the trail."),
            Self::Traveled { miles, bonus_miles } if *bonus_miles > 0 => write!(
                f,
                "You traveled {miles} miles today ({bonus_miles} thanks to the weather)."
            ),
            Self::Traveled { miles, .. } => write!(f, "You traveled {miles} miles today."),
            Self::TravelBlocked { reason } => reason.fmt(f),
            Self::Starving { .. } => f.write_str("Your party is starving! Health is dropping."),
            Self::Hunted { food_gained } => write!(
                f,
                "You spent the day hunting and gained {food_gained} lbs of food."
            ),
            Self::LeaderInjured { name, .. } => write!(
                f,
                "{name} sustained a minor injury while hunting (-10 Health)."
            ),
            Self::Rested => f.write_str("You rested for a day. Party members feel better."),
            Self::RestedWithoutFood { .. } => {
                f.write_str("But you have no food, and rest offers little comfort.")
            }
            Self::SuppliesChecked => f.write_str("You take stock of your supplies."),
            Self::Repaired { .. } => f.write_str(
                "The wagon is repaired using one spare part. Back on the trail!",
            ),
            Self::NoSpareParts => {
                f.write_str("You do not have any spare wagon parts to perform the repair.")
            }
            Self::ActionUnavailable { action, scene } => {
                write!(f, "You cannot {action} right now ({scene}).")
            }
            Self::UnknownAction { id } => write!(f, "Nothing happens. (`{id}` is not an action.)"),
            Self::JourneyOver => f.write_str("The journey is over."),
            Self::Event(outcome) => write!(f, "**RANDOM EVENT:** {outcome}"),
        }
    }
}

impl fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.effect {
            EventEffect::MemberFellIll { name, .. } => {
                write!(f, "{name} has fallen ill! Health reduced.")
            }
            EventEffect::OxLost { .. } => {
                f.write_str("One of your oxen has died. Travel speed will be slower.")
            }
            EventEffect::TravelBonus { .. } => {
                f.write_str("Excellent weather! You gain a slight travel bonus.")
            }
            EventEffect::FoodSpoiled { lost, .. } => {
                write!(f, "A sudden storm ruined some of your food supply (-{lost} food).")
            }
            EventEffect::WagonBroken => {
                f.write_str("A wagon wheel broke! You must stop and repair it.")
            }
            EventEffect::Nothing => match self.event {
                RandomEvent::Disease => f.write_str("Sickness passes over an empty camp."),
                RandomEvent::OxenLoss => f.write_str("There are no oxen left to lose."),
                RandomEvent::WagonBreak => f.write_str("The wagon is already broken."),
                RandomEvent::GoodWeather | RandomEvent::BadLuck => {
                    f.write_str("The day passes quietly.")
                }
            },
        }
    }
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartyPerished => f.write_str("Your party perished."),
            Self::NoOxen => f.write_str("Your wagon is stranded without oxen."),
            Self::Starvation => f.write_str("Your party ran out of food."),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing { remaining_miles } => {
                write!(f, "Distance to go: {remaining_miles} miles.")
            }
            Self::Won { days } => write!(
                f,
                "CONGRATULATIONS! You reached the destination in {days} days!"
            ),
            Self::Lost { cause, .. } => write!(f, "GAME OVER. {cause}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionId;
    use crate::scene::SceneId;

    #[test]
    fn broken_wagon_block_reads_as_expected() {
        let notice = Notice::TravelBlocked {
            reason: TravelBlock::BrokenWagon,
        };
        assert!(
            notice
                .to_string()
                .contains("cannot travel with a broken wagon")
        );
    }

    #[test]
    fn statuses_render_headline_copy() {
        assert_eq!(
            GameStatus::Ongoing {
                remaining_miles: 1960
            }
            .to_string(),
            "Distance to go: 1960 miles."
        );
        assert_eq!(
            GameStatus::Won { days: 48 }.to_string(),
            "CONGRATULATIONS! You reached the destination in 48 days!"
        );
        let lost = GameStatus::Lost {
            cause: LossCause::NoOxen,
            day: 9,
        };
        assert!(lost.to_string().starts_with("GAME OVER."));
    }

    #[test]
    fn event_notices_are_prefixed() {
        let notice = Notice::Event(EventOutcome {
            event: RandomEvent::BadLuck,
            effect: EventEffect::FoodSpoiled {
                lost: 50,
                remaining: 450,
            },
        });
        assert_eq!(
            notice.to_string(),
            "**RANDOM EVENT:** A sudden storm ruined some of your food supply (-50 food)."
        );
    }

    #[test]
    fn travel_copy_mentions_weather_bonus_only_when_present() {
        let plain = Notice::Traveled {
            miles: 40,
            bonus_miles: 0,
        };
        let boosted = Notice::Traveled {
            miles: 55,
            bonus_miles: 15,
        };
        assert_eq!(plain.to_string(), "You traveled 40 miles today.");
        assert!(boosted.to_string().contains("weather"));
    }

    #[test]
    fn unavailable_action_names_action_and_scene() {
        let notice = Notice::ActionUnavailable {
            action: ActionId::InitialStart,
            scene: SceneId::BrokenWagon,
        };
        assert_eq!(
            notice.to_string(),
            "You cannot initial_start right now (broken_wagon)."
        );
    }
}
