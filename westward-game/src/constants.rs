//! Centralized balance and tuning constants for the Westward simulation.
//!
//! These values define the deterministic math for the trail rules. Keeping
//! them together means the rules can only be adjusted through reviewed code
//! changes; only the starting loadout is externally configurable.

// Start configuration defaults -------------------------------------------
pub(crate) const DEFAULT_START_FOOD: u32 = 500;
pub(crate) const DEFAULT_START_OXEN: u32 = 2;
pub(crate) const DEFAULT_START_WAGON_PARTS: u32 = 1;
pub(crate) const DEFAULT_DESTINATION_DISTANCE: u32 = 2_000;
pub(crate) const DEFAULT_PARTY_NAMES: [&str; 4] = ["Leader", "Spouse", "Child 1", "Child 2"];

// Party health -------------------------------------------------------------
pub const HEALTH_MAX: u8 = 100;
pub(crate) const STARVATION_HEALTH_LOSS: i32 = 5;

// Travel -------------------------------------------------------------------
pub(crate) const TRAVEL_MILES_PER_OX: u32 = 20;
pub(crate) const TRAVEL_MIN_MILES: u32 = 10;
pub(crate) const TRAVEL_MAX_MILES: u32 = 60;
pub(crate) const TRAVEL_FOOD_PER_MEMBER: u32 = 4;

// Hunting ------------------------------------------------------------------
pub(crate) const HUNT_FOOD_MIN: u32 = 50;
pub(crate) const HUNT_FOOD_MAX: u32 = 199;
pub(crate) const HUNT_FOOD_UPKEEP: u32 = 10;
pub(crate) const HUNT_INJURY_CHANCE: f64 = 0.10;
pub(crate) const HUNT_INJURY_HEALTH_LOSS: i32 = 10;

// Resting ------------------------------------------------------------------
pub(crate) const REST_HEALTH_GAIN: i32 = 10;
pub(crate) const REST_FOOD_PER_MEMBER: u32 = 2;

// Status evaluation --------------------------------------------------------
pub(crate) const STARVATION_GRACE_DAYS: u32 = 5;

// Random events ------------------------------------------------------------
pub(crate) const EVENT_TRIGGER_CHANCE: f64 = 0.35;
pub(crate) const EVENT_WEIGHT_DISEASE: f64 = 0.15;
pub(crate) const EVENT_WEIGHT_OXEN_LOSS: f64 = 0.05;
pub(crate) const EVENT_WEIGHT_GOOD_WEATHER: f64 = 0.20;
pub(crate) const EVENT_WEIGHT_BAD_LUCK: f64 = 0.10;
pub(crate) const EVENT_WEIGHT_WAGON_BREAK: f64 = 0.05;
pub(crate) const DISEASE_HEALTH_LOSS: i32 = 25;
pub(crate) const GOOD_WEATHER_BONUS_MILES: u32 = 15;
pub(crate) const BAD_LUCK_FOOD_LOSS: u32 = 50;
