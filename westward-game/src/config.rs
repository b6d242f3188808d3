//! Starting configuration for a journey.
//!
//! Only the opening loadout is configurable; the trail rules themselves live
//! in the constants module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_DESTINATION_DISTANCE, DEFAULT_PARTY_NAMES, DEFAULT_START_FOOD, DEFAULT_START_OXEN,
    DEFAULT_START_WAGON_PARTS, HEALTH_MAX,
};

/// Errors raised when a start configuration cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse trail config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("destination distance must be at least 1 mile")]
    ZeroDestination,
    #[error("party must have at least one member")]
    EmptyParty,
    #[error("party member {index} has a blank name")]
    BlankName { index: usize },
    #[error("starting health must be between 1 and {max} (got {value})")]
    StartingHealth { value: u8, max: u8 },
}

/// Opening loadout and destination for a journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailConfig {
    #[serde(default = "TrailConfig::default_start_food")]
    pub start_food: u32,
    #[serde(default = "TrailConfig::default_start_oxen")]
    pub start_oxen: u32,
    #[serde(default = "TrailConfig::default_start_wagon_parts")]
    pub start_wagon_parts: u32,
    #[serde(default = "TrailConfig::default_destination_distance")]
    pub destination_distance: u32,
    #[serde(default = "TrailConfig::default_party_names")]
    pub party_names: Vec<String>,
    #[serde(default = "TrailConfig::default_starting_health")]
    pub starting_health: u8,
}

impl TrailConfig {
    const fn default_start_food() -> u32 {
        DEFAULT_START_FOOD
    }

    const fn default_start_oxen() -> u32 {
        DEFAULT_START_OXEN
    }

    const fn default_start_wagon_parts() -> u32 {
        DEFAULT_START_WAGON_PARTS
    }

    const fn default_destination_distance() -> u32 {
        DEFAULT_DESTINATION_DISTANCE
    }

    fn default_party_names() -> Vec<String> {
        DEFAULT_PARTY_NAMES.iter().map(ToString::to_string).collect()
    }

    const fn default_starting_health() -> u8 {
        HEALTH_MAX
    }

    /// Parse a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the resulting
    /// configuration fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can start a playable journey.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destination_distance == 0 {
            return Err(ConfigError::ZeroDestination);
        }
        if self.party_names.is_empty() {
            return Err(ConfigError::EmptyParty);
        }
        if let Some(index) = self
            .party_names
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::BlankName { index });
        }
        if self.starting_health == 0 || self.starting_health > HEALTH_MAX {
            return Err(ConfigError::StartingHealth {
                value: self.starting_health,
                max: HEALTH_MAX,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_destination(mut self, miles: u32) -> Self {
        self.destination_distance = miles;
        self
    }

    #[must_use]
    pub const fn with_food(mut self, food: u32) -> Self {
        self.start_food = food;
        self
    }

    #[must_use]
    pub const fn with_oxen(mut self, oxen: u32) -> Self {
        self.start_oxen = oxen;
        self
    }

    #[must_use]
    pub const fn with_wagon_parts(mut self, parts: u32) -> Self {
        self.start_wagon_parts = parts;
        self
    }

    #[must_use]
    pub fn with_party<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.party_names = names.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            start_food: Self::default_start_food(),
            start_oxen: Self::default_start_oxen(),
            start_wagon_parts: Self::default_start_wagon_parts(),
            destination_distance: Self::default_destination_distance(),
            party_names: Self::default_party_names(),
            starting_health: Self::default_starting_health(),
        }
    }
}
