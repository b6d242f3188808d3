//! Resource ledger: wagon supplies, progress, and party health.
//!
//! Every mutation clamps into the valid range instead of failing, so callers
//! can apply raw deltas without pre-checking.

use serde::{Deserialize, Serialize};

use crate::config::TrailConfig;
use crate::constants::HEALTH_MAX;
use crate::numbers::usize_to_u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    pub name: String,
    /// Health percentage in `0..=100`; zero means incapacitated.
    pub health: u8,
}

impl PartyMember {
    #[must_use]
    pub fn new(name: impl Into<String>, health: u8) -> Self {
        Self {
            name: name.into(),
            health: health.min(HEALTH_MAX),
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply a health delta, clamping into `0..=100`.
    pub fn adjust_health(&mut self, delta: i32) {
        let next = (i32::from(self.health) + delta).clamp(0, i32::from(HEALTH_MAX));
        self.health = u8::try_from(next).unwrap_or(0);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceLedger {
    pub day: u32,
    pub distance: u32,
    pub food: u32,
    pub oxen: u32,
    pub wagon_parts: u32,
    pub party: Vec<PartyMember>,
}

impl ResourceLedger {
    /// Build the opening ledger for a configuration.
    #[must_use]
    pub fn from_config(config: &TrailConfig) -> Self {
        let party = config
            .party_names
            .iter()
            .map(|name| PartyMember::new(name.clone(), config.starting_health))
            .collect();
        Self {
            day: 0,
            distance: 0,
            food: config.start_food,
            oxen: config.start_oxen,
            wagon_parts: config.start_wagon_parts,
            party,
        }
    }

    pub const fn adjust_food(&mut self, delta: i32) {
        self.food = self.food.saturating_add_signed(delta);
    }

    pub const fn adjust_oxen(&mut self, delta: i32) {
        self.oxen = self.oxen.saturating_add_signed(delta);
    }

    pub const fn adjust_wagon_parts(&mut self, delta: i32) {
        self.wagon_parts = self.wagon_parts.saturating_add_signed(delta);
    }

    pub const fn gain_food(&mut self, amount: u32) {
        self.food = self.food.saturating_add(amount);
    }

    /// Remove food, flooring at zero. Returns the amount actually removed.
    pub fn consume_food(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.food);
        self.food -= removed;
        removed
    }

    /// Apply a health delta to one member; out-of-range indices are ignored.
    pub fn adjust_health(&mut self, member: usize, delta: i32) {
        if let Some(member) = self.party.get_mut(member) {
            member.adjust_health(delta);
        }
    }

    /// Apply the same health delta to every member of the party.
    pub fn adjust_party_health(&mut self, delta: i32) {
        for member in &mut self.party {
            member.adjust_health(delta);
        }
    }

    pub const fn advance_day(&mut self) {
        self.day = self.day.saturating_add(1);
    }

    pub const fn advance_distance(&mut self, miles: u32) {
        self.distance = self.distance.saturating_add(miles);
    }

    #[must_use]
    pub fn party_size(&self) -> u32 {
        usize_to_u32(self.party.len())
    }

    #[must_use]
    pub fn alive_count(&self) -> u32 {
        usize_to_u32(self.party.iter().filter(|m| m.is_alive()).count())
    }

    /// Indices of members with health above zero, in roster order.
    #[must_use]
    pub fn living_members(&self) -> Vec<usize> {
        self.party
            .iter()
            .enumerate()
            .filter(|(_, member)| member.is_alive())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// The first roster entry leads the party.
    #[must_use]
    pub fn leader(&self) -> Option<&PartyMember> {
        self.party.first()
    }

    #[must_use]
    pub const fn is_out_of_food(&self) -> bool {
        self.food == 0
    }
}
