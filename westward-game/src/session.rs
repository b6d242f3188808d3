use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::action::ActionId;
use crate::config::TrailConfig;
use crate::dispatch::{self, TurnReport};
use crate::rng::TrailRng;
use crate::snapshot::Snapshot;
use crate::state::GameState;
use crate::summary::JourneySummary;

/// High-level session wrapper binding a random source to an owned game state.
#[derive(Debug, Clone)]
pub struct TrailSession<R = ChaCha20Rng> {
    state: GameState,
    rng: R,
    seed: Option<u64>,
    turns: u32,
    last_turn: Option<TurnReport>,
}

impl TrailSession<ChaCha20Rng> {
    /// Construct a fresh session seeded deterministically from `seed`.
    #[must_use]
    pub fn new(config: &TrailConfig, seed: u64) -> Self {
        let mut session = Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed));
        session.seed = Some(seed);
        session
    }

    /// Deterministically reseed the random source. The journey itself is kept.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
        self.seed = Some(seed);
    }
}

impl<R: TrailRng> TrailSession<R> {
    /// Build a session around any random source, such as a scripted one.
    #[must_use]
    pub fn with_rng(config: &TrailConfig, rng: R) -> Self {
        Self::from_state(GameState::new(config), rng)
    }

    /// Resume from an existing game state.
    #[must_use]
    pub const fn from_state(state: GameState, rng: R) -> Self {
        Self {
            state,
            rng,
            seed: None,
            turns: 0,
            last_turn: None,
        }
    }

    /// Dispatch one action, returning what happened.
    pub fn dispatch(&mut self, action: ActionId) -> &TurnReport {
        let report = dispatch::dispatch(action, &mut self.state, &mut self.rng);
        self.record(report)
    }

    /// Dispatch a raw id from a view; unknown ids are reported, not rejected.
    pub fn dispatch_id(&mut self, id: &str) -> &TurnReport {
        let report = dispatch::dispatch_id(id, &mut self.state, &mut self.rng);
        self.record(report)
    }

    fn record(&mut self, report: TurnReport) -> &TurnReport {
        self.turns = self.turns.saturating_add(1);
        self.last_turn.insert(report)
    }

    /// Snapshot of the current state and the most recent turn.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.last_turn.as_ref())
    }

    #[must_use]
    pub fn summary(&self) -> JourneySummary {
        JourneySummary::from_state(&self.state)
    }

    #[must_use]
    pub const fn last_turn(&self) -> Option<&TurnReport> {
        self.last_turn.as_ref()
    }

    /// Number of dispatches made through this session.
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Borrow the underlying immutable game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Borrow the underlying mutable game state.
    pub const fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Apply a closure to the mutable game state.
    pub fn with_state_mut<T>(&mut self, f: impl FnOnce(&mut GameState) -> T) -> T {
        f(&mut self.state)
    }

    /// Borrow the random source.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the session, returning the underlying game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
