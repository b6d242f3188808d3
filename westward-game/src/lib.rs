//! Westward Game Engine
//!
//! Platform-agnostic core for the Westward wagon-trail simulation: resource
//! accounting, weighted random events, and the scene state machine driven by
//! player actions. This crate performs no I/O; views consume [`Snapshot`]s.

pub mod action;
pub mod config;
mod constants;
pub mod dispatch;
pub mod events;
pub mod ledger;
pub mod notice;
pub mod numbers;
pub mod rng;
pub mod scene;
pub mod seed;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod status;
pub mod summary;
mod text;

// Re-export commonly used types
pub use action::{ActionId, ParseActionError};
pub use config::{ConfigError, TrailConfig};
pub use constants::HEALTH_MAX;
pub use dispatch::{TurnReport, dispatch, dispatch_id, reject_unknown, travel_rate};
pub use events::{EventEffect, EventOutcome, RandomEvent, maybe_trigger};
pub use ledger::{PartyMember, ResourceLedger};
pub use notice::{Notice, TravelBlock, TurnNotices};
pub use rng::{ScriptedRng, TrailRng};
pub use scene::{Choice, SceneId};
pub use seed::{decode_seed_code, encode_seed_code, generate_code_from_entropy, parse_seed};
pub use session::TrailSession;
pub use snapshot::{MemberSnapshot, Snapshot};
pub use state::{GameState, JourneyStats};
pub use status::{GameStatus, LossCause, evaluate_status};
pub use summary::JourneySummary;
