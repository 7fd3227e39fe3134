//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; all timers are tick-counted
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{hazard_hits_player, rects_overlap_inset, swept_landing};
pub use level::difficulty;
pub use state::{
    GameEvent, GamePhase, GameState, Hazard, HazardPhase, Platform, PlatformKind, Player,
};
pub use tick::{TickInput, tick};
