//! Sky Hopper - an endless vertical platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, level generation, hazards, game state)
//! - `settings`: Player preferences
//! - `highscores`: Leaderboard bookkeeping
//!
//! Rendering, audio and input decoding live outside this crate. The sim
//! exposes read-only state plus a drained event stream each frame; a shell
//! maps those to drawing and sound however it likes.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
///
/// Velocities are in pixels per tick at the fixed 60 Hz rate; the world
/// coordinate system has y growing downward, so climbing means y decreasing.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 5;

    /// Logical viewport dimensions
    pub const WORLD_W: f32 = 480.0;
    pub const WORLD_H: f32 = 640.0;

    /// Player sprite footprint
    pub const PLAYER_W: f32 = 64.0;
    pub const PLAYER_H: f32 = 64.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.45;
    /// Vertical impulse applied on a normal landing (negative = up)
    pub const JUMP_VEL: f32 = -14.0;
    /// Spring landing impulse (~2x the jump height of a normal landing)
    pub const SPRING_VEL: f32 = JUMP_VEL * std::f32::consts::SQRT_2;
    /// Horizontal speed while a movement key is held
    pub const MOVE_SPEED: f32 = 5.5;
    /// Per-tick horizontal velocity decay with no input held
    pub const MOVE_DECAY: f32 = 0.75;

    /// The camera keeps the player this fraction of the window below the top
    pub const CAMERA_ANCHOR: f32 = 0.38;
    /// How far below the window the player may fall before the run ends
    pub const FALL_MARGIN: f32 = 50.0;

    /// Platform defaults
    pub const PLATFORM_H: f32 = 16.0;
    pub const PLATFORM_MIN_W: f32 = 80.0;
    pub const PLATFORM_W_SPREAD: f32 = 60.0;
    /// Width of the guaranteed platform under the spawn point
    pub const START_PLATFORM_W: f32 = 130.0;
    /// Minimum vertical gap between generated platforms
    pub const BASE_GAP: f32 = 70.0;
    /// Random gap extension at difficulty 0
    pub const GAP_SPREAD_BASE: f32 = 20.0;
    /// Additional gap extension at difficulty 1
    pub const GAP_SPREAD_DIFF: f32 = 100.0;
    /// Ticks a broken platform lingers before removal
    pub const BREAK_TICKS: u32 = 20;
    /// Ticks the spring pop animation counter runs after a bounce
    pub const SPRING_POP_TICKS: u32 = 10;
    /// Horizontal inset on platform edges so landings don't catch corners
    pub const EDGE_INSET: f32 = 4.0;

    /// Score at which difficulty saturates at 1.0
    pub const DIFFICULTY_CAP_SCORE: f32 = 6000.0;

    /// Hazard defaults
    pub const HAZARD_SIZE: f32 = 64.0;
    /// Descent speed once falling, pixels per tick
    pub const HAZARD_FALL_SPEED: f32 = 2.5;
    /// Warning phase duration (5 seconds at 60 Hz)
    pub const HAZARD_WARN_TICKS: u32 = 300;
    /// Spawn interval bounds in ticks (6-12 seconds)
    pub const HAZARD_SPAWN_MIN: u32 = 360;
    pub const HAZARD_SPAWN_MAX: u32 = 720;
    /// Forgiving inset applied to both boxes in the hit test
    pub const HAZARD_HIT_INSET: f32 = 10.0;
    /// Distance below the window at which hazards are pruned
    pub const HAZARD_PRUNE_MARGIN: f32 = 100.0;
}
