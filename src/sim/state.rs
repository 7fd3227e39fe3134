//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, waiting for the begin input
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for the begin input to restart
    Over,
}

/// Discrete events emitted by the simulation for the audio/render shell.
///
/// The core never waits on these; they are drained once per frame and any
/// that go unconsumed are simply dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new run began (start or restart)
    RunStarted,
    /// Player landed on a platform (normal impulse)
    Landed,
    /// Player landed on a spring platform (boosted impulse)
    SpringBounce,
    /// A breakable platform cracked under the player
    PlatformBroken,
    /// A falling hazard hit the player; the run is over
    HazardStrike,
    /// Player fell below the window; the run is over
    FellOut,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Y position before the last integration step, for the swept landing test
    pub prev_y: f32,
}

impl Player {
    /// Player at the run spawn point, already moving upward with a jump
    pub fn spawn() -> Self {
        let pos = Vec2::new(WORLD_W / 2.0 - PLAYER_W / 2.0, WORLD_H - 130.0);
        Self {
            pos,
            vel: Vec2::new(0.0, JUMP_VEL),
            prev_y: pos.y,
        }
    }

    /// Left and right extents of the player's hitbox
    pub fn x_extent(&self) -> (f32, f32) {
        (self.pos.x, self.pos.x + PLAYER_W)
    }

    /// Bottom edge of the player's hitbox
    pub fn bottom(&self) -> f32 {
        self.pos.y + PLAYER_H
    }
}

/// Platform variants and their variant-specific state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Oscillates horizontally around its spawn position
    Moving {
        origin_x: f32,
        /// +1 or -1
        dir: f32,
        /// Pixels per tick
        speed: f32,
        /// Maximum displacement from origin before reversing
        range: f32,
    },
    /// Cracks on first landing, then lingers briefly before removal
    Breakable { broken: bool, break_ticks: u32 },
    /// Launches the player with a boosted impulse
    Spring {
        /// Pop animation counter (render-only)
        pop_ticks: u32,
    },
}

/// A platform entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub kind: PlatformKind,
}

impl Platform {
    /// Whether the platform still takes part in collision checks
    pub fn is_landable(&self) -> bool {
        !matches!(self.kind, PlatformKind::Breakable { broken: true, .. })
    }

    /// Whether a broken platform's removal countdown has expired
    pub fn expired(&self) -> bool {
        matches!(
            self.kind,
            PlatformKind::Breakable {
                broken: true,
                break_ticks: 0
            }
        )
    }

    /// Advance per-tick platform behavior: oscillation and timers.
    ///
    /// Runs every tick for every platform, independent of collision checks.
    pub fn step(&mut self) {
        match &mut self.kind {
            PlatformKind::Moving {
                origin_x,
                dir,
                speed,
                range,
            } => {
                self.x += *speed * *dir;
                if (self.x - *origin_x).abs() > *range {
                    *dir = -*dir;
                }
            }
            PlatformKind::Breakable {
                broken: true,
                break_ticks,
            } => {
                *break_ticks = break_ticks.saturating_sub(1);
            }
            PlatformKind::Spring { pop_ticks } => {
                *pop_ticks = pop_ticks.saturating_sub(1);
            }
            _ => {}
        }
    }
}

/// Hazard lifecycle: warning or falling, never both, never neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardPhase {
    /// Pinned above the camera, counting down to activation
    Warning { ticks_left: u32 },
    /// Descending at constant speed until pruned
    Falling,
}

/// A falling hazard entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub x: f32,
    pub y: f32,
    pub phase: HazardPhase,
}

impl Hazard {
    pub fn is_falling(&self) -> bool {
        matches!(self.phase, HazardPhase::Falling)
    }

    /// Normalized warning urgency in [0, 1]; 1.0 once falling
    pub fn urgency(&self) -> f32 {
        match self.phase {
            HazardPhase::Warning { ticks_left } => {
                (1.0 - ticks_left as f32 / HAZARD_WARN_TICKS as f32).clamp(0.0, 1.0)
            }
            HazardPhase::Falling => 1.0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The single RNG all randomness flows through
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player entity; recreated on every (re)start
    pub player: Player,
    /// Live platforms, oldest first (collision honors iteration order)
    pub platforms: Vec<Platform>,
    /// Live hazards
    pub hazards: Vec<Hazard>,
    /// Camera vertical offset; only ever scrolls upward (decreases)
    pub camera_y: f32,
    /// Player y at run start; score is measured against this
    pub start_y: f32,
    /// Max height climbed this run, floored to an integer
    pub score: u32,
    /// Best score across runs; survives restarts
    pub best: u32,
    /// Ticks until the next hazard spawn
    pub spawn_ticks: u32,
    /// Events emitted since the last drain
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state in the Start phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            time_ticks: 0,
            player: Player::spawn(),
            platforms: Vec::new(),
            hazards: Vec::new(),
            camera_y: 0.0,
            start_y: 0.0,
            score: 0,
            best: 0,
            spawn_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset the run and enter Playing. Best score is deliberately kept.
    pub fn begin_run(&mut self) {
        self.player = Player::spawn();
        self.platforms.clear();
        self.hazards.clear();
        self.camera_y = 0.0;
        self.start_y = self.player.pos.y;
        self.score = 0;
        self.spawn_ticks = level::roll_spawn_interval(&mut self.rng);

        // Guaranteed platform directly below the spawn point
        self.platforms.push(Platform {
            x: self.player.pos.x - 15.0,
            y: self.player.pos.y + PLAYER_H + 5.0,
            width: START_PLATFORM_W,
            kind: PlatformKind::Static,
        });
        level::fill_above(
            &mut self.platforms,
            &mut self.rng,
            self.player.pos.y + PLAYER_H,
            self.camera_y - WORLD_H * 3.0,
            0.0,
        );

        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (seed {}, best {})", self.seed, self.best);
    }

    /// End the current run with the given terminal event
    pub(crate) fn end_run(&mut self, event: GameEvent) {
        self.best = self.best.max(self.score);
        self.phase = GamePhase::Over;
        self.events.push(event);
        log::info!(
            "Run over ({:?}) at tick {}: score {}, best {}",
            event,
            self.time_ticks,
            self.score,
            self.best
        );
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
