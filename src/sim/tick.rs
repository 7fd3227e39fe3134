//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one 60 Hz step. All timers are
//! tick-counted, so behavior is deterministic relative to the timestep
//! regardless of the actual frame rate.

use rand::Rng;

use crate::consts::*;

use super::collision;
use super::level;
use super::state::{GameEvent, GamePhase, GameState, Hazard, HazardPhase, PlatformKind};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move left signal held
    pub left: bool,
    /// Move right signal held
    pub right: bool,
    /// Begin/restart signal (ignored while Playing)
    pub begin: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Start | GamePhase::Over => {
            if input.begin {
                state.begin_run();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    integrate_player(state, input);
    update_camera(state);
    update_score(state);

    // Platform oscillation and timers run before collision, every tick
    for platform in &mut state.platforms {
        platform.step();
    }
    resolve_landing(state);

    // Drop expired breakables and anything that scrolled below the window
    state
        .platforms
        .retain(|p| !p.expired() && p.y < state.camera_y + WORLD_H);
    level::replenish(state);

    step_hazards(state);
    if state.phase != GamePhase::Playing {
        // A hazard ended the run this tick
        return;
    }

    // Fell below the visible window
    if state.player.pos.y - state.camera_y > WORLD_H + FALL_MARGIN {
        state.end_run(GameEvent::FellOut);
    }
}

/// Apply input, gravity and integration, then wrap horizontally
fn integrate_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if input.left {
        player.vel.x = -MOVE_SPEED;
    } else if input.right {
        player.vel.x = MOVE_SPEED;
    } else {
        player.vel.x *= MOVE_DECAY;
    }

    player.vel.y += GRAVITY;
    player.prev_y = player.pos.y;
    player.pos += player.vel;

    // Exiting one side re-enters the opposite side
    if player.pos.x + PLAYER_W < 0.0 {
        player.pos.x = WORLD_W;
    }
    if player.pos.x > WORLD_W {
        player.pos.x = -PLAYER_W;
    }
}

/// Camera tracks upward progress only; it never scrolls back down
fn update_camera(state: &mut GameState) {
    let target = state.player.pos.y - WORLD_H * CAMERA_ANCHOR;
    if target < state.camera_y {
        state.camera_y = target;
    }
}

/// Score is the max height climbed from the starting position
fn update_score(state: &mut GameState) {
    let climbed = (state.start_y - state.player.pos.y).floor();
    if climbed > state.score as f32 {
        state.score = climbed as u32;
    }
}

/// Swept landing resolution. Only runs while descending; the first matching
/// platform in iteration order wins and the scan stops.
fn resolve_landing(state: &mut GameState) {
    if state.player.vel.y < 0.0 {
        return;
    }

    let hit = state
        .platforms
        .iter()
        .position(|p| p.is_landable() && collision::swept_landing(&state.player, p));
    let Some(idx) = hit else {
        return;
    };

    let platform = &mut state.platforms[idx];
    state.player.pos.y = platform.y - PLAYER_H;

    match &mut platform.kind {
        PlatformKind::Spring { pop_ticks } => {
            state.player.vel.y = SPRING_VEL;
            *pop_ticks = SPRING_POP_TICKS;
            state.events.push(GameEvent::SpringBounce);
        }
        PlatformKind::Breakable {
            broken,
            break_ticks,
        } => {
            state.player.vel.y = JUMP_VEL;
            *broken = true;
            *break_ticks = BREAK_TICKS;
            state.events.push(GameEvent::Landed);
            state.events.push(GameEvent::PlatformBroken);
        }
        _ => {
            state.player.vel.y = JUMP_VEL;
            state.events.push(GameEvent::Landed);
        }
    }
}

/// Hazard scheduling, lifecycle and collision
fn step_hazards(state: &mut GameState) {
    // Spawn countdown, reseeded after each spawn
    state.spawn_ticks = state.spawn_ticks.saturating_sub(1);
    if state.spawn_ticks == 0 {
        let x = state.rng.random_range(0.0..WORLD_W - HAZARD_SIZE);
        state.hazards.push(Hazard {
            x,
            y: state.camera_y - HAZARD_SIZE,
            phase: HazardPhase::Warning {
                ticks_left: HAZARD_WARN_TICKS,
            },
        });
        state.spawn_ticks = level::roll_spawn_interval(&mut state.rng);
    }

    for hazard in &mut state.hazards {
        if let HazardPhase::Warning { ticks_left } = &mut hazard.phase {
            *ticks_left -= 1;
            // Stay pinned above the camera while warning
            hazard.y = state.camera_y - HAZARD_SIZE;
            if *ticks_left == 0 {
                hazard.phase = HazardPhase::Falling;
            }
        }
        if hazard.is_falling() {
            hazard.y += HAZARD_FALL_SPEED;
        }
    }

    // Any overlap while falling is immediately fatal
    let struck = state
        .hazards
        .iter()
        .any(|h| collision::hazard_hits_player(h, &state.player));
    if struck {
        state.end_run(GameEvent::HazardStrike);
    }

    state
        .hazards
        .retain(|h| h.y - state.camera_y < WORLD_H + HAZARD_PRUNE_MARGIN);
}
