//! Procedural level generation
//!
//! Platforms stream in above the camera as the player climbs. Difficulty is
//! a pure function of score; it widens the vertical gaps and shifts the
//! variant mix toward Moving and Breakable while Spring stays roughly flat.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::state::{GameState, Platform, PlatformKind};

/// Difficulty in [0, 1]: monotone in score, saturating at the cap
pub fn difficulty(score: u32) -> f32 {
    (score as f32 / DIFFICULTY_CAP_SCORE).min(1.0)
}

/// Pick a platform variant from the difficulty-weighted distribution
fn pick_kind(rng: &mut Pcg32, diff: f32, x: f32) -> PlatformKind {
    let r: f32 = rng.random();
    let kind = if diff < 0.3 {
        if r < 0.88 {
            Tag::Static
        } else if r < 0.94 {
            Tag::Spring
        } else {
            Tag::Moving
        }
    } else if diff < 0.6 {
        if r < 0.65 {
            Tag::Static
        } else if r < 0.78 {
            Tag::Moving
        } else if r < 0.90 {
            Tag::Breakable
        } else {
            Tag::Spring
        }
    } else if r < 0.45 {
        Tag::Static
    } else if r < 0.65 {
        Tag::Moving
    } else if r < 0.82 {
        Tag::Breakable
    } else {
        Tag::Spring
    };

    match kind {
        Tag::Static => PlatformKind::Static,
        Tag::Moving => {
            let speed = 1.5 + diff * 3.0;
            let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let range = 50.0 + rng.random::<f32>() * (60.0 + diff * 80.0);
            PlatformKind::Moving {
                origin_x: x,
                dir,
                speed,
                range,
            }
        }
        Tag::Breakable => PlatformKind::Breakable {
            broken: false,
            break_ticks: 0,
        },
        Tag::Spring => PlatformKind::Spring { pop_ticks: 0 },
    }
}

enum Tag {
    Static,
    Moving,
    Breakable,
    Spring,
}

/// Create one platform at the given height
pub fn make_platform(rng: &mut Pcg32, y: f32, diff: f32) -> Platform {
    let width = PLATFORM_MIN_W + rng.random::<f32>() * PLATFORM_W_SPREAD;
    let x = rng.random::<f32>() * (WORLD_W - width);
    let kind = pick_kind(rng, diff, x);
    Platform { x, y, width, kind }
}

/// Fill the vertical band from `from_y` up to `to_y` (remember: up is
/// negative) with platforms, gap sizes widening with difficulty.
///
/// Always succeeds; adds nothing if the band is already shorter than one gap.
pub fn fill_above(
    platforms: &mut Vec<Platform>,
    rng: &mut Pcg32,
    from_y: f32,
    to_y: f32,
    diff: f32,
) {
    let mut y = from_y;
    while y > to_y {
        y -= BASE_GAP + rng.random::<f32>() * (GAP_SPREAD_BASE + diff * GAP_SPREAD_DIFF);
        platforms.push(make_platform(rng, y, diff));
    }
}

/// Stream in new platforms once generation lags within two screens of the
/// camera, topping the world up to three screens above it.
pub fn replenish(state: &mut GameState) {
    let mut top_y = state.camera_y;
    for platform in &state.platforms {
        if platform.y < top_y {
            top_y = platform.y;
        }
    }
    if top_y > state.camera_y - WORLD_H * 2.0 {
        let diff = difficulty(state.score);
        fill_above(
            &mut state.platforms,
            &mut state.rng,
            top_y,
            state.camera_y - WORLD_H * 3.0,
            diff,
        );
    }
}

/// Roll the tick count until the next hazard spawn
pub fn roll_spawn_interval(rng: &mut Pcg32) -> u32 {
    rng.random_range(HAZARD_SPAWN_MIN..=HAZARD_SPAWN_MAX)
}
