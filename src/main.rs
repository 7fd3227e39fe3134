//! Headless demo runner
//!
//! Plays a few autopiloted runs at full speed and prints the resulting
//! leaderboard as JSON. Useful for eyeballing balance changes and as a
//! smoke test of the whole sim without a renderer.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use sky_hopper::HighScores;
use sky_hopper::consts::*;
use sky_hopper::sim::{FrameClock, GamePhase, GameState, TickInput};

/// Safety cap per run: ten simulated minutes
const MAX_RUN_TICKS: u64 = 60 * 60 * 10;

/// Steer toward the center of the highest landable platform at or below the
/// player, so descents line up with something to land on.
fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player;
    let target = state
        .platforms
        .iter()
        .filter(|p| p.is_landable() && p.y >= player.pos.y)
        .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));

    let Some(platform) = target else {
        return TickInput::default();
    };

    let center = platform.x + platform.width / 2.0;
    let player_center = player.pos.x + PLAYER_W / 2.0;
    TickInput {
        left: center < player_center - 4.0,
        right: center > player_center + 4.0,
        begin: false,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("Demo starting with seed {seed}");

    let mut state = GameState::new(seed);
    let mut clock = FrameClock::new();
    let mut scores = HighScores::new();
    let begin = TickInput {
        begin: true,
        ..TickInput::default()
    };

    'runs: for run in 1..=3u32 {
        clock.advance(&mut state, &begin, SIM_DT);
        let run_start = state.time_ticks;

        while state.phase == GamePhase::Playing {
            let input = autopilot(&state);
            clock.advance(&mut state, &input, SIM_DT);
            for event in state.drain_events() {
                log::debug!("tick {}: {:?}", state.time_ticks, event);
            }
            if state.time_ticks - run_start > MAX_RUN_TICKS {
                log::warn!("Run {run} hit the tick cap, stopping the demo");
                break 'runs;
            }
        }

        let run_ticks = state.time_ticks - run_start;
        log::info!(
            "Run {run}: score {}, best {}, {:.1}s simulated",
            state.score,
            state.best,
            run_ticks as f32 * SIM_DT
        );
        if let Some(rank) = scores.add_score(state.score, run_ticks, seed) {
            log::info!("Run {run} placed #{rank} on the board");
        }
    }

    println!("{}", scores.to_json());
}
