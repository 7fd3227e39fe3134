//! Fixed-timestep frame clock
//!
//! Decouples the 60 Hz simulation from a variable display refresh rate with
//! an accumulator: each frame banks its wall-clock delta and runs however
//! many whole ticks fit. The bank is capped so a long stall (tab hidden,
//! debugger pause) loses time instead of spiraling into unbounded catch-up.

use crate::consts::*;

use super::state::GameState;
use super::tick::{TickInput, tick};

/// Accumulator driving whole simulation ticks from frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank `frame_dt` seconds and run the ticks that fit, returning how
    /// many were run (0 to [`MAX_TICKS_PER_FRAME`]).
    pub fn advance(&mut self, state: &mut GameState, input: &TickInput, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_TICKS_PER_FRAME {
            tick(state, input);
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        // Hitting the cap means we stalled; lose the backlog instead of
        // replaying it across the next frames
        if steps == MAX_TICKS_PER_FRAME && self.accumulator >= SIM_DT {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Drop banked time, e.g. when the window regains focus
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_state() -> GameState {
        // Start phase: ticks are cheap no-ops, only step counting matters
        GameState::new(0)
    }

    #[test]
    fn short_frame_runs_no_tick() {
        let mut clock = FrameClock::new();
        let mut state = idle_state();
        let steps = clock.advance(&mut state, &TickInput::default(), SIM_DT * 0.5);
        assert_eq!(steps, 0);
    }

    #[test]
    fn banked_remainder_carries_over() {
        let mut clock = FrameClock::new();
        let mut state = idle_state();
        assert_eq!(
            clock.advance(&mut state, &TickInput::default(), SIM_DT * 0.75),
            0
        );
        // Second half-frame tips the bank over one tick
        assert_eq!(
            clock.advance(&mut state, &TickInput::default(), SIM_DT * 0.75),
            1
        );
    }

    #[test]
    fn normal_frame_runs_one_tick() {
        let mut clock = FrameClock::new();
        let mut state = idle_state();
        let mut total = 0;
        for _ in 0..10 {
            total += clock.advance(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(total, 10);
    }

    #[test]
    fn stall_is_capped_not_replayed() {
        let mut clock = FrameClock::new();
        let mut state = idle_state();
        // A 3-second stall must not produce 180 catch-up ticks
        let steps = clock.advance(&mut state, &TickInput::default(), 3.0);
        assert_eq!(steps, MAX_TICKS_PER_FRAME);
        // And the bank is drained afterwards
        let steps = clock.advance(&mut state, &TickInput::default(), 0.0);
        assert_eq!(steps, 0);
    }

    #[test]
    fn reset_drops_banked_time() {
        let mut clock = FrameClock::new();
        let mut state = idle_state();
        clock.advance(&mut state, &TickInput::default(), SIM_DT * 0.9);
        clock.reset();
        let steps = clock.advance(&mut state, &TickInput::default(), SIM_DT * 0.9);
        assert_eq!(steps, 0);
    }
}
