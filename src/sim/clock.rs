//! Fixed-step clocks
//!
//! Two independent logical clocks feed the session: the frame clock runs the
//! simulation step at `frame_hz`, the countdown clock runs `tick_second` once
//! per elapsed second. Real time goes in through `advance`.

use super::state::GameState;
use super::tick::tick;
use crate::consts::{FRAME_HZ, MAX_SUBSTEPS};

/// How many steps of each clock ran during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTicks {
    pub frames: u32,
    pub seconds: u32,
}

#[derive(Debug, Clone)]
pub struct GameClock {
    frame_dt: f32,
    max_substeps: u32,
    frame_accumulator: f32,
    second_accumulator: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(FRAME_HZ, MAX_SUBSTEPS)
    }
}

impl GameClock {
    pub fn new(frame_hz: u32, max_substeps: u32) -> Self {
        Self {
            frame_dt: 1.0 / frame_hz.max(1) as f32,
            max_substeps: max_substeps.max(1),
            frame_accumulator: 0.0,
            second_accumulator: 0.0,
        }
    }

    /// Length of one simulation step in seconds
    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Feed `dt` seconds of real time. Runs whole steps only; the remainder
    /// carries over to the next call.
    pub fn advance(&mut self, state: &mut GameState, dt: f32) -> ClockTicks {
        let dt = dt.max(0.0);
        let mut ran = ClockTicks::default();

        self.frame_accumulator += dt;
        while self.frame_accumulator >= self.frame_dt && ran.frames < self.max_substeps {
            tick(state);
            self.frame_accumulator -= self.frame_dt;
            ran.frames += 1;
        }
        // Drop backlog we could not catch up on
        if ran.frames == self.max_substeps {
            self.frame_accumulator = self.frame_accumulator.min(self.frame_dt);
        }

        self.second_accumulator += dt;
        let whole = self.second_accumulator.floor();
        if whole >= 1.0 {
            // The countdown can never use more seconds than it has left
            ran.seconds = whole.min(state.time_left as f32) as u32;
            for _ in 0..ran.seconds {
                state.tick_second();
            }
            self.second_accumulator = if whole.is_finite() {
                self.second_accumulator - whole
            } else {
                0.0
            };
        }

        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SESSION_SECONDS;
    use crate::sim::GamePhase;

    #[test]
    fn test_frames_accumulate() {
        let mut state = GameState::new(3);
        let mut clock = GameClock::new(60, 8);

        let ran = clock.advance(&mut state, 0.5 / 60.0);
        assert_eq!(ran.frames, 0);

        let ran = clock.advance(&mut state, 0.6 / 60.0);
        assert_eq!(ran.frames, 1);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_substep_cap() {
        let mut state = GameState::new(3);
        let mut clock = GameClock::new(60, 4);

        let ran = clock.advance(&mut state, 0.5);
        assert_eq!(ran.frames, 4);
        assert_eq!(state.time_ticks, 4);

        // Backlog was dropped, so a tiny step does not replay it
        let ran = clock.advance(&mut state, 0.0);
        assert!(ran.frames <= 1);
    }

    #[test]
    fn test_countdown_runs_once_per_second() {
        let mut state = GameState::new(3);
        let mut clock = GameClock::default();

        let ran = clock.advance(&mut state, 0.75);
        assert_eq!(ran.seconds, 0);
        let ran = clock.advance(&mut state, 0.5);
        assert_eq!(ran.seconds, 1);
        assert_eq!(state.time_left, 59);
    }

    #[test]
    fn test_session_ends_after_sixty_seconds() {
        let mut state = GameState::new(3);
        let mut clock = GameClock::default();
        let dt = clock.frame_dt();

        let mut frames = 0;
        while !state.is_over() && frames < 60 * 70 {
            clock.advance(&mut state, dt);
            frames += 1;
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_left, 0);

        // The world stays frozen while the clocks keep running
        let ticks = state.time_ticks;
        clock.advance(&mut state, 2.0);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn test_huge_dt_ends_session_and_returns() {
        for dt in [120.0, 1.0e9, f32::INFINITY] {
            let mut state = GameState::new(3);
            let mut clock = GameClock::new(60, 8);

            let ran = clock.advance(&mut state, dt);
            assert_eq!(ran.frames, 8);
            assert_eq!(ran.seconds, 60);
            assert_eq!(state.time_left, 0);
            assert_eq!(state.phase, GamePhase::GameOver);

            // Accumulators stay usable afterwards
            let ran = clock.advance(&mut state, 0.5);
            assert_eq!(ran.seconds, 0);
        }
    }

    #[test]
    fn test_fractional_second_carries_over_after_catch_up() {
        let mut state = GameState::new(3);
        let mut clock = GameClock::default();

        let ran = clock.advance(&mut state, 2.5);
        assert_eq!(ran.seconds, 2);
        assert_eq!(state.time_left, 58);

        let ran = clock.advance(&mut state, 0.5);
        assert_eq!(ran.seconds, 1);
        assert_eq!(state.time_left, 57);
    }

    #[test]
    fn test_nan_dt_is_ignored() {
        let mut state = GameState::new(3);
        let mut clock = GameClock::default();

        let ran = clock.advance(&mut state, f32::NAN);
        assert_eq!(ran, ClockTicks::default());
        assert_eq!(state.time_left, SESSION_SECONDS);
    }
}
