//! Session control: player commands, restart, and the countdown clock
//!
//! Everything except `Restart` and `Quit` is ignored once the session is over.

use serde::{Deserialize, Serialize};

use super::state::{BulletPool, GameEvent, GamePhase, GameState, Tank};
use crate::consts::*;
use crate::wrap_heading;

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Accelerate,
    Brake,
    /// Zero the speed at once
    Stop,
    RotateLeft,
    RotateRight,
    Fire,
    ToggleReflect,
    ToggleShear,
    Restart,
    Quit,
}

/// What the driver should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl GameState {
    /// Apply one command
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Restart => self.restart(),
            _ if self.is_over() => {}
            Command::Accelerate => self.tank.speed += SPEED_STEP,
            Command::Brake => self.tank.speed -= SPEED_STEP,
            Command::Stop => self.tank.speed = 0.0,
            Command::RotateLeft => self.tank.heading = wrap_heading(self.tank.heading + TURN_STEP),
            Command::RotateRight => self.tank.heading = wrap_heading(self.tank.heading - TURN_STEP),
            Command::Fire => self.fire(),
            Command::ToggleReflect => self.effects.reflect = !self.effects.reflect,
            Command::ToggleShear => self.effects.shear = !self.effects.shear,
        }

        Flow::Continue
    }

    /// Fire a bullet from the barrel tip along the current heading.
    /// Silently dropped when the session is over or every slot is in flight.
    pub fn fire(&mut self) {
        if self.is_over() {
            return;
        }

        let vel = self.tank.forward() * BULLET_SPEED;
        let pos = self.tank.muzzle();
        match self.bullets.spawn(pos, vel) {
            Some(slot) => {
                self.push_event(GameEvent::Fired { slot, pos });
                log::debug!("Bullet {slot} fired from ({:.1}, {:.1})", pos.x, pos.y);
            }
            None => log::trace!("Fire dropped, all {MAX_BULLETS} bullets in flight"),
        }
    }

    /// Start a new session in place. Visual toggles and the RNG stream carry
    /// over; everything else goes back to its initial value.
    pub fn restart(&mut self) {
        self.tank = Tank::default();
        self.bullets = BulletPool::default();
        self.score = 0;
        self.time_left = SESSION_SECONDS;
        self.wave = 1;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        super::generate_wave(self);

        self.push_event(GameEvent::Restarted);
        log::info!("Session restarted");
    }

    /// One second of the session clock. Reaching zero ends the session.
    pub fn tick_second(&mut self) {
        if self.is_over() || self.time_left == 0 {
            return;
        }

        self.time_left -= 1;
        if self.time_left == 0 {
            self.phase = GamePhase::GameOver;
            self.push_event(GameEvent::GameOver { score: self.score });
            log::info!("Time up, final score {}", self.score);
        }
    }
}
