//! Game state and core simulation types
//!
//! Bullets and targets live in fixed-size arrays with an `active` flag.
//! Slots are reused in index order, so nothing is allocated during play.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Clock running, input accepted
    Playing,
    /// Time ran out; only restart and quit are honoured
    GameOver,
}

/// The player's tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub pos: Vec2,
    /// Degrees, kept in [0, 360)
    pub heading: f32,
    /// Units per tick along the heading (negative = reverse)
    pub speed: f32,
}

impl Default for Tank {
    fn default() -> Self {
        Self {
            pos: Vec2::new(START_X, START_Y),
            heading: START_HEADING,
            speed: 0.0,
        }
    }
}

impl Tank {
    /// Unit vector the barrel points along
    pub fn forward(&self) -> Vec2 {
        crate::heading_to_dir(self.heading)
    }

    /// Where a freshly fired bullet appears
    pub fn muzzle(&self) -> Vec2 {
        self.pos + self.forward() * MUZZLE_OFFSET
    }
}

/// A bullet slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Fixed at spawn time
    pub vel: Vec2,
    pub active: bool,
}

/// A target slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Target {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: TARGET_RADIUS,
            active: true,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: TARGET_RADIUS,
            active: false,
        }
    }
}

/// Fixed-capacity bullet arena
#[derive(Debug, Clone, PartialEq)]
pub struct BulletPool {
    pub slots: [Bullet; MAX_BULLETS],
}

impl Default for BulletPool {
    fn default() -> Self {
        Self {
            slots: [Bullet::default(); MAX_BULLETS],
        }
    }
}

impl BulletPool {
    /// Activate the first free slot. Returns the slot index, or `None` when
    /// every slot is in flight.
    pub fn spawn(&mut self, pos: Vec2, vel: Vec2) -> Option<usize> {
        let index = self.slots.iter().position(|b| !b.active)?;
        self.slots[index] = Bullet {
            pos,
            vel,
            active: true,
        };
        Some(index)
    }

    pub fn clear(&mut self) {
        for bullet in &mut self.slots {
            bullet.active = false;
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter().filter(|b| b.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

/// The current wave of targets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetWave {
    pub slots: [Target; NUM_TARGETS],
}

impl TargetWave {
    pub fn active(&self) -> impl Iterator<Item = &Target> {
        self.slots.iter().filter(|t| t.active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn is_cleared(&self) -> bool {
        self.slots.iter().all(|t| !t.active)
    }
}

/// Presentational toggles; no gameplay effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEffects {
    /// Mirror the dynamic scene across the window's horizontal center line
    pub reflect: bool,
    /// Skew the dynamic scene along X
    pub shear: bool,
}

/// Things that happened during a step or command, for logging and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { slot: usize, pos: Vec2 },
    TargetHit { target: usize, bullet: usize, pos: Vec2 },
    WaveCleared { wave: u32 },
    GameOver { score: u32 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the target RNG started from
    pub seed: u64,
    /// Target placement RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Targets destroyed this session
    pub score: u32,
    /// Whole seconds left on the session clock
    pub time_left: u32,
    /// 1-based wave counter
    pub wave: u32,
    /// Simulation steps executed this session
    pub time_ticks: u64,
    pub tank: Tank,
    pub bullets: BulletPool,
    pub targets: TargetWave,
    pub effects: ViewEffects,
    /// Pending events, oldest first. Embedders call `drain_events` once per
    /// frame; past `MAX_PENDING_EVENTS` the oldest are dropped.
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session: tank at the start pose, empty bullet pool,
    /// a random wave of targets, full clock.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            time_left: SESSION_SECONDS,
            wave: 1,
            time_ticks: 0,
            tank: Tank::default(),
            bullets: BulletPool::default(),
            targets: TargetWave::default(),
            effects: ViewEffects::default(),
            events: Vec::new(),
        };

        super::generate_wave(&mut state);
        log::info!("Session started (seed {seed})");

        state
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Queue an event, dropping the oldest once the queue is full
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            let excess = self.events.len() + 1 - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, 60);
        assert_eq!(state.wave, 1);
        assert_eq!(state.tank.pos, Vec2::new(400.0, 190.0));
        assert_eq!(state.tank.heading, 180.0);
        assert_eq!(state.tank.speed, 0.0);
        assert_eq!(state.bullets.active_count(), 0);
        assert_eq!(state.targets.active_count(), NUM_TARGETS);
    }

    #[test]
    fn test_pool_spawn_first_free_slot() {
        let mut pool = BulletPool::default();
        assert_eq!(pool.spawn(Vec2::ZERO, Vec2::X), Some(0));
        assert_eq!(pool.spawn(Vec2::ZERO, Vec2::X), Some(1));

        pool.slots[0].active = false;
        assert_eq!(pool.spawn(Vec2::ONE, Vec2::Y), Some(0));
        assert_eq!(pool.slots[0].pos, Vec2::ONE);
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_pool_exhausted() {
        let mut pool = BulletPool::default();
        for i in 0..MAX_BULLETS {
            assert_eq!(pool.spawn(Vec2::ZERO, Vec2::X), Some(i));
        }
        assert_eq!(pool.spawn(Vec2::ZERO, Vec2::X), None);
        assert_eq!(pool.active_count(), MAX_BULLETS);

        pool.clear();
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_muzzle_ahead_of_tank() {
        let tank = Tank::default();
        let muzzle = tank.muzzle();
        assert!((muzzle.x - 400.0).abs() < 1e-4);
        assert!((muzzle.y - 230.0).abs() < 1e-4);
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(1);
        state.events.push(GameEvent::Restarted);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut state = GameState::new(1);
        for wave in 0..(MAX_PENDING_EVENTS as u32 + 10) {
            state.push_event(GameEvent::WaveCleared { wave });
        }

        assert_eq!(state.events.len(), MAX_PENDING_EVENTS);
        assert_eq!(state.events[0], GameEvent::WaveCleared { wave: 10 });
        assert_eq!(
            state.events.last(),
            Some(&GameEvent::WaveCleared { wave: MAX_PENDING_EVENTS as u32 + 9 })
        );
    }
}
