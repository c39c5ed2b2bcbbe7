//! Simulation module
//!
//! All gameplay logic lives here:
//! - Per-tick integration in fixed units (no dt inside the step)
//! - Seeded RNG only (target placement)
//! - Stable iteration order (pool slot order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod session;
pub mod state;
pub mod tick;
pub mod track;

pub use clock::{ClockTicks, GameClock};
pub use collision::{bullet_hits_target, bullet_out_of_bounds, hit_radius};
pub use session::{Command, Flow};
pub use state::{
    Bullet, BulletPool, GameEvent, GamePhase, GameState, Tank, Target, TargetWave, ViewEffects,
};
pub use tick::{generate_wave, tick};
pub use track::{Bounds, INNER, TARGET_SPAWN};
