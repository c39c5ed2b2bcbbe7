//! Per-frame simulation step
//!
//! Order inside one step is fixed: tank motion, bullet motion (with the
//! bounds cull), bullet vs target hits, then the wave respawn check. A bullet
//! that leaves the inner area is culled before hits are tested, so it cannot
//! score on the step it exits.

use glam::Vec2;
use rand::Rng;

use super::collision::{bullet_hits_target, bullet_out_of_bounds};
use super::state::{GameEvent, GamePhase, GameState, Target};
use super::track::{INNER, TARGET_SPAWN};
use crate::consts::*;

/// Advance the game state by one step. Does nothing once the session is over.
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    move_tank(state);
    move_bullets(state);
    resolve_hits(state);

    if state.targets.is_cleared() {
        state.push_event(GameEvent::WaveCleared { wave: state.wave });
        state.wave += 1;
        generate_wave(state);
        log::info!("Wave {} spawned (score {})", state.wave, state.score);
    }
}

/// Integrate the tank along its heading, then clamp position and speed
fn move_tank(state: &mut GameState) {
    let tank = &mut state.tank;
    let step = tank.forward() * tank.speed;
    tank.pos = INNER.clamp(tank.pos + step);
    tank.speed = tank.speed.clamp(MIN_SPEED, MAX_SPEED);
}

/// Move every live bullet and cull the ones that left the inner area
fn move_bullets(state: &mut GameState) {
    for bullet in state.bullets.slots.iter_mut().filter(|b| b.active) {
        bullet.pos += bullet.vel;
        if bullet_out_of_bounds(bullet.pos, &INNER) {
            bullet.active = false;
        }
    }
}

/// For each live target, the first live bullet (in slot order) touching it
/// destroys it. Both are deactivated and the score goes up by one.
fn resolve_hits(state: &mut GameState) {
    for t in 0..state.targets.slots.len() {
        let target = state.targets.slots[t];
        if !target.active {
            continue;
        }

        let hit = state
            .bullets
            .slots
            .iter()
            .position(|b| b.active && bullet_hits_target(b.pos, &target));

        if let Some(b) = hit {
            state.targets.slots[t].active = false;
            state.bullets.slots[b].active = false;
            state.score += 1;
            state.push_event(GameEvent::TargetHit {
                target: t,
                bullet: b,
                pos: target.pos,
            });
            log::debug!("Target {t} hit by bullet {b}, score {}", state.score);
        }
    }
}

/// Replace every target with a fresh one at an independent uniform position
/// inside the spawn area. Score is untouched.
pub fn generate_wave(state: &mut GameState) {
    for slot in state.targets.slots.iter_mut() {
        let x = state.rng.random_range(TARGET_SPAWN.min.x..=TARGET_SPAWN.max.x);
        let y = state.rng.random_range(TARGET_SPAWN.min.y..=TARGET_SPAWN.max.y);
        *slot = Target::new(Vec2::new(x, y));
    }
}
