//! Bullet collision tests
//!
//! Bullets are treated as circles of `BULLET_RADIUS` for hit tests and as
//! points for the bounds test.

use glam::Vec2;

use super::state::Target;
use super::track::Bounds;
use crate::consts::BULLET_RADIUS;

/// Combined hit distance for a bullet against a target
#[inline]
pub fn hit_radius(target: &Target) -> f32 {
    target.radius + BULLET_RADIUS
}

/// True when a bullet at `bullet_pos` touches the target
#[inline]
pub fn bullet_hits_target(bullet_pos: Vec2, target: &Target) -> bool {
    let r = hit_radius(target);
    bullet_pos.distance_squared(target.pos) <= r * r
}

/// True when a bullet at `pos` has left the playable area
#[inline]
pub fn bullet_out_of_bounds(pos: Vec2, area: &Bounds) -> bool {
    !area.contains(pos)
}
