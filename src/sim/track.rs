//! Axis-aligned track areas
//!
//! The playable area is the inner track rectangle (inside the curb). Tank
//! positions are clamped into it, bullets die when they leave it, and targets
//! spawn inside a shrunken copy of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// Drivable area inside the curb
pub const INNER: Bounds = Bounds {
    min: Vec2::new(INNER_X_MIN, INNER_Y_MIN),
    max: Vec2::new(INNER_X_MAX, INNER_Y_MAX),
};

/// Where new targets may appear
pub const TARGET_SPAWN: Bounds = INNER.shrink(SPAWN_MARGIN);

impl Bounds {
    /// Shrink by `margin` on every side
    pub const fn shrink(&self, margin: f32) -> Self {
        Self {
            min: Vec2::new(self.min.x + margin, self.min.y + margin),
            max: Vec2::new(self.max.x - margin, self.max.y - margin),
        }
    }

    /// True when the point is inside or on an edge
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Hard clamp into the rectangle (no reflection, no slowdown)
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}
