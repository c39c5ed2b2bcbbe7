//! Tank Arena - a top-down tank shooter on a race track
//!
//! Core modules:
//! - `sim`: Simulation (movement, bullets, collisions, waves, session clock)
//! - `renderer`: Backend-agnostic geometry and HUD text for the current state
//! - `settings`: Driver configuration loaded from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (world units map 1:1 to pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Outer track rectangle
    pub const TRACK_X_MIN: f32 = 120.0;
    pub const TRACK_Y_MIN: f32 = 120.0;
    pub const TRACK_X_MAX: f32 = TRACK_X_MIN + 560.0; // 680
    pub const TRACK_Y_MAX: f32 = TRACK_Y_MIN + 360.0; // 480

    /// Curb width between the outer track edge and the playable area
    pub const CURB_OFFSET: f32 = 20.0;
    pub const INNER_X_MIN: f32 = TRACK_X_MIN + CURB_OFFSET; // 140
    pub const INNER_Y_MIN: f32 = TRACK_Y_MIN + CURB_OFFSET; // 140
    pub const INNER_X_MAX: f32 = TRACK_X_MAX - CURB_OFFSET; // 660
    pub const INNER_Y_MAX: f32 = TRACK_Y_MAX - CURB_OFFSET; // 460

    /// Pool sizes
    pub const MAX_BULLETS: usize = 20;
    pub const NUM_TARGETS: usize = 5;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;

    /// Targets
    pub const TARGET_RADIUS: f32 = 15.0;
    /// Targets keep this far away from the curb
    pub const SPAWN_MARGIN: f32 = 40.0;

    /// Bullets (units per tick)
    pub const BULLET_SPEED: f32 = 8.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    /// Bullets leave the barrel this far in front of the tank center
    pub const MUZZLE_OFFSET: f32 = 40.0;

    /// Tank speed limits (units per tick, negative = reverse)
    pub const MIN_SPEED: f32 = -2.0;
    pub const MAX_SPEED: f32 = 5.0;
    /// Speed change per accelerate/brake command
    pub const SPEED_STEP: f32 = 0.2;
    /// Heading change per rotate command (degrees)
    pub const TURN_STEP: f32 = 5.0;

    /// Start pose: bottom middle of the inner area, facing up the screen
    pub const START_X: f32 = (INNER_X_MIN + INNER_X_MAX) / 2.0;
    pub const START_Y: f32 = INNER_Y_MIN + 50.0;
    pub const START_HEADING: f32 = 180.0;

    /// Session length in seconds
    pub const SESSION_SECONDS: u32 = 60;

    /// Simulation cadence
    pub const FRAME_HZ: u32 = 60;
    /// Maximum steps per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Wrap a heading into [0, 360) degrees
#[inline]
pub fn wrap_heading(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit forward vector for a heading in degrees.
///
/// The tank model faces local -Y, so heading 0 gives (0, -1) and
/// heading 180 gives (0, 1).
#[inline]
pub fn heading_to_dir(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}
