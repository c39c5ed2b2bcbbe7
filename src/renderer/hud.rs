//! HUD text layout
//!
//! Produces positioned strings; glyph rendering belongs to the display backend.

use glam::Vec2;

use super::scene::Snapshot;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

pub const CONTROLS_HELP: &str =
    "W/S: move  |  Left/Right: rotate  |  SPACE: fire  |  R: reflect  |  H: shear  |  N: restart  |  F: stop car";

/// One line of HUD text, anchored at its baseline-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub pos: Vec2,
    pub text: String,
}

impl HudLine {
    fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self {
            pos: Vec2::new(x, y),
            text: text.into(),
        }
    }
}

pub fn hud_lines(snapshot: &Snapshot) -> Vec<HudLine> {
    let mut lines = vec![
        HudLine::new(10.0, WINDOW_HEIGHT - 20.0, CONTROLS_HELP),
        HudLine::new(10.0, WINDOW_HEIGHT - 40.0, format!("Score: {}", snapshot.score)),
        HudLine::new(10.0, WINDOW_HEIGHT - 60.0, format!("Time: {}", snapshot.time_left)),
    ];

    if snapshot.game_over {
        let (cx, cy) = (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
        lines.push(HudLine::new(cx - 60.0, cy + 10.0, "GAME OVER"));
        lines.push(HudLine::new(cx - 80.0, cy - 10.0, format!("Final Score: {}", snapshot.score)));
        lines.push(HudLine::new(cx - 130.0, cy - 30.0, "Press N to restart or ESC to exit"));
    }

    lines
}
