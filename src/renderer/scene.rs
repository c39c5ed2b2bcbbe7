//! Scene composition
//!
//! The static layer (grass, track, scenery) never moves. The dynamic layer
//! (targets, tank, bullets) is built from a `Snapshot` and optionally sheared
//! and mirrored.

use glam::{Affine2, Mat2, Vec2};
use serde::Serialize;

use super::shapes;
use super::vertex::{Vertex, colors, transform};
use crate::consts::*;
use crate::sim::{GameState, ViewEffects};

/// X shear factor applied when shear is on
pub const SHEAR_X: f32 = 0.3;
/// Tank model scale
pub const TANK_SCALE: f32 = 0.9;
/// Half the side of a bullet square
pub const BULLET_HALF_SIZE: f32 = 4.0;
const CIRCLE_SEGMENTS: u32 = 32;

/// Read-only view of everything the display needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Seed the session started from, enough to replay target placement
    pub seed: u64,
    pub tank_pos: Vec2,
    pub tank_heading: f32,
    pub bullets: Vec<Vec2>,
    /// (center, radius) of every live target
    pub targets: Vec<(Vec2, f32)>,
    pub score: u32,
    pub time_left: u32,
    pub wave: u32,
    pub game_over: bool,
    pub effects: ViewEffects,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            seed: state.seed,
            tank_pos: state.tank.pos,
            tank_heading: state.tank.heading,
            bullets: state.bullets.active().map(|b| b.pos).collect(),
            targets: state.targets.active().map(|t| (t.pos, t.radius)).collect(),
            score: state.score,
            time_left: state.time_left,
            wave: state.wave,
            game_over: state.is_over(),
            effects: state.effects,
        }
    }
}

/// Transform for the dynamic layer. Shear is applied first, then the mirror
/// across the window's horizontal center line.
pub fn effects_transform(effects: ViewEffects) -> Affine2 {
    let mut xf = Affine2::IDENTITY;
    if effects.shear {
        // x' = x + SHEAR_X * y
        xf = Affine2::from_mat2(Mat2::from_cols(Vec2::X, Vec2::new(SHEAR_X, 1.0))) * xf;
    }
    if effects.reflect {
        // y' = HEIGHT - y
        xf = Affine2::from_mat2_translation(
            Mat2::from_diagonal(Vec2::new(1.0, -1.0)),
            Vec2::new(0.0, WINDOW_HEIGHT),
        ) * xf;
    }
    xf
}

/// Background, track, curb, lane markings and trackside scenery
pub fn static_scene() -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4096);

    shapes::rect(&mut out, Vec2::ZERO, Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT), colors::GRASS);
    draw_track(&mut out);
    draw_scenery(&mut out);

    out
}

fn draw_track(out: &mut Vec<Vertex>) {
    let track_min = Vec2::new(TRACK_X_MIN, TRACK_Y_MIN);
    let track_max = Vec2::new(TRACK_X_MAX, TRACK_Y_MAX);
    shapes::rect(out, track_min, track_max, colors::ASPHALT);

    let corners = [
        track_min,
        Vec2::new(TRACK_X_MAX, TRACK_Y_MIN),
        track_max,
        Vec2::new(TRACK_X_MIN, TRACK_Y_MAX),
    ];
    shapes::outline(out, &corners, 3.0, colors::WHITE);

    // Curb: 20-unit segments alternating red and white
    const CURB_SEGMENT: f32 = 20.0;
    let curb_color = |i: usize| if i % 2 == 0 { colors::RED_CURB } else { colors::WHITE };

    let mut x = INNER_X_MIN;
    while x < INNER_X_MAX {
        let color = curb_color((x / CURB_SEGMENT) as usize);
        let x2 = x + CURB_SEGMENT;
        shapes::line(out, Vec2::new(x, INNER_Y_MIN), Vec2::new(x2, INNER_Y_MIN), 2.0, color);
        shapes::line(out, Vec2::new(x, INNER_Y_MAX), Vec2::new(x2, INNER_Y_MAX), 2.0, color);
        x = x2;
    }
    let mut y = INNER_Y_MIN;
    while y < INNER_Y_MAX {
        let color = curb_color((y / CURB_SEGMENT) as usize);
        let y2 = y + CURB_SEGMENT;
        shapes::line(out, Vec2::new(INNER_X_MIN, y), Vec2::new(INNER_X_MIN, y2), 2.0, color);
        shapes::line(out, Vec2::new(INNER_X_MAX, y), Vec2::new(INNER_X_MAX, y2), 2.0, color);
        y = y2;
    }

    // Dashed center divider
    let center_x = (TRACK_X_MIN + TRACK_X_MAX) / 2.0;
    let mut y = INNER_Y_MIN + 10.0;
    while y < TRACK_Y_MAX {
        let (a, b) = (Vec2::new(center_x, y), Vec2::new(center_x, y + 15.0));
        shapes::line(out, a, b, 1.5, colors::YELLOW);
        y += 30.0;
    }

    // Checkered start line on the inner bottom edge
    const CELL: f32 = 5.0;
    let (cells_x, cells_y) = (8, 8);
    for cx in 0..cells_x {
        for cy in 0..cells_y {
            let min = Vec2::new(
                center_x - 20.0 + cx as f32 * CELL,
                INNER_Y_MIN + cy as f32 * CELL,
            );
            let color = if (cx + cy) % 2 == 0 { colors::BLACK } else { colors::WHITE };
            shapes::rect(out, min, min + CELL, color);
        }
    }
}

fn draw_scenery(out: &mut Vec<Vertex>) {
    // Stands above the track
    shapes::polygon(
        out,
        &[
            Vec2::new(100.0, 500.0),
            Vec2::new(700.0, 500.0),
            Vec2::new(750.0, 580.0),
            Vec2::new(50.0, 580.0),
        ],
        colors::STAND_BASE,
    );
    shapes::polygon(
        out,
        &[
            Vec2::new(120.0, 510.0),
            Vec2::new(680.0, 510.0),
            Vec2::new(720.0, 570.0),
            Vec2::new(80.0, 570.0),
        ],
        colors::SEATS,
    );

    // Pit building with four windows
    shapes::rect(out, Vec2::new(40.0, 180.0), Vec2::new(110.0, 320.0), colors::PIT_BUILDING);
    for i in 0..4 {
        let y = 190.0 + i as f32 * 30.0;
        shapes::rect(out, Vec2::new(50.0, y), Vec2::new(100.0, y + 20.0), colors::WINDOW_GLASS);
    }

    // Trees down the right side
    for i in 0..4 {
        let base = Vec2::new(720.0, 150.0 + i as f32 * 100.0);
        let (trunk_min, trunk_max) = (base + Vec2::new(-6.0, -25.0), base + Vec2::new(6.0, 10.0));
        shapes::rect(out, trunk_min, trunk_max, colors::TREE_TRUNK);

        let leaves = [
            (Vec2::new(0.0, 32.0), 20.0),
            (Vec2::new(-15.0, 30.0), 18.0),
            (Vec2::new(15.0, 30.0), 18.0),
        ];
        for (offset, r) in leaves {
            shapes::circle(out, base + offset, r, colors::TREE_LEAVES, CIRCLE_SEGMENTS);
            shapes::ring(out, base + offset, r - 1.0, r, colors::BLACK, CIRCLE_SEGMENTS);
        }
    }

    shapes::circle(out, Vec2::new(60.0, 540.0), 30.0, colors::SUN, CIRCLE_SEGMENTS);
}

/// Targets, tank and bullets for one frame, with the view effects applied
pub fn dynamic_scene(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(1024);

    for &(center, radius) in &snapshot.targets {
        shapes::circle(&mut out, center, radius, colors::TARGET, CIRCLE_SEGMENTS);
        let outline = colors::TARGET_OUTLINE;
        shapes::ring(&mut out, center, radius - 1.5, radius, outline, CIRCLE_SEGMENTS);
    }

    out.extend(tank_body(snapshot.tank_pos, snapshot.tank_heading));

    for &pos in &snapshot.bullets {
        shapes::square(&mut out, pos, BULLET_HALF_SIZE, colors::BULLET);
    }

    transform(&mut out, &effects_transform(snapshot.effects));
    out
}

/// Tank model in world space. Built facing local -Y, scaled, rotated
/// counter-clockwise by the heading and moved to `pos`.
pub fn tank_body(pos: Vec2, heading: f32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(512);
    let v = Vec2::new;

    // Shadow
    shapes::polygon(
        &mut out,
        &[
            v(-22.0, -30.0),
            v(22.0, -30.0),
            v(24.0, -20.0),
            v(24.0, 20.0),
            v(22.0, 30.0),
            v(-22.0, 30.0),
            v(-24.0, 20.0),
            v(-24.0, -20.0),
        ],
        colors::TANK_SHADOW,
    );

    // Tracks and wheels
    shapes::rect(&mut out, v(-22.0, -26.0), v(-14.0, 26.0), colors::TANK_TRACKS);
    shapes::rect(&mut out, v(14.0, -26.0), v(22.0, 26.0), colors::TANK_TRACKS);
    for x in [-18.0, 18.0] {
        for y in [-20.0, -5.0, 10.0, 25.0] {
            shapes::ring(&mut out, v(x, y), 3.0, 4.0, colors::TANK_WHEELS, 12);
        }
    }

    // Hull, highlight, armor plate
    shapes::rect(&mut out, v(-14.0, -24.0), v(14.0, 24.0), colors::TANK_HULL);
    shapes::rect(&mut out, v(-14.0, -24.0), v(-8.0, 24.0), colors::TANK_HIGHLIGHT);
    shapes::rect(&mut out, v(-10.0, -14.0), v(10.0, 10.0), colors::TANK_ARMOR);

    // Turret and hatch
    shapes::rect(&mut out, v(-8.0, -6.0), v(8.0, 6.0), colors::TANK_TURRET);
    shapes::rect(&mut out, v(-4.0, -2.0), v(4.0, 2.0), colors::TANK_HATCH);

    // Barrel pointing forward (-Y) with muzzle tip
    shapes::rect(&mut out, v(-2.0, -40.0), v(2.0, -24.0), colors::TANK_BARREL);
    shapes::rect(&mut out, v(-3.0, -43.0), v(3.0, -40.0), colors::TANK_MUZZLE);

    shapes::outline(
        &mut out,
        &[v(-14.0, -24.0), v(14.0, -24.0), v(14.0, 24.0), v(-14.0, 24.0)],
        1.0,
        colors::BLACK,
    );

    let xf =
        Affine2::from_scale_angle_translation(Vec2::splat(TANK_SCALE), heading.to_radians(), pos);
    transform(&mut out, &xf);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn test_snapshot_lists_only_active() {
        let mut state = GameState::new(4);
        state.fire();
        state.targets.slots[2].active = false;

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.bullets.len(), 1);
        assert_eq!(snap.targets.len(), NUM_TARGETS - 1);
        assert_eq!(snap.time_left, 60);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_effects_transform() {
        let p = Vec2::new(100.0, 200.0);

        let none = effects_transform(ViewEffects::default());
        assert!(close(none.transform_point2(p), p));

        let reflect = effects_transform(ViewEffects { reflect: true, shear: false });
        assert!(close(reflect.transform_point2(p), Vec2::new(100.0, 400.0)));

        let shear = effects_transform(ViewEffects { reflect: false, shear: true });
        assert!(close(shear.transform_point2(p), Vec2::new(160.0, 200.0)));

        // Shear uses the unreflected y
        let both = effects_transform(ViewEffects { reflect: true, shear: true });
        assert!(close(both.transform_point2(p), Vec2::new(160.0, 400.0)));
    }

    #[test]
    fn test_tank_barrel_follows_heading() {
        // The muzzle tip sits at local (0, -43) before scaling
        fn tip(verts: &[Vertex]) -> Vec2 {
            verts
                .iter()
                .map(|v| v.pos())
                .max_by(|a, b| a.y.total_cmp(&b.y))
                .unwrap_or_default()
        }

        let facing_up = tank_body(Vec2::new(400.0, 300.0), 180.0);
        let top = tip(&facing_up);
        assert!((top.y - (300.0 + 43.0 * TANK_SCALE)).abs() < 0.1);
    }

    #[test]
    fn test_static_scene_unaffected_by_effects() {
        let scene = static_scene();
        assert!(!scene.is_empty());
        // Background quad covers the window
        assert_eq!(scene[0].pos(), Vec2::ZERO);
    }

    #[test]
    fn test_dynamic_scene_reflects() {
        let mut state = GameState::new(4);
        for t in state.targets.slots.iter_mut() {
            t.active = false;
        }
        state.bullets.spawn(Vec2::new(300.0, 200.0), Vec2::ZERO);

        let mut snap = Snapshot::capture(&state);
        let plain = dynamic_scene(&snap);
        snap.effects.reflect = true;
        let mirrored = dynamic_scene(&snap);

        assert_eq!(plain.len(), mirrored.len());
        for (a, b) in plain.iter().zip(&mirrored) {
            assert!((a.position[1] - (WINDOW_HEIGHT - b.position[1])).abs() < 1e-3);
        }
    }
}
