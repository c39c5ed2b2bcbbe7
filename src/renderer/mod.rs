//! Rendering module
//!
//! Backend-agnostic: builds triangle lists of `Vertex` and positioned HUD
//! text from a read-only `Snapshot`. Any GPU or software rasterizer can
//! upload the vertices with `vertex::as_bytes`.

pub mod hud;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::{HudLine, hud_lines};
pub use scene::{Snapshot, dynamic_scene, effects_transform, static_scene, tank_body};
pub use vertex::{Vertex, colors};

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Untransformed background layer
    pub background: Vec<Vertex>,
    /// Targets, tank and bullets with view effects applied
    pub world: Vec<Vertex>,
    pub hud: Vec<HudLine>,
}

impl Frame {
    pub fn build(snapshot: &Snapshot) -> Self {
        Self {
            background: static_scene(),
            world: dynamic_scene(snapshot),
            hud: hud_lines(snapshot),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.background.len() + self.world.len()
    }
}
