//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, Vec2};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }
}

/// Apply an affine transform to every vertex in place
pub fn transform(vertices: &mut [Vertex], xf: &Affine2) {
    for v in vertices {
        v.position = xf.transform_point2(v.pos()).into();
    }
}

/// Raw bytes for uploading to a vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const GRASS: [f32; 4] = [0.10, 0.45, 0.10, 1.0];
    pub const ASPHALT: [f32; 4] = [0.12, 0.12, 0.12, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const RED_CURB: [f32; 4] = [0.9, 0.2, 0.2, 1.0];

    pub const STAND_BASE: [f32; 4] = [0.25, 0.25, 0.30, 1.0];
    pub const SEATS: [f32; 4] = [0.50, 0.60, 0.90, 1.0];
    pub const PIT_BUILDING: [f32; 4] = [0.40, 0.40, 0.45, 1.0];
    pub const WINDOW_GLASS: [f32; 4] = [0.55, 0.75, 0.95, 1.0];
    pub const TREE_TRUNK: [f32; 4] = [0.40, 0.20, 0.0, 1.0];
    pub const TREE_LEAVES: [f32; 4] = [0.0, 0.60, 0.0, 1.0];
    pub const SUN: [f32; 4] = [1.0, 0.90, 0.0, 1.0];

    // Desert tank
    pub const TANK_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const TANK_TRACKS: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
    pub const TANK_WHEELS: [f32; 4] = [0.70, 0.70, 0.70, 1.0];
    pub const TANK_HULL: [f32; 4] = [0.65, 0.55, 0.30, 1.0];
    pub const TANK_HIGHLIGHT: [f32; 4] = [0.75, 0.65, 0.40, 1.0];
    pub const TANK_ARMOR: [f32; 4] = [0.50, 0.40, 0.20, 1.0];
    pub const TANK_TURRET: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
    pub const TANK_HATCH: [f32; 4] = [0.45, 0.55, 0.65, 0.75];
    pub const TANK_BARREL: [f32; 4] = [0.20, 0.20, 0.22, 1.0];
    pub const TANK_MUZZLE: [f32; 4] = [0.90, 0.90, 0.75, 1.0];

    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TARGET: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
    pub const TARGET_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::WHITE); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }

    #[test]
    fn test_transform_translates() {
        let mut verts = [Vertex::new(1.0, 2.0, colors::WHITE)];
        transform(&mut verts, &Affine2::from_translation(Vec2::new(10.0, 20.0)));
        assert_eq!(verts[0].position, [11.0, 22.0]);
    }
}
