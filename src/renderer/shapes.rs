//! Shape generation for 2D primitives
//!
//! Every function appends a triangle list to `out`.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Axis-aligned rectangle from two corners
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    quad(
        out,
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
        color,
    );
}

/// Rectangle centered on a point
pub fn square(out: &mut Vec<Vertex>, center: Vec2, half_size: f32, color: [f32; 4]) {
    rect(out, center - half_size, center + half_size, color);
}

/// Four corners in winding order
pub fn quad(out: &mut Vec<Vertex>, corners: [Vec2; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    out.extend_from_slice(&[
        Vertex::at(a, color),
        Vertex::at(b, color),
        Vertex::at(c, color),
        Vertex::at(c, color),
        Vertex::at(d, color),
        Vertex::at(a, color),
    ]);
}

/// Convex polygon, fan-triangulated from the first point
pub fn polygon(out: &mut Vec<Vertex>, points: &[Vec2], color: [f32; 4]) {
    if points.len() < 3 {
        return;
    }
    for pair in points[1..].windows(2) {
        out.push(Vertex::at(points[0], color));
        out.push(Vertex::at(pair[0], color));
        out.push(Vertex::at(pair[1], color));
    }
}

/// Filled circle
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    let segments = segments.max(3);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        out.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }
}

/// Hollow circle between two radii
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    let segments = segments.max(3);
    for i in 0..segments {
        let dir1 = Vec2::from_angle((i as f32 / segments as f32) * TAU);
        let dir2 = Vec2::from_angle(((i + 1) as f32 / segments as f32) * TAU);

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        quad(out, [inner1, outer1, outer2, inner2], color);
    }
}

/// Thick line segment
pub fn line(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, width: f32, color: [f32; 4]) {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = dir.perp() * (width * 0.5);
    quad(out, [a + perp, b + perp, b - perp, a - perp], color);
}

/// Closed outline through the given points
pub fn outline(out: &mut Vec<Vertex>, points: &[Vec2], width: f32, color: [f32; 4]) {
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        line(out, a, b, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::ZERO, Vec2::new(2.0, 1.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        assert!(out.iter().all(|v| {
            let p = v.pos();
            (0.0..=2.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
        }));
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let mut out = Vec::new();
        let center = Vec2::new(400.0, 300.0);
        circle(&mut out, center, 15.0, [1.0; 4], 24);
        assert_eq!(out.len(), 24 * 3);
        assert!(out.iter().all(|v| v.pos().distance(center) <= 15.0 + 1e-3));
    }

    #[test]
    fn test_ring_band() {
        let mut out = Vec::new();
        ring(&mut out, Vec2::ZERO, 14.0, 16.0, [1.0; 4], 16);
        assert_eq!(out.len(), 16 * 6);
        assert!(out.iter().all(|v| {
            let r = v.pos().length();
            r > 13.99 && r < 16.01
        }));
    }

    #[test]
    fn test_polygon_fan() {
        let mut out = Vec::new();
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-0.5, 0.5),
        ];
        polygon(&mut out, &pts, [1.0; 4]);
        assert_eq!(out.len(), 9);

        let mut none = Vec::new();
        polygon(&mut none, &pts[..2], [1.0; 4]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_degenerate_line_skipped() {
        let mut out = Vec::new();
        line(&mut out, Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]);
        assert!(out.is_empty());
    }
}
