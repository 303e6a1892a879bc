//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in viewport pixel space.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{SpriteVertex, Vertex};
use crate::Rect;
use crate::assets::UvRect;

/// Axis-aligned filled rectangle (two triangles)
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Filled circle as a triangle fan unrolled into a list
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let p1 = center + Vec2::new(theta1.cos(), theta1.sin()) * radius;
        let p2 = center + Vec2::new(theta2.cos(), theta2.sin()) * radius;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Textured rectangle. `flip_x` mirrors the texture horizontally.
pub fn textured_quad(rect: &Rect, uv: UvRect, tint: [f32; 4], flip_x: bool) -> [SpriteVertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let [mut u0, v0, mut u1, v1] = uv;
    if flip_x {
        std::mem::swap(&mut u0, &mut u1);
    }
    [
        SpriteVertex::new(l, t, u0, v0, tint),
        SpriteVertex::new(r, t, u1, v0, tint),
        SpriteVertex::new(l, b, u0, v1, tint),
        SpriteVertex::new(l, b, u0, v1, tint),
        SpriteVertex::new(r, t, u1, v0, tint),
        SpriteVertex::new(r, b, u1, v1, tint),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_quad_corners() {
        let verts = quad(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::WHITE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(50.0, 50.0);
        let verts = circle(center, 10.0, colors::COIN, 12);
        assert_eq!(verts.len(), 36);
        for v in &verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_textured_quad_flip() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let normal = textured_quad(&rect, [0.0, 0.0, 0.5, 1.0], colors::WHITE, false);
        let flipped = textured_quad(&rect, [0.0, 0.0, 0.5, 1.0], colors::WHITE, true);
        // Top-left corner samples u0 normally, u1 when flipped
        assert_eq!(normal[0].uv, [0.0, 0.0]);
        assert_eq!(flipped[0].uv, [0.5, 0.0]);
        assert_eq!(normal[0].position, flipped[0].position);
    }
}
