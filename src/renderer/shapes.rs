//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::DrawState;

/// Width of the outline drawn around every body, in arena pixels
pub const STROKE_WIDTH: f32 = 1.0;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for one body: fill with alpha = highlight, opaque outline
pub fn body(state: &DrawState, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 9) as usize);

    // A fully faded body contributes no fill triangles
    if state.highlight > 0.0 {
        vertices.extend(circle(
            state.pos,
            state.radius,
            state.color.to_rgba(state.highlight),
            segments,
        ));
    }

    let half = STROKE_WIDTH / 2.0;
    vertices.extend(ring(
        state.pos,
        (state.radius - half).max(0.0),
        state.radius + half,
        state.color.to_rgba(1.0),
        segments,
    ));

    vertices
}
