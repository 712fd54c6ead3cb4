//! Per-frame vertex assembly
//!
//! `FrameBuilder` is the simulation's draw sink: the world hands it each
//! body's state during a step and it tessellates them into one vertex list.

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{DrawSink, DrawState};

/// Segments per body circle
pub const CIRCLE_SEGMENTS: u32 = 24;

#[derive(Debug, Default)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
    bodies: usize,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.bodies = 0;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Bodies drawn since the last clear
    pub fn body_count(&self) -> usize {
        self.bodies
    }
}

impl DrawSink for FrameBuilder {
    fn draw(&mut self, state: DrawState) {
        self.vertices.extend(shapes::body(&state, CIRCLE_SEGMENTS));
        self.bodies += 1;
    }
}
