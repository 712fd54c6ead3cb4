//! Per-frame simulation step
//!
//! Bodies are updated one at a time in collection order, and each update
//! sees its neighbours in whatever state they are in at that moment: bodies
//! earlier in the order have already moved this frame, later ones have not.
//! No snapshot is taken.

use super::body::DrawState;
use super::collision::{pair_mut, resolve_collision};
use super::state::World;

/// Receives the drawable state of each body once per step
pub trait DrawSink {
    fn draw(&mut self, state: DrawState);
}

/// Discards everything (headless stepping)
impl DrawSink for () {
    fn draw(&mut self, _state: DrawState) {}
}

/// Collects draw states in step order
impl DrawSink for Vec<DrawState> {
    fn draw(&mut self, state: DrawState) {
        self.push(state);
    }
}

/// Advance body `index` by one step: collision scan, highlight, wall bounce,
/// integration. Emits the body's new draw state to `sink`.
pub fn update_body(world: &mut World, index: usize, sink: &mut impl DrawSink) {
    let reference = world.reference_point();
    let arena = world.arena;
    let config = &world.config;
    let bodies = &mut world.bodies;

    // All-pairs scan against the live collection
    for other in 0..bodies.len() {
        if other == index {
            continue;
        }
        let (body, neighbour) = pair_mut(bodies, index, other);
        if body.overlaps(neighbour) {
            resolve_collision(body, neighbour);
        }
    }

    let body = &mut bodies[index];
    body.update_highlight(reference, config.highlight_radius, config.highlight_step);
    body.bounce_walls(arena, config.gravity, config.friction);
    body.integrate();

    sink.draw(body.draw_state());
}

/// Advance the whole world by one step
pub fn tick(world: &mut World, sink: &mut impl DrawSink) {
    for index in 0..world.bodies.len() {
        update_body(world, index, sink);
    }
    world.time_ticks += 1;
}

impl World {
    /// Advance one step without rendering
    pub fn step(&mut self) {
        tick(self, &mut ());
    }

    /// Advance one step, handing each body's draw state to `sink`
    pub fn step_into(&mut self, sink: &mut impl DrawSink) {
        tick(self, sink);
    }
}
