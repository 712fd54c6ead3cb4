//! Particle Arena - elastically colliding particles in a bounded 2D box
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, world step)
//! - `renderer`: WebGPU rendering of the per-frame draw states
//! - `settings`: Start-up configuration
//! - `error`: Errors for the fallible edges (config, initial placement)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::SimConfig;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Constant added to vertical velocity on steps without a vertical bounce
    pub const GRAVITY: f32 = 0.0;
    /// Velocity multiplier applied on wall bounces (1.0 = perfectly elastic)
    pub const FRICTION: f32 = 1.0;

    /// Radius every body is spawned with, and the reference for mass scaling
    pub const MAX_RADIUS: f32 = 10.0;
    /// Mass of a body whose radius equals `MAX_RADIUS`
    pub const MAX_MASS: f32 = 1.0;

    /// Fixed population size
    pub const POPULATION: usize = 400;

    /// Distance from the reference point within which bodies light up
    pub const HIGHLIGHT_RADIUS: f32 = 100.0;
    /// Highlight change per step
    pub const HIGHLIGHT_STEP: f32 = 0.1;

    /// Per-axis velocity range for freshly spawned bodies (inclusive)
    pub const SPAWN_SPEED: i32 = 3;
    /// Candidate positions tried per body before placement gives up
    pub const PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Arena size used when no window is available (native driver)
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Rotate a vector counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
