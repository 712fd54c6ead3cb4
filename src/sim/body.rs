//! A single simulated particle
//!
//! Bodies are plain data. The per-step pieces (highlight, wall bounce,
//! integration) live here as methods; the collision scan that needs the
//! whole population lives in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Arena;
use crate::distance;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Normalized RGBA for GPU upload
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            alpha,
        ]
    }
}

/// Colors bodies are spawned with
pub const PALETTE: [Rgb; 2] = [Rgb(200, 70, 190), Rgb(30, 178, 215)];

/// What the renderer needs to draw one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    /// Fill alpha in [0, 1]
    pub highlight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Debug tag, no effect on physics
    pub id: Option<u32>,
    pub pos: Vec2,
    /// Displacement per step
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// Fill intensity, always within [0, 1]
    pub highlight: f32,
    pub color: Rgb,
}

impl Body {
    /// Create a body whose mass scales linearly with radius:
    /// `max_mass * radius / max_radius`
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        color: Rgb,
        max_radius: f32,
        max_mass: f32,
    ) -> Self {
        Self::with_mass(pos, vel, radius, max_mass * radius / max_radius, color)
    }

    /// Create a body with an explicit mass
    pub fn with_mass(pos: Vec2, vel: Vec2, radius: f32, mass: f32, color: Rgb) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive");
        Self {
            id: None,
            pos,
            vel,
            radius,
            mass,
            highlight: 0.0,
            color,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Fade the highlight in while `reference` is within `trigger_radius`,
    /// out otherwise. An unset reference leaves the highlight untouched.
    pub fn update_highlight(&mut self, reference: Option<Vec2>, trigger_radius: f32, step: f32) {
        let Some(reference) = reference else {
            return;
        };
        if distance(self.pos, reference) < trigger_radius {
            self.highlight = (self.highlight + step).min(1.0);
        } else {
            self.highlight = (self.highlight - step).max(0.0);
        }
    }

    /// Reverse velocity components whose projected next position leaves the
    /// arena. Gravity accrues only on steps without a vertical bounce, and a
    /// vertical bounce also scales `vel.x` by `friction`.
    pub fn bounce_walls(&mut self, arena: Arena, gravity: f32, friction: f32) {
        let Vec2 { x, y } = self.pos;
        let r = self.radius;

        if x + r + self.vel.x > arena.width || x - r + self.vel.x < 0.0 {
            self.vel.x = -(self.vel.x * friction);
        }

        if y + r + self.vel.y > arena.height || y - r + self.vel.y < 0.0 {
            self.vel.y = -(self.vel.y * friction);
            self.vel.x *= friction;
        } else {
            self.vel.y += gravity;
        }
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        distance(self.pos, other.pos) - self.radius - other.radius < 0.0
    }

    pub fn draw_state(&self) -> DrawState {
        DrawState {
            pos: self.pos,
            radius: self.radius,
            color: self.color,
            highlight: self.highlight,
        }
    }

    /// 1/2 m |v|^2
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }
}
