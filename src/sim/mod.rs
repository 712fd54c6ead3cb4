//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One discrete step per frame, velocities in pixels per step
//! - Seeded RNG only (initial placement)
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, DrawState, PALETTE, Rgb};
pub use collision::{approaching, elastic_exchange, resolve_collision};
pub use spawn::spawn_bodies;
pub use state::{Arena, World};
pub use tick::{DrawSink, tick, update_body};
