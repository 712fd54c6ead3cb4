//! World state and arena bounds
//!
//! The world owns every body plus the shared context the old global
//! variables used to hold: arena size, reference point and physics config.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, DrawState};
use super::spawn::spawn_bodies;
use crate::error::Result;
use crate::settings::SimConfig;

/// Rectangular simulation bounds, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Placement seed for reproducibility
    pub seed: u64,
    pub config: SimConfig,
    pub arena: Arena,
    /// Bodies in fixed iteration order
    pub bodies: Vec<Body>,
    /// Pointer location driving the highlight (None until the first move)
    reference_point: Option<Vec2>,
    /// Steps taken so far
    pub time_ticks: u64,
}

impl World {
    /// Create a world and place `config.population` bodies with the given seed
    pub fn new(config: SimConfig, arena: Arena, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let bodies = spawn_bodies(&config, arena, &mut rng)?;

        log::info!(
            "World created: {} bodies in {}x{} arena (seed {})",
            bodies.len(),
            arena.width,
            arena.height,
            seed
        );

        Ok(Self::from_bodies(config, arena, bodies).with_seed(seed))
    }

    /// Create a world from an explicit body list
    pub fn from_bodies(config: SimConfig, arena: Arena, bodies: Vec<Body>) -> Self {
        Self {
            seed: config.seed.unwrap_or(0),
            config,
            arena,
            bodies,
            reference_point: None,
            time_ticks: 0,
        }
    }

    fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn reference_point(&self) -> Option<Vec2> {
        self.reference_point
    }

    /// Move the shared reference point (pointer location)
    pub fn set_reference_point(&mut self, point: Vec2) {
        self.reference_point = Some(point);
    }

    pub fn clear_reference_point(&mut self) {
        self.reference_point = None;
    }

    /// Change the arena bounds. Bodies are not moved; ones left outside are
    /// steered back by the wall bounce over the following steps.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!(
            "Arena resized: {}x{} -> {}x{}",
            self.arena.width,
            self.arena.height,
            width,
            height
        );
        self.arena = Arena::new(width, height);
    }

    /// Reset trigger. Intentionally does nothing: bodies persist for the
    /// lifetime of the world.
    pub fn reset(&mut self) {
        log::debug!("Reset requested at tick {} (ignored)", self.time_ticks);
    }

    /// Sum of kinetic energies
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Total linear momentum
    pub fn momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn draw_states(&self) -> impl Iterator<Item = DrawState> + '_ {
        self.bodies.iter().map(Body::draw_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::PALETTE;

    fn small_config() -> SimConfig {
        SimConfig {
            population: 20,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_world_places_population() {
        let world = World::new(small_config(), Arena::new(400.0, 300.0), 12345).unwrap();
        assert_eq!(world.bodies.len(), 20);
        assert_eq!(world.seed, 12345);
        assert_eq!(world.time_ticks, 0);
        assert_eq!(world.reference_point(), None);
    }

    #[test]
    fn test_new_world_rejects_invalid_config() {
        let config = SimConfig {
            max_mass: 0.0,
            ..small_config()
        };
        assert!(World::new(config, Arena::new(400.0, 300.0), 1).is_err());
    }

    #[test]
    fn test_reference_point_setters() {
        let arena = Arena::new(100.0, 100.0);
        let mut world = World::from_bodies(SimConfig::default(), arena, Vec::new());
        world.set_reference_point(Vec2::new(3.0, 4.0));
        assert_eq!(world.reference_point(), Some(Vec2::new(3.0, 4.0)));
        world.clear_reference_point();
        assert_eq!(world.reference_point(), None);
    }

    #[test]
    fn test_resize_keeps_bodies_in_place() {
        let body = Body::with_mass(Vec2::new(150.0, 80.0), Vec2::ZERO, 10.0, 1.0, PALETTE[1]);
        let arena = Arena::new(200.0, 200.0);
        let mut world = World::from_bodies(SimConfig::default(), arena, vec![body]);
        world.resize(100.0, 50.0);
        assert_eq!(world.arena, Arena::new(100.0, 50.0));
        assert_eq!(world.bodies[0].pos, Vec2::new(150.0, 80.0));
    }

    #[test]
    fn test_reset_is_a_noop() {
        let mut world = World::new(small_config(), Arena::new(400.0, 300.0), 9).unwrap();
        let before = world.bodies.clone();
        world.reset();
        assert_eq!(world.bodies, before);
    }

    #[test]
    fn test_totals() {
        let a = Body::with_mass(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0, 2.0, PALETTE[0]);
        let b = Body::with_mass(Vec2::new(50.0, 0.0), Vec2::new(0.0, -2.0), 5.0, 1.0, PALETTE[0]);
        let world = World::from_bodies(SimConfig::default(), Arena::new(100.0, 100.0), vec![a, b]);
        assert_eq!(world.momentum(), Vec2::new(2.0, -2.0));
        assert!((world.kinetic_energy() - 3.0).abs() < 1e-6);
        assert_eq!(world.draw_states().count(), 2);
    }

    #[test]
    fn test_world_serializes() {
        let world = World::new(small_config(), Arena::new(400.0, 300.0), 5).unwrap();
        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bodies, world.bodies);
        assert_eq!(back.arena, world.arena);
    }
}
