//! Initial placement of the population
//!
//! Rejection sampling: each candidate position is redrawn until it keeps at
//! least two radii from every body placed before it.

use glam::Vec2;
use rand::Rng;

use super::body::{Body, PALETTE};
use super::state::Arena;
use crate::consts::{PLACEMENT_ATTEMPTS, SPAWN_SPEED};
use crate::distance;
use crate::error::{Error, Result};
use crate::settings::SimConfig;

/// Spawn `config.population` non-overlapping bodies of radius
/// `config.max_radius` with integer positions and velocities.
pub fn spawn_bodies<R: Rng>(
    config: &SimConfig,
    arena: Arena,
    rng: &mut R,
) -> Result<Vec<Body>> {
    let requested = config.population;
    let radius = config.max_radius;
    let mut bodies: Vec<Body> = Vec::with_capacity(requested);

    if requested == 0 {
        return Ok(bodies);
    }

    // Integer centers that keep the whole body inside the arena
    let x_range = (radius.ceil() as i64, (arena.width - radius).floor() as i64);
    let y_range = (radius.ceil() as i64, (arena.height - radius).floor() as i64);
    if x_range.0 > x_range.1 || y_range.0 > y_range.1 {
        return Err(Error::Placement { placed: 0, requested });
    }

    let mut retries = 0u64;
    for i in 0..requested {
        let pos = place_one(&bodies, radius, x_range, y_range, rng, &mut retries).ok_or_else(
            || Error::Placement {
                placed: bodies.len(),
                requested,
            },
        )?;

        let vel = Vec2::new(
            rng.random_range(-SPAWN_SPEED..=SPAWN_SPEED) as f32,
            rng.random_range(-SPAWN_SPEED..=SPAWN_SPEED) as f32,
        );
        let color = PALETTE[rng.random_range(0..PALETTE.len())];

        let body = Body::new(pos, vel, radius, color, config.max_radius, config.max_mass);
        bodies.push(body.with_id(i as u32));
    }

    log::debug!("Placed {} bodies after {} rejected candidates", bodies.len(), retries);
    Ok(bodies)
}

/// Draw candidates until one clears every placed body, or give up
fn place_one<R: Rng>(
    placed: &[Body],
    radius: f32,
    x_range: (i64, i64),
    y_range: (i64, i64),
    rng: &mut R,
    retries: &mut u64,
) -> Option<Vec2> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(x_range.0..=x_range.1) as f32,
            rng.random_range(y_range.0..=y_range.1) as f32,
        );
        if placed.iter().all(|b| distance(candidate, b.pos) >= 2.0 * radius) {
            return Some(candidate);
        }
        *retries += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config(population: usize) -> SimConfig {
        SimConfig {
            population,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_full_population_without_overlap() {
        let mut rng = Pcg32::seed_from_u64(42);
        let arena = Arena::new(800.0, 600.0);
        let bodies = spawn_bodies(&config(400), arena, &mut rng).unwrap();

        assert_eq!(bodies.len(), 400);
        for (i, a) in bodies.iter().enumerate() {
            assert_eq!(a.id, Some(i as u32));
            assert!(a.pos.x >= a.radius && a.pos.x <= arena.width - a.radius);
            assert!(a.pos.y >= a.radius && a.pos.y <= arena.height - a.radius);
            assert!(a.vel.x.abs() <= 3.0 && a.vel.y.abs() <= 3.0);
            assert_eq!(a.vel.x.fract(), 0.0);
            assert!(PALETTE.contains(&a.color));
            assert_eq!(a.highlight, 0.0);
            for b in &bodies[i + 1..] {
                assert!(distance(a.pos, b.pos) >= 2.0 * a.radius);
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let arena = Arena::new(300.0, 300.0);
        let a = spawn_bodies(&config(30), arena, &mut Pcg32::seed_from_u64(7)).unwrap();
        let b = spawn_bodies(&config(30), arena, &mut Pcg32::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_fails_when_arena_too_small() {
        let mut rng = Pcg32::seed_from_u64(1);
        let err = spawn_bodies(&config(3), Arena::new(15.0, 100.0), &mut rng).unwrap_err();
        assert!(matches!(err, Error::Placement { placed: 0, requested: 3 }));
    }

    #[test]
    fn test_spawn_gives_up_when_population_cannot_fit() {
        // A 40x40 arena fits at most a handful of radius-10 bodies
        let mut rng = Pcg32::seed_from_u64(3);
        let err = spawn_bodies(&config(50), Arena::new(40.0, 40.0), &mut rng).unwrap_err();
        match err {
            Error::Placement { placed, requested } => {
                assert!(placed > 0 && placed < 50);
                assert_eq!(requested, 50);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_spawn_empty_population() {
        let mut rng = Pcg32::seed_from_u64(0);
        let bodies = spawn_bodies(&config(0), Arena::new(0.0, 0.0), &mut rng).unwrap();
        assert!(bodies.is_empty());
    }
}
