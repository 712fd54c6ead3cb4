//! End-to-end behaviour of a stepping world

use glam::Vec2;
use particle_arena::sim::{Arena, Body, PALETTE, World, resolve_collision};
use particle_arena::{SimConfig, distance};
use proptest::prelude::*;

fn body(pos: Vec2, vel: Vec2, radius: f32) -> Body {
    Body::new(pos, vel, radius, PALETTE[0], 10.0, 1.0)
}

fn lone(pos: Vec2, vel: Vec2, radius: f32, arena: Arena) -> World {
    World::from_bodies(SimConfig::default(), arena, vec![body(pos, vel, radius)])
}

#[test]
fn initial_population_never_overlaps() {
    for seed in [1, 2, 3, 99, 12345] {
        let world = World::new(SimConfig::default(), Arena::new(1024.0, 768.0), seed).unwrap();
        assert_eq!(world.bodies.len(), 400);
        for (i, a) in world.bodies.iter().enumerate() {
            for b in &world.bodies[i + 1..] {
                assert!(
                    distance(a.pos, b.pos) >= 2.0 * a.radius,
                    "seed {seed}: bodies {:?} and {:?} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[test]
fn same_seed_same_world() {
    let arena = Arena::new(640.0, 480.0);
    let mut a = World::new(SimConfig::default(), arena, 4242).unwrap();
    let mut b = World::new(SimConfig::default(), arena, 4242).unwrap();
    a.set_reference_point(Vec2::new(320.0, 240.0));
    b.set_reference_point(Vec2::new(320.0, 240.0));
    for _ in 0..50 {
        a.step();
        b.step();
    }
    assert_eq!(a.bodies, b.bodies);
}

#[test]
fn equal_masses_swap_velocities_head_on() {
    let mut a = Body::with_mass(Vec2::new(46.0, 50.0), Vec2::new(2.0, 0.0), 5.0, 0.5, PALETTE[0]);
    let mut b = Body::with_mass(Vec2::new(54.0, 50.0), Vec2::new(-2.0, 0.0), 5.0, 0.5, PALETTE[1]);
    resolve_collision(&mut a, &mut b);
    assert!((a.vel - Vec2::new(-2.0, 0.0)).length() < 1e-5);
    assert!((b.vel - Vec2::new(2.0, 0.0)).length() < 1e-5);
}

#[test]
fn body_near_left_wall_bounces() {
    let arena = Arena::new(200.0, 200.0);
    let mut world = lone(Vec2::new(5.0, 50.0), Vec2::new(-3.0, 0.0), 10.0, arena);
    world.step();
    assert_eq!(world.bodies[0].vel.x, 3.0);
    assert_eq!(world.bodies[0].pos.x, 8.0);
}

#[test]
fn lone_body_reverses_exactly_at_projected_crossing() {
    let arena = Arena::new(100.0, 100.0);
    let mut world = lone(Vec2::new(50.0, 50.0), Vec2::new(3.0, -2.0), 10.0, arena);

    for _ in 0..200 {
        let before = world.bodies[0].clone();
        world.step();
        let after = &world.bodies[0];

        let crosses_x = before.pos.x + before.radius + before.vel.x > arena.width
            || before.pos.x - before.radius + before.vel.x < 0.0;
        let crosses_y = before.pos.y + before.radius + before.vel.y > arena.height
            || before.pos.y - before.radius + before.vel.y < 0.0;

        let expected_vx = if crosses_x { -before.vel.x } else { before.vel.x };
        let expected_vy = if crosses_y { -before.vel.y } else { before.vel.y };
        assert_eq!(after.vel, Vec2::new(expected_vx, expected_vy));
        assert_eq!(after.pos, before.pos + after.vel);
    }
}

#[test]
fn energy_conserved_in_a_crowded_box() {
    // Equal masses, elastic walls: the step only ever swaps or reflects velocity components
    let config = SimConfig {
        population: 120,
        ..Default::default()
    };
    let mut world = World::new(config, Arena::new(400.0, 300.0), 777).unwrap();
    let e0 = world.kinetic_energy();
    for _ in 0..300 {
        world.step();
    }
    let e1 = world.kinetic_energy();
    assert!((e1 - e0).abs() <= 1e-3 * e0.max(1.0), "energy drifted {e0} -> {e1}");
}

#[test]
fn resize_does_not_move_bodies() {
    let mut world = lone(Vec2::new(150.0, 150.0), Vec2::ZERO, 10.0, Arena::new(200.0, 200.0));
    world.resize(100.0, 100.0);
    assert_eq!(world.bodies[0].pos, Vec2::new(150.0, 150.0));
    world.step();
    // Outside the new bounds the x check fires every step; velocity stays zero
    assert_eq!(world.bodies[0].vel, Vec2::ZERO);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn highlight_stays_in_unit_interval(
        seed in any::<u64>(),
        points in prop::collection::vec((0.0f32..300.0, 0.0f32..300.0), 1..40),
    ) {
        let config = SimConfig { population: 15, ..Default::default() };
        let mut world = World::new(config, Arena::new(300.0, 300.0), seed).unwrap();

        for (x, y) in points {
            world.set_reference_point(Vec2::new(x, y));
            world.step();
            for b in &world.bodies {
                prop_assert!((0.0..=1.0).contains(&b.highlight), "highlight {}", b.highlight);
            }
        }
    }

    #[test]
    fn highlight_moves_by_one_step_per_frame(
        start in 0u8..=10,
        near in any::<bool>(),
    ) {
        let mut b = body(Vec2::new(150.0, 150.0), Vec2::ZERO, 10.0);
        b.highlight = start as f32 / 10.0;
        let mut world = World::from_bodies(SimConfig::default(), Arena::new(300.0, 300.0), vec![b]);
        let point = if near { Vec2::new(150.0, 200.0) } else { Vec2::new(0.0, 0.0) };
        world.set_reference_point(point);

        let before = world.bodies[0].highlight;
        world.step();
        let after = world.bodies[0].highlight;

        let expected = if near { (before + 0.1).min(1.0) } else { (before - 0.1).max(0.0) };
        prop_assert!((after - expected).abs() < 1e-6);
    }
}
