// Host-side tests for the pure particle logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod palette {
    include!("../src/core/palette.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use palette::{Theme, DARK_PALETTE, LIGHT_PALETTE};
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn vp(width: f32, height: f32) -> Viewport {
    Viewport::new(width, height)
}

#[test]
fn particle_count_tracks_viewport_width() {
    assert_eq!(particle_count(0.0), 50);
    assert_eq!(particle_count(320.0), 50);
    assert_eq!(particle_count(599.9), 50);
    assert_eq!(particle_count(600.0), 120);
    assert_eq!(particle_count(1920.0), 120);
}

#[test]
fn spawn_stays_within_creation_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let viewport = vp(800.0, 600.0);
    for _ in 0..500 {
        let p = Particle::spawn(&mut rng, viewport, Theme::Light);
        assert!(p.pos.x >= 0.0 && p.pos.x <= viewport.width);
        assert!(p.pos.y >= 0.0 && p.pos.y <= viewport.height);
        assert!(p.vel.x >= -0.75 && p.vel.x <= 0.75);
        assert!(p.vel.y >= -0.75 && p.vel.y <= 0.75);
        assert!(p.radius >= 1.0 && p.radius < 4.0);
        assert!(LIGHT_PALETTE.contains(&p.color));
    }
}

#[test]
fn spawn_uses_palette_of_requested_theme() {
    let mut rng = StdRng::seed_from_u64(8);
    let viewport = vp(800.0, 600.0);
    for _ in 0..100 {
        let p = Particle::spawn(&mut rng, viewport, Theme::Dark);
        assert!(DARK_PALETTE.contains(&p.color));
    }
}

#[test]
fn advance_bounces_off_right_edge() {
    let viewport = vp(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(799.9, 300.0),
        vel: Vec2::new(0.5, 0.0),
        radius: 2.0,
        color: LIGHT_PALETTE[0],
    };
    p.advance(viewport, None);
    // Position overshoots the edge, velocity flips; no clamping.
    assert!(p.pos.x > viewport.width);
    assert_eq!(p.vel.x, -0.5);
    assert_eq!(p.vel.y, 0.0);
}

#[test]
fn advance_bounces_off_top_edge() {
    let viewport = vp(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(400.0, 0.1),
        vel: Vec2::new(0.0, -0.3),
        radius: 2.0,
        color: LIGHT_PALETTE[1],
    };
    p.advance(viewport, None);
    assert!(p.pos.y < 0.0);
    assert_eq!(p.vel.y, 0.3);
}

#[test]
fn advance_in_interior_keeps_velocity() {
    let viewport = vp(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(400.0, 300.0),
        vel: Vec2::new(0.6, -0.4),
        radius: 2.0,
        color: LIGHT_PALETTE[2],
    };
    p.advance(viewport, None);
    assert!((p.pos.x - 400.6).abs() < 1e-3);
    assert!((p.pos.y - 299.6).abs() < 1e-3);
    assert_eq!(p.vel, Vec2::new(0.6, -0.4));
}

#[test]
fn repulsion_is_zero_at_and_beyond_radius() {
    let pos = Vec2::new(100.0, 100.0);
    assert_eq!(repulsion(pos, Vec2::new(250.0, 100.0)), Vec2::ZERO);
    assert_eq!(repulsion(pos, Vec2::new(500.0, 500.0)), Vec2::ZERO);
}

#[test]
fn repulsion_magnitude_follows_linear_falloff() {
    let pos = Vec2::new(100.0, 100.0);
    for dist in [10.0_f32, 50.0, 100.0, 149.0] {
        let push = repulsion(pos, Vec2::new(100.0 + dist, 100.0));
        let expected = (150.0 - dist) / 20.0;
        assert!((push.length() - expected).abs() < 1e-3, "dist {dist}");
        // Push points from pointer toward the particle side once applied
        // (advance subtracts it), so here it points at the pointer.
        assert!(push.x > 0.0);
        assert!(push.y.abs() < 1e-3);
    }
}

#[test]
fn advance_moves_particle_away_from_pointer() {
    let viewport = vp(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(400.0, 300.0),
        vel: Vec2::ZERO,
        radius: 2.0,
        color: LIGHT_PALETTE[0],
    };
    p.advance(viewport, Some(Vec2::new(450.0, 300.0)));
    // Pointer sits 50px to the right; push = (150-50)/20 = 5 to the left.
    assert!((p.pos.x - 395.0).abs() < 1e-3);
    assert!((p.pos.y - 300.0).abs() < 1e-3);
}

#[test]
fn advance_without_pointer_is_pure_integration() {
    let viewport = vp(800.0, 600.0);
    let mut p = Particle {
        pos: Vec2::new(400.0, 300.0),
        vel: Vec2::ZERO,
        radius: 2.0,
        color: LIGHT_PALETTE[0],
    };
    p.advance(viewport, None);
    assert_eq!(p.pos, Vec2::new(400.0, 300.0));
}

#[test]
fn reinitialize_sizes_field_to_viewport() {
    let mut field = ParticleField::new(42);
    assert!(field.is_empty());

    field.reinitialize(vp(500.0, 700.0), Theme::Light);
    assert_eq!(field.len(), 50);

    field.reinitialize(vp(1280.0, 720.0), Theme::Light);
    assert_eq!(field.len(), 120);

    // Shrinking back discards the old set wholesale.
    field.reinitialize(vp(400.0, 700.0), Theme::Light);
    assert_eq!(field.len(), 50);
}

#[test]
fn reinitialize_on_theme_change_recolors_from_new_palette() {
    let mut field = ParticleField::new(42);
    field.reinitialize(vp(800.0, 600.0), Theme::Dark);
    for p in &field.particles {
        assert!(DARK_PALETTE.contains(&p.color));
    }
    field.reinitialize(vp(800.0, 600.0), Theme::Light);
    for p in &field.particles {
        assert!(LIGHT_PALETTE.contains(&p.color));
    }
}

#[test]
fn advance_all_touches_every_particle() {
    let mut field = ParticleField::new(1);
    field.reinitialize(vp(800.0, 600.0), Theme::Light);
    let before: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();
    field.advance_all(vp(800.0, 600.0), None);
    let moved = field
        .particles
        .iter()
        .zip(&before)
        .filter(|(p, old)| p.pos != **old)
        .count();
    // Velocities are random but a zero vector on every axis is vanishingly
    // unlikely; expect essentially all particles to have moved.
    assert!(moved >= field.len() - 1);
}
