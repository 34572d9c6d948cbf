use super::constants::*;
use super::palette::{palette_for, Rgba, Theme};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Current canvas dimensions in CSS pixels. Refreshed from the window on
/// every resize event; read by spawn bounds and boundary checks.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Particle population for a given viewport width: fewer on narrow screens.
#[inline]
pub fn particle_count(width: f32) -> usize {
    if width < NARROW_VIEWPORT_PX {
        PARTICLES_NARROW
    } else {
        PARTICLES_WIDE
    }
}

/// Displacement pushing a particle away from the pointer. Zero at or beyond
/// the repulsion radius; inside it the magnitude falls off linearly with
/// remaining distance.
#[inline]
pub fn repulsion(pos: Vec2, pointer: Vec2) -> Vec2 {
    let delta = pointer - pos;
    let dist = delta.length();
    if dist >= REPULSE_RADIUS {
        return Vec2::ZERO;
    }
    let angle = delta.y.atan2(delta.x);
    let push = (REPULSE_RADIUS - dist) / REPULSE_DIVISOR;
    Vec2::new(angle.cos() * push, angle.sin() * push)
}

/// One animated entity. Color is resolved from the current theme's palette
/// at creation time and never updated in place; reseeding the field is how
/// a theme change recolors the background.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, viewport: Viewport, theme: Theme) -> Self {
        let palette = palette_for(theme);
        Self {
            pos: Vec2::new(
                rng.gen::<f32>() * viewport.width,
                rng.gen::<f32>() * viewport.height,
            ),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * VELOCITY_SPREAD,
                (rng.gen::<f32>() - 0.5) * VELOCITY_SPREAD,
            ),
            radius: rng.gen::<f32>() * RADIUS_SPAN + RADIUS_MIN,
            color: palette[rng.gen_range(0..palette.len())],
        }
    }

    /// Euler step with a unit time step per frame, elastic reflection at the
    /// viewport edges, then pointer repulsion. Position is not clamped on a
    /// bounce, so a particle may briefly overshoot before reversing.
    pub fn advance(&mut self, viewport: Viewport, pointer: Option<Vec2>) {
        self.pos += self.vel;

        if self.pos.x < 0.0 || self.pos.x > viewport.width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.height {
            self.vel.y = -self.vel.y;
        }

        if let Some(pointer) = pointer {
            self.pos -= repulsion(self.pos, pointer);
        }
    }
}

/// The complete set of animated entities drawn each frame. Exactly one field
/// exists at a time; it is reseeded wholesale at startup, on resize, and on
/// theme toggle.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Discard all particles and spawn a fresh count-determined set under
    /// the given theme's palette.
    pub fn reinitialize(&mut self, viewport: Viewport, theme: Theme) {
        let count = particle_count(viewport.width);
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::spawn(&mut self.rng, viewport, theme)));
    }

    pub fn advance_all(&mut self, viewport: Viewport, pointer: Option<Vec2>) {
        for p in &mut self.particles {
            p.advance(viewport, pointer);
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
