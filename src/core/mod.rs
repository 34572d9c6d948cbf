pub mod anim;
pub mod constants;
pub mod palette;
pub mod particles;

pub use palette::{link_color, palette_for, Rgba, Theme};
pub use particles::{particle_count, Particle, ParticleField, Viewport};
