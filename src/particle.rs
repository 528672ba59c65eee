//! The particle type simulated by [`ParticleField`](crate::ParticleField).

use glam::Vec2;

/// A single point in the ambient field.
///
/// Particles are created in a batch by the field and never destroyed
/// individually; the whole set is replaced on resize or quality
/// degradation. `size` is fixed at spawn, everything else mutates
/// every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in surface pixels, kept inside `[0, width] x [0, height]`
    /// by wrap-around.
    pub position: Vec2,
    /// Velocity in pixels per tick, damped multiplicatively every tick.
    pub velocity: Vec2,
    /// Draw radius in pixels, constant after spawn.
    pub size: f32,
    /// Draw alpha, clamped to `[0.2, 0.8]` after every tick.
    pub opacity: f32,
    /// HSL hue in degrees, reassigned on theme change.
    pub hue: f32,
}

impl Particle {
    /// Speed of this particle in pixels per tick.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
