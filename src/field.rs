//! The pointer-reactive particle field.
//!
//! A [`ParticleField`] owns a capped set of 2D particles, advances their
//! physics once per frame via [`tick`](ParticleField::tick), and draws
//! them onto any [`Canvas`] via [`render`](ParticleField::render). The
//! field is fully headless: the host feeds it pointer position and
//! surface dimensions through a [`TickContext`] and decides when frames
//! happen.
//!
//! # Example
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! let mut field = ParticleField::new(FieldConfig::default(), Theme::Dark);
//! field.initialize(1280.0, 720.0);
//!
//! // once per frame:
//! field.tick(&TickContext {
//!     pointer: Some(Vec2::new(400.0, 300.0)),
//!     width: 1280.0,
//!     height: 720.0,
//! });
//! field.render(&mut canvas);
//! ```

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::{Canvas, Color};
use crate::particle::Particle;
use crate::visuals::{self, Theme};

/// Lower bound every particle's opacity is clamped to after a tick.
pub const OPACITY_FLOOR: f32 = 0.2;

/// Upper bound every particle's opacity is clamped to after a tick.
pub const OPACITY_CEIL: f32 = 0.8;

/// Tuning knobs of the field.
///
/// The defaults reproduce the classic ambient-background behavior. The
/// `cap` default of 100 is load-bearing: the connecting-line pass in
/// [`ParticleField::render`] is O(n²) per frame and stays cheap only
/// under a small cap. Raise it and you need a spatial index instead.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Hard upper bound on the particle count.
    pub cap: usize,
    /// Particle count after a quality degradation.
    pub degraded_count: usize,
    /// One particle per this many pixels of surface width.
    pub density_divisor: f32,
    /// Radius (pixels) inside which the pointer affects particles.
    pub pointer_radius: f32,
    /// Scale of the per-tick pointer impulse.
    pub impulse_scale: f32,
    /// Opacity gain per tick at full pointer force.
    pub brighten_rate: f32,
    /// Opacity loss per tick away from the pointer.
    pub decay_rate: f32,
    /// Multiplicative velocity damping applied every tick.
    pub friction: f32,
    /// Pairs closer than this (pixels) get a connecting line.
    pub link_radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cap: 100,
            degraded_count: 30,
            density_divisor: 10.0,
            pointer_radius: 100.0,
            impulse_scale: 0.01,
            brighten_rate: 0.02,
            decay_rate: 0.005,
            friction: 0.99,
            link_radius: 80.0,
        }
    }
}

/// Per-tick inputs, owned by the host and passed in explicitly.
///
/// `pointer` is the most recent pointer position in surface pixels, or
/// `None` when no pointer is over the surface; the tick then behaves as
/// if the pointer were infinitely far away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub pointer: Option<Vec2>,
    pub width: f32,
    pub height: f32,
}

/// A capped set of particles with pointer interaction and a
/// distance-faded connection mesh.
pub struct ParticleField {
    config: FieldConfig,
    theme: Theme,
    particles: Vec<Particle>,
    rng: StdRng,
    degraded: bool,
}

impl ParticleField {
    /// Create an empty field. Call [`initialize`](Self::initialize) (or
    /// [`resize`](Self::resize)) before the first tick.
    pub fn new(config: FieldConfig, theme: Theme) -> Self {
        Self {
            config,
            theme,
            particles: Vec::new(),
            rng: StdRng::from_entropy(),
            degraded: false,
        }
    }

    /// Like [`new`](Self::new) but with a seeded RNG, so spawns are
    /// reproducible.
    pub fn with_seed(config: FieldConfig, theme: Theme, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(config, theme)
        }
    }

    /// Create a field from an explicit particle set, truncated to the
    /// cap. Useful when the caller wants full control over spawns.
    pub fn from_particles(config: FieldConfig, theme: Theme, mut particles: Vec<Particle>) -> Self {
        particles.truncate(config.cap);
        Self {
            particles,
            ..Self::new(config, theme)
        }
    }

    /// Populate a fresh particle set for a surface of the given pixel
    /// dimensions.
    ///
    /// The count is `min(cap, floor(width / density_divisor))`; positions
    /// are uniform over the surface, velocity components uniform in
    /// `[-0.25, 0.25)`, sizes in `[1, 4)`, opacities in `[0.2, 0.7)`,
    /// hues drawn from the current theme's range. A degenerate surface
    /// (zero or negative dimensions) yields an empty set.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.particles.clear();
        if !(width > 0.0 && height > 0.0) {
            return;
        }

        let count = ((width / self.config.density_divisor).floor() as usize).min(self.cap());
        let hues = self.theme.hue_range();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle {
                position: Vec2::new(
                    self.rng.gen_range(0.0..width),
                    self.rng.gen_range(0.0..height),
                ),
                velocity: Vec2::new(
                    self.rng.gen_range(-0.25..0.25),
                    self.rng.gen_range(-0.25..0.25),
                ),
                size: self.rng.gen_range(1.0..4.0),
                opacity: self.rng.gen_range(0.2..0.7),
                hue: self.rng.gen_range(hues.clone()),
            };
            self.particles.push(particle);
        }
    }

    /// Advance every particle by one frame.
    ///
    /// Per particle, in order: integrate position, wrap out-of-bounds
    /// coordinates to the opposite edge, apply the pointer impulse and
    /// opacity response, then damp velocity by the friction factor.
    pub fn tick(&mut self, ctx: &TickContext) {
        for p in &mut self.particles {
            p.position += p.velocity;

            // Wrap to the opposite edge, never bounce.
            if p.position.x < 0.0 {
                p.position.x = ctx.width;
            }
            if p.position.x > ctx.width {
                p.position.x = 0.0;
            }
            if p.position.y < 0.0 {
                p.position.y = ctx.height;
            }
            if p.position.y > ctx.height {
                p.position.y = 0.0;
            }

            let near = ctx.pointer.and_then(|pointer| {
                let to_pointer = pointer - p.position;
                let distance = to_pointer.length();
                (distance < self.config.pointer_radius).then_some((to_pointer, distance))
            });

            match near {
                Some((to_pointer, distance)) => {
                    let force =
                        (self.config.pointer_radius - distance) / self.config.pointer_radius;
                    // The impulse points away from the pointer: particles
                    // scatter while brightening. Kept exactly as the
                    // original arithmetic, sign included.
                    if distance > f32::EPSILON {
                        p.velocity -= to_pointer / distance * force * self.config.impulse_scale;
                    }
                    p.opacity = (p.opacity + force * self.config.brighten_rate).min(OPACITY_CEIL);
                }
                None => {
                    p.opacity = (p.opacity - self.config.decay_rate).max(OPACITY_FLOOR);
                }
            }

            p.velocity *= self.config.friction;
        }
    }

    /// Draw the field: one filled circle per particle, then a line for
    /// every unordered pair closer than the link radius, its alpha
    /// fading linearly to zero at the radius.
    ///
    /// The pair pass is O(n²); see [`FieldConfig::cap`].
    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear();

        for (i, p) in self.particles.iter().enumerate() {
            canvas.fill_circle(
                p.position,
                p.size,
                Color::hsla(p.hue, visuals::SATURATION, visuals::LIGHTNESS, p.opacity),
            );

            for other in &self.particles[i + 1..] {
                let distance = p.position.distance(other.position);
                if distance < self.config.link_radius {
                    let alpha = (self.config.link_radius - distance) / self.config.link_radius
                        * visuals::LINK_ALPHA_SCALE;
                    canvas.stroke_line(
                        p.position,
                        other.position,
                        visuals::LINE_WIDTH,
                        Color::hsla(p.hue, visuals::SATURATION, visuals::LIGHTNESS, alpha),
                    );
                }
            }
        }
    }

    /// Re-derive the particle count for the new dimensions and
    /// regenerate the whole set. Equivalent to
    /// [`initialize`](Self::initialize).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    /// Reassign every particle's hue into the new theme's range.
    /// Positions, velocities, sizes and opacities are untouched.
    pub fn retheme(&mut self, theme: Theme) {
        self.theme = theme;
        let hues = theme.hue_range();
        for p in &mut self.particles {
            p.hue = self.rng.gen_range(hues.clone());
        }
    }

    /// Drop to the degraded particle count, permanently.
    ///
    /// Truncates the set and latches the lower cap for the rest of the
    /// session: later resizes regenerate at most
    /// [`FieldConfig::degraded_count`] particles. Idempotent at the
    /// floor, and never reversed even if performance recovers.
    pub fn degrade(&mut self) {
        self.degraded = true;
        self.particles.truncate(self.config.degraded_count);
    }

    /// The particle cap currently in effect.
    pub fn cap(&self) -> usize {
        if self.degraded {
            self.config.cap.min(self.config.degraded_count)
        } else {
            self.config.cap
        }
    }

    /// Whether [`degrade`](Self::degrade) has been applied.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// The current particle set.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The active configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: f32, height: f32) -> ParticleField {
        let mut field = ParticleField::with_seed(FieldConfig::default(), Theme::Light, 7);
        field.initialize(width, height);
        field
    }

    #[test]
    fn test_initialize_derives_count_from_width() {
        assert_eq!(seeded(500.0, 800.0).len(), 50);
        assert_eq!(seeded(4000.0, 800.0).len(), 100); // capped
        assert_eq!(seeded(95.0, 800.0).len(), 9);
    }

    #[test]
    fn test_initialize_spawn_ranges() {
        let field = seeded(1000.0, 600.0);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 1000.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
            assert!(p.velocity.x >= -0.25 && p.velocity.x < 0.25);
            assert!(p.velocity.y >= -0.25 && p.velocity.y < 0.25);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.opacity >= 0.2 && p.opacity < 0.7);
            assert!(p.hue >= 200.0 && p.hue < 260.0);
        }
    }

    #[test]
    fn test_degenerate_surface_is_a_noop() {
        let mut field = ParticleField::with_seed(FieldConfig::default(), Theme::Light, 7);
        field.initialize(0.0, 600.0);
        assert!(field.is_empty());
        field.initialize(800.0, 0.0);
        assert!(field.is_empty());

        // Ticking and rendering an empty field must not panic.
        field.tick(&TickContext {
            pointer: None,
            width: 800.0,
            height: 0.0,
        });
        let mut list = crate::canvas::DrawList::new();
        field.render(&mut list);
        assert_eq!(list.frame().len(), 0);
    }

    #[test]
    fn test_retheme_moves_hues_only() {
        let mut field = seeded(800.0, 600.0);
        let before: Vec<_> = field.particles().to_vec();
        field.retheme(Theme::Dark);
        assert_eq!(field.theme(), Theme::Dark);
        for (p, old) in field.particles().iter().zip(&before) {
            assert!(p.hue >= 260.0 && p.hue < 320.0);
            assert_eq!(p.position, old.position);
            assert_eq!(p.velocity, old.velocity);
            assert_eq!(p.size, old.size);
            assert_eq!(p.opacity, old.opacity);
        }
    }

    #[test]
    fn test_degrade_latches_across_resize() {
        let mut field = seeded(4000.0, 600.0);
        assert_eq!(field.len(), 100);

        field.degrade();
        assert_eq!(field.len(), 30);
        assert!(field.is_degraded());

        field.degrade();
        assert_eq!(field.len(), 30);

        field.resize(4000.0, 600.0);
        assert_eq!(field.len(), 30);
    }

    #[test]
    fn test_from_particles_respects_cap() {
        let particle = Particle {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 1.0,
            opacity: 0.5,
            hue: 220.0,
        };
        let field = ParticleField::from_particles(
            FieldConfig::default(),
            Theme::Light,
            vec![particle; 250],
        );
        assert_eq!(field.len(), 100);
    }
}
