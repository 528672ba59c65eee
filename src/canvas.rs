//! The drawing surface abstraction.
//!
//! The field only needs three primitives: clear, filled circle, stroked
//! line. Anything implementing [`Canvas`] can host it: the wgpu-backed
//! [`FrameCanvas`](crate::gpu::FrameCanvas) in the viewer, or the
//! [`DrawList`] recorder when no real surface exists (tests, headless
//! runs, benchmarks).

use glam::Vec2;

use crate::visuals::hsl_to_rgb;

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Build a color from HSL plus alpha.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let [r, g, b] = hsl_to_rgb(hue, saturation, lightness);
        Self { r, g, b, a: alpha }
    }

    /// Components as an array, handy for vertex data.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A 2D raster surface the field draws onto.
///
/// Coordinates are in pixels with the origin at the top-left.
/// Implementations must not fail; a surface that cannot draw simply
/// ignores the calls.
pub trait Canvas {
    /// Discard everything drawn since the last clear.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a stroked line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

/// A recorded drawing command, as captured by [`DrawList`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

/// A [`Canvas`] that records commands instead of rasterizing them.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since creation, including clears.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands recorded after the most recent clear.
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}
