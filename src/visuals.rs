//! Visual configuration for the ambient field.
//!
//! This module owns everything about how the field looks, separate from
//! the physics that controls how it moves: the two color themes with
//! their hue ranges, the HSL-to-RGB conversion used when drawing, and
//! the constants of the connecting-line pass.

use std::ops::Range;

/// Saturation used for every particle and link color.
pub const SATURATION: f32 = 0.7;

/// Lightness used for every particle and link color.
pub const LIGHTNESS: f32 = 0.6;

/// Links fade with distance; the computed alpha is scaled down by this
/// factor so the mesh stays subtle.
pub const LINK_ALPHA_SCALE: f32 = 0.2;

/// Link stroke width in pixels.
pub const LINE_WIDTH: f32 = 1.0;

/// Color theme of the field.
///
/// The theme only affects hues and the background; positions and
/// velocities survive a theme change untouched
/// (see [`ParticleField::retheme`](crate::ParticleField::retheme)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Cool blues on a near-white background.
    #[default]
    Light,
    /// Violets and magentas on a deep navy background.
    Dark,
}

impl Theme {
    /// Hue range (degrees) particles are drawn from under this theme.
    pub fn hue_range(self) -> Range<f32> {
        match self {
            Theme::Light => 200.0..260.0,
            Theme::Dark => 260.0..320.0,
        }
    }

    /// Background clear color as linear RGB.
    pub fn background(self) -> [f32; 3] {
        match self {
            Theme::Light => [0.97, 0.98, 0.99],
            Theme::Dark => [0.06, 0.09, 0.16],
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Convert an HSL color to RGB.
///
/// `hue` is in degrees (wrapped into `[0, 360)`), `saturation` and
/// `lightness` in `[0, 1]`. Returns linear RGB components in `[0, 1]`.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(approx(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(approx(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(approx(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsl_desaturated_is_gray() {
        let [r, g, b] = hsl_to_rgb(213.0, 0.0, 0.4);
        assert!((r - 0.4).abs() < 1e-5);
        assert!((r - g).abs() < 1e-5);
        assert!((g - b).abs() < 1e-5);
    }

    #[test]
    fn test_hsl_wraps_hue() {
        assert!(approx(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5)));
        assert!(approx(hsl_to_rgb(-120.0, 1.0, 0.5), hsl_to_rgb(240.0, 1.0, 0.5)));
    }

    #[test]
    fn test_theme_hue_ranges() {
        assert_eq!(Theme::Light.hue_range(), 200.0..260.0);
        assert_eq!(Theme::Dark.hue_range(), 260.0..320.0);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
