//! Pointer state for the viewer.
//!
//! [`PointerTracker`] folds window events into the one fact the field
//! cares about: where the pointer is, if it is over the surface at all.
//! [`CursorTrail`] keeps the short fading tail of recent pointer
//! positions that the viewer draws on top of the field.

use glam::Vec2;
use winit::dpi::PhysicalPosition;

/// Most recent pointer position over the surface, or none.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a cursor-moved event.
    pub fn moved(&mut self, position: PhysicalPosition<f64>) {
        self.position = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    /// Handle the cursor leaving the window.
    pub fn left(&mut self) {
        self.position = None;
    }

    /// The pointer position in surface pixels, `None` while the pointer
    /// is outside the window.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

/// Opacity multiplier applied to every trail point on each move.
const TRAIL_OPACITY_DECAY: f32 = 0.9;
/// Size multiplier applied to every trail point on each move.
const TRAIL_SIZE_DECAY: f32 = 0.95;
/// Size (pixels) of a freshly pushed point.
const TRAIL_SPAWN_SIZE: f32 = 5.0;
/// Maximum number of points kept.
const TRAIL_CAP: usize = 10;

/// One point of the cursor trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub opacity: f32,
    pub size: f32,
}

/// A short fading tail of recent pointer positions.
///
/// Each movement pushes a fresh point, trims the oldest past the cap,
/// then fades every point. The new point is included in the fade, so
/// the trail shrinks and dims toward its tail and the whole thing goes
/// quiet as soon as the pointer rests.
#[derive(Debug, Default)]
pub struct CursorTrail {
    points: Vec<TrailPoint>,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer movement.
    pub fn push(&mut self, position: Vec2) {
        self.points.push(TrailPoint {
            position,
            opacity: 1.0,
            size: TRAIL_SPAWN_SIZE,
        });
        if self.points.len() > TRAIL_CAP {
            self.points.remove(0);
        }
        for point in &mut self.points {
            point.opacity *= TRAIL_OPACITY_DECAY;
            point.size *= TRAIL_SIZE_DECAY;
        }
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
