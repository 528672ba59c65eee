//! # driftfield
//!
//! An ambient particle field with pointer interaction, plus the
//! reveal-on-scroll machinery that usually accompanies it on a page.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     Viewer::new()
//!         .with_title("ambient field")
//!         .with_theme(Theme::Dark)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the particles: spawning scaled to the surface
//! width, drifting with edge wrap, a pointer repulsion impulse, and
//! links drawn between nearby pairs. It is headless; it draws through
//! the [`Canvas`] trait, so tests and benchmarks run it against a
//! [`DrawList`] with no GPU anywhere.
//!
//! ### The viewer
//!
//! [`Viewer`] opens a winit window, renders through wgpu, and feeds the
//! field real pointer and clock input. When the measured frame rate
//! stays under 30 fps for a full window, the field degrades to a
//! reduced particle count, once, permanently.
//!
//! ### Reveals
//!
//! [`RevealController`] and [`SkillMeters`] implement the one-shot
//! visibility animations: each registered target fires exactly once
//! the first time it scrolls into view. [`TypeWriter`] is the matching
//! headline effect.
//!
//! ## Modules
//!
//! | Module | What lives there |
//! |--------|------------------|
//! | [`field`] | The particle simulation and its config |
//! | [`canvas`] | The drawing trait and the recording canvas |
//! | [`reveal`] | One-shot reveal and skill-meter controllers |
//! | [`typing`] | The typewriter headline effect |
//! | [`viewer`] | The windowed winit/wgpu host |
//! | [`gpu`] | The wgpu pipelines behind the viewer |
//! | [`input`] | Pointer tracking and the cursor trail |
//! | [`time`] | Frame timing and the performance monitor |
//! | [`visuals`] | Themes and color conversion |
//! | [`error`] | Error types |

pub mod canvas;
pub mod error;
pub mod field;
pub mod gpu;
pub mod input;
pub mod particle;
pub mod reveal;
pub mod time;
pub mod typing;
pub mod viewer;
pub mod visuals;

pub use canvas::{Canvas, Color, DrawCommand, DrawList};
pub use error::{GpuError, ViewerError};
pub use field::{FieldConfig, ParticleField, TickContext};
pub use gpu::FrameCanvas;
pub use particle::Particle;
pub use reveal::{
    Category, ObserverOptions, Reveal, RevealController, SecondaryAnimation, SkillFill,
    SkillMeters,
};
pub use time::{FrameTimer, PerfLevel, PerfMonitor};
pub use typing::{TypeFrame, TypeWriter};
pub use viewer::Viewer;
pub use visuals::Theme;

/// Common imports.
pub mod prelude {
    pub use crate::canvas::{Canvas, Color, DrawList};
    pub use crate::error::ViewerError;
    pub use crate::field::{FieldConfig, ParticleField, TickContext};
    pub use crate::particle::Particle;
    pub use crate::reveal::{Category, RevealController, SkillMeters};
    pub use crate::typing::TypeWriter;
    pub use crate::viewer::Viewer;
    pub use crate::visuals::Theme;
    pub use glam::Vec2;
}
