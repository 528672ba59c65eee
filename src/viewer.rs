//! The windowed host: event loop, input plumbing, frame pacing.
//!
//! [`Viewer`] is the builder-style entry point. It owns nothing until
//! [`run`](Viewer::run); the winit event loop then drives an [`App`]
//! that wires the pointer, timer, and performance monitor into the
//! particle field and draws each frame through the wgpu backend.
//!
//! ```ignore
//! Viewer::new()
//!     .with_title("ambient field")
//!     .with_theme(Theme::Dark)
//!     .run()?;
//! ```
//!
//! Press `T` at runtime to toggle the theme.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::canvas::{Canvas, Color};
use crate::error::ViewerError;
use crate::field::{FieldConfig, ParticleField, TickContext};
use crate::gpu::{FrameCanvas, GpuState};
use crate::input::{CursorTrail, PointerTracker};
use crate::time::{FrameTimer, PerfLevel, PerfMonitor};
use crate::visuals::Theme;

/// Builder for the windowed field viewer.
pub struct Viewer {
    title: String,
    size: (u32, u32),
    config: FieldConfig,
    theme: Theme,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            title: "driftfield".to_string(),
            size: (1280, 720),
            config: FieldConfig::default(),
            theme: Theme::Light,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Open the window and run until closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Viewer,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: ParticleField,
    frame: FrameCanvas,
    tracker: PointerTracker,
    trail: CursorTrail,
    timer: FrameTimer,
    monitor: PerfMonitor,
}

impl App {
    fn new(settings: Viewer) -> Self {
        let field = ParticleField::new(settings.config.clone(), settings.theme);
        Self {
            settings,
            window: None,
            gpu: None,
            field,
            frame: FrameCanvas::new(),
            tracker: PointerTracker::new(),
            trail: CursorTrail::new(),
            timer: FrameTimer::new(),
            monitor: PerfMonitor::new(Instant::now()),
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.field.theme().toggled();
        self.field.retheme(theme);
        if let Some(gpu) = &mut self.gpu {
            gpu.set_background(theme.background());
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        self.timer.update();

        let ctx = TickContext {
            pointer: self.tracker.position(),
            width: gpu.config.width as f32,
            height: gpu.config.height as f32,
        };
        self.field.tick(&ctx);
        self.field.render(&mut self.frame);

        let hue = self.field.theme().hue_range().start;
        for point in self.trail.points() {
            self.frame.fill_circle(
                point.position,
                point.size,
                Color::hsla(
                    hue,
                    crate::visuals::SATURATION,
                    crate::visuals::LIGHTNESS,
                    point.opacity * 0.4,
                ),
            );
        }

        match gpu.render(&self.frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let (w, h) = (gpu.config.width, gpu.config.height);
                gpu.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        if let Some(PerfLevel::Low) = self.monitor.frame(Instant::now()) {
            self.field.degrade();
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let (width, height) = self.settings.size;
            let window_attrs = Window::default_attributes()
                .with_title(self.settings.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(width, height));

            match event_loop.create_window(window_attrs) {
                Ok(window) => {
                    let window = Arc::new(window);
                    self.window = Some(window.clone());

                    match pollster::block_on(GpuState::new(window)) {
                        Ok(mut gpu) => {
                            gpu.set_background(self.field.theme().background());
                            self.field
                                .initialize(gpu.config.width as f32, gpu.config.height as f32);
                            self.gpu = Some(gpu);
                        }
                        Err(e) => {
                            eprintln!("GPU init error: {}", e);
                            event_loop.exit();
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Window creation error: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size.width, physical_size.height);
                    self.field
                        .resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.tracker.moved(position);
                if let Some(p) = self.tracker.position() {
                    self.trail.push(p);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.tracker.left();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::KeyT),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.toggle_theme();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
