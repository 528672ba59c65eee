//! Error types for the viewer and its GPU backend.

use std::error::Error;
use std::fmt;

/// Errors that can occur while setting up or running the viewer.
#[derive(Debug)]
pub enum ViewerError {
    /// The event loop could not be created or exited with an error.
    EventLoop(winit::error::EventLoopError),
    /// The GPU backend failed to initialize.
    Gpu(GpuError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::EventLoop(e) => write!(f, "event loop error: {}", e),
            ViewerError::Gpu(e) => write!(f, "gpu error: {}", e),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ViewerError::EventLoop(e) => Some(e),
            ViewerError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ViewerError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ViewerError::EventLoop(e)
    }
}

impl From<GpuError> for ViewerError {
    fn from(e: GpuError) -> Self {
        ViewerError::Gpu(e)
    }
}

/// Errors from GPU device and surface setup.
#[derive(Debug)]
pub enum GpuError {
    /// The window surface could not be created.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter was found.
    NoAdapter,
    /// The logical device could not be requested from the adapter.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "failed to create surface: {}", e),
            GpuError::NoAdapter => write!(f, "no compatible GPU adapter found"),
            GpuError::DeviceCreation(e) => write!(f, "failed to create device: {}", e),
        }
    }
}

impl Error for GpuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}
