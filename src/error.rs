//! Error types for the application shell and render engine
//!
//! The camera and geometry core never fails; everything here comes from
//! configuration checks or from the window system and GPU.

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Rejected configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cylinder resolution must be at least 3, got {0}")]
    CylinderResolution(u32),

    #[error("field of view must lie strictly between 0 and 180 degrees, got {0}")]
    FieldOfView(f32),

    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Speed { name: &'static str, value: f32 },
}

/// Errors that can occur while starting or running the application
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface does not support this adapter")]
    UnsupportedSurface,

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
