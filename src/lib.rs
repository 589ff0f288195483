//! u3d
//!
//! A small interactive 3D demo built on wgpu and winit: one keyboard-driven
//! camera looking at a spinning cube and a cylinder.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::U3dApp;
pub use config::AppConfig;
pub use error::{ConfigError, EngineError};
