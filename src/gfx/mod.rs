//! # Graphics Module
//!
//! Camera state, procedural geometry, the scene and everything that puts it
//! on screen.
//!
//! - **Camera** ([`camera`]) - [`View`] with lazily recomputed matrices and a
//!   keyboard controller
//! - **Geometry** ([`geometry`]) - Cube and cylinder vertex/index builders
//! - **Scene** ([`scene`]) - Primitives with model matrices and shared geometry
//! - **Rendering** ([`rendering`]) - wgpu surface, pipelines and frame drawing
//! - **Resources** ([`resources`]) - Depth buffer and camera bindings

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use camera::view::View;
pub use rendering::render_engine::RenderEngine;
