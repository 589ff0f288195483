// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles surface setup, the triangle-list and triangle-strip pipelines, and
//! frame rendering.

pub mod render_engine;

// Re-export main types
pub use render_engine::RenderEngine;
