//! # Scene Management Module
//!
//! The demo's world: one camera, a handful of primitives and the geometry
//! they share.
//!
//! ## Key Components
//!
//! - [`Scene`] - Owns the camera manager and every primitive
//! - [`Primitive`] - A cube or cylinder with its own model matrix
//! - [`GeometryLibrary`] - Geometry shared between primitives of the same shape
//! - [`Vertex`] - Position and color vertex format

pub mod mesh;
pub mod primitive;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use mesh::{GeometryLibrary, GpuMesh, SharedGeometry};
pub use primitive::{DrawPrimitive, Primitive, PrimitiveKind};
pub use scene::Scene;
pub use vertex::Vertex;
