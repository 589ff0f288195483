//! # Procedural Geometry Generation
//!
//! Functions that build the demo's primitive shapes procedurally, so no
//! external model files are needed.
//!
//! ## Supported Primitives
//!
//! - **Cube**: unit cube with one color per corner
//! - **Cylinder**: unit-radius cylinder with configurable radial resolution
//!
//! ## Usage
//!
//! ```rust
//! use u3d::gfx::geometry::{generate_cube, generate_cylinder};
//!
//! let cube = generate_cube();
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let cylinder = generate_cylinder(32);
//! assert_eq!(cylinder.vertex_count(), 66);
//! ```

pub mod primitives;

pub use primitives::*;

use std::ops::Range;

use crate::gfx::scene::vertex::Vertex;

/// How a run of indices is assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every three indices form one triangle.
    TriangleList,
    /// The first index is shared by every triangle; each further index closes
    /// a triangle with its predecessor.
    TriangleFan,
    /// Each index after the second forms a triangle with the previous two.
    TriangleStrip,
}

/// One draw call's worth of indices inside [`GeometryData::indices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawPass {
    pub topology: Topology,
    pub indices: Range<u32>,
}

/// Generated geometry ready for GPU upload.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Draw passes in submission order, each covering a range of `indices`
    pub passes: Vec<DrawPass>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles produced by all passes together.
    pub fn triangle_count(&self) -> usize {
        self.passes
            .iter()
            .map(|pass| {
                let count = pass.indices.len();
                match pass.topology {
                    Topology::TriangleList => count / 3,
                    Topology::TriangleFan | Topology::TriangleStrip => count.saturating_sub(2),
                }
            })
            .sum()
    }

    /// The slice of indices a pass draws.
    pub fn pass_indices(&self, pass: &DrawPass) -> &[u32] {
        &self.indices[pass.indices.start as usize..pass.indices.end as usize]
    }

    /// Appends `indices` as a new pass.
    fn push_pass(&mut self, topology: Topology, indices: impl IntoIterator<Item = u32>) {
        let start = self.indices.len() as u32;
        self.indices.extend(indices);
        let end = self.indices.len() as u32;
        self.passes.push(DrawPass {
            topology,
            indices: start..end,
        });
    }
}

/// Expands a triangle fan into an equivalent triangle list.
///
/// Winding is preserved: fan `[c, a, b, d]` becomes `[c, a, b, c, b, d]`.
pub fn fan_to_list(fan: &[u32]) -> Vec<u32> {
    let Some((&center, rim)) = fan.split_first() else {
        return Vec::new();
    };
    rim.windows(2)
        .flat_map(|edge| [center, edge[0], edge[1]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_to_list() {
        assert_eq!(fan_to_list(&[0, 1, 2, 3, 1]), vec![0, 1, 2, 0, 2, 3, 0, 3, 1]);
        assert!(fan_to_list(&[0, 1]).is_empty());
        assert!(fan_to_list(&[]).is_empty());
    }

    #[test]
    fn test_triangle_count_per_topology() {
        let mut data = GeometryData::new();
        data.push_pass(Topology::TriangleList, [0, 1, 2, 2, 3, 0]);
        data.push_pass(Topology::TriangleFan, [0, 1, 2, 3]);
        data.push_pass(Topology::TriangleStrip, [0, 1, 2, 3, 4]);

        assert_eq!(data.triangle_count(), 2 + 2 + 3);
        assert_eq!(data.pass_indices(&data.passes[1]), &[0, 1, 2, 3]);
    }
}
