//! # Primitive Shape Generation
//!
//! Both shapes are centered on the origin with Y pointing up.

use super::{GeometryData, Topology};
use crate::gfx::scene::vertex::Vertex;
use std::f64::consts::TAU;

/// Color of the cylinder's top center vertex.
const CYLINDER_TOP_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
/// Color of the cylinder's bottom center vertex.
const CYLINDER_BOTTOM_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
/// Color of every rim vertex.
const CYLINDER_RIM_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Generate a unit cube centered at the origin
///
/// Eight shared corners from -0.5 to 0.5 on all axes, each with its own color
/// so the cube's orientation is easy to read on screen. Drawn as a single
/// triangle list of 12 triangles.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    #[rustfmt::skip]
    let corners = [
        // Face at -Z
        Vertex::new([-0.5,  0.5, -0.5], [0.0, 1.0, 1.0]), // left top - 0
        Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0, 1.0]), // left bottom - 1
        Vertex::new([ 0.5,  0.5, -0.5], [1.0, 0.0, 0.0]), // right top - 2
        Vertex::new([ 0.5, -0.5, -0.5], [0.0, 1.0, 0.0]), // right bottom - 3
        // Face at +Z
        Vertex::new([-0.5,  0.5,  0.5], [0.0, 0.5, 0.5]), // left top - 4
        Vertex::new([-0.5, -0.5,  0.5], [0.0, 0.0, 0.5]), // left bottom - 5
        Vertex::new([ 0.5,  0.5,  0.5], [0.5, 0.0, 0.0]), // right top - 6
        Vertex::new([ 0.5, -0.5,  0.5], [1.0, 0.5, 1.0]), // right bottom - 7
    ];
    data.vertices = corners.to_vec();

    #[rustfmt::skip]
    let indices = [
        // -Z
        0, 1, 3,    0, 3, 2,
        // +Z
        4, 5, 7,    4, 7, 6,
        // -X
        4, 5, 1,    4, 0, 1,
        // +X
        6, 7, 3,    6, 2, 3,
        // +Y
        0, 4, 6,    0, 6, 2,
        // -Y
        1, 5, 7,    1, 7, 3,
    ];
    data.push_pass(Topology::TriangleList, indices);

    data
}

/// Generate a cylinder of radius 1 and height 1
///
/// # Arguments
/// * `resolution` - Number of vertices on each rim, at least 3. Smaller values
///   are not rejected and produce degenerate geometry.
///
/// # Layout
///
/// Vertex 0 is the top center, `1..=resolution` the top rim, `resolution + 1`
/// the bottom center and the rest the bottom rim. Rim vertex `i` sits at angle
/// `i * 2π / resolution` around the Y axis.
///
/// Three passes: a fan for the top cap, a fan for the bottom cap and a strip
/// around the side that alternates top and bottom rim vertices and repeats the
/// first pair to close the wall.
pub fn generate_cylinder(resolution: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let top_center = 0;
    let bottom_center = resolution + 1;
    let top_rim = |i: u32| top_center + 1 + i;
    let bottom_rim = |i: u32| bottom_center + 1 + i;

    let mut top = Vec::with_capacity(resolution as usize);
    let mut bottom = Vec::with_capacity(resolution as usize);
    let angle_gap = TAU / f64::from(resolution);
    for i in 0..resolution {
        let angle = f64::from(i) * angle_gap;
        let (x, z) = (angle.cos() as f32, angle.sin() as f32);
        top.push(Vertex::new([x, 0.5, z], CYLINDER_RIM_COLOR));
        bottom.push(Vertex::new([x, -0.5, z], CYLINDER_RIM_COLOR));
    }

    data.vertices.push(Vertex::new([0.0, 0.5, 0.0], CYLINDER_TOP_COLOR));
    data.vertices.extend(top);
    data.vertices.push(Vertex::new([0.0, -0.5, 0.0], CYLINDER_BOTTOM_COLOR));
    data.vertices.extend(bottom);

    // Caps: center, then the rim, then the first rim vertex again to close it
    data.push_pass(
        Topology::TriangleFan,
        std::iter::once(top_center)
            .chain((0..resolution).map(top_rim))
            .chain(std::iter::once(top_rim(0))),
    );
    data.push_pass(
        Topology::TriangleFan,
        std::iter::once(bottom_center)
            .chain((0..resolution).map(bottom_rim))
            .chain(std::iter::once(bottom_rim(0))),
    );

    data.push_pass(
        Topology::TriangleStrip,
        (0..resolution)
            .chain(std::iter::once(0))
            .flat_map(|i| [top_rim(i), bottom_rim(i)]),
    );

    data
}
