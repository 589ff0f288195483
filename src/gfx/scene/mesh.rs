//! Geometry shared between primitives and its GPU-side buffers.
//!
//! A [`SharedGeometry`] pairs immutable [`GeometryData`] with the wgpu buffers
//! created from it. Buffers are uploaded the first time any primitive using the
//! geometry is initialised and reused by every other holder of the same
//! `Arc`.

use std::sync::{Arc, OnceLock};

use wgpu::util::DeviceExt;

use crate::gfx::geometry::{fan_to_list, generate_cube, GeometryData, Topology};

/// Separates consecutive strips in a strip index buffer.
pub const STRIP_RESTART_INDEX: u32 = u32::MAX;

/// Index data regrouped by the pipeline that draws it.
///
/// wgpu has no fan topology, so fans are expanded into the triangle list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PipelineIndices {
    pub triangle_list: Vec<u32>,
    pub triangle_strip: Vec<u32>,
}

impl PipelineIndices {
    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let mut indices = Self::default();
        for pass in &geometry.passes {
            let pass_indices = geometry.pass_indices(pass);
            match pass.topology {
                Topology::TriangleList => indices.triangle_list.extend_from_slice(pass_indices),
                Topology::TriangleFan => indices.triangle_list.extend(fan_to_list(pass_indices)),
                Topology::TriangleStrip => {
                    if !indices.triangle_strip.is_empty() {
                        indices.triangle_strip.push(STRIP_RESTART_INDEX);
                    }
                    indices.triangle_strip.extend_from_slice(pass_indices);
                }
            }
        }
        indices
    }
}

/// An uploaded index buffer and how many indices it holds.
pub struct IndexBuffer {
    pub buffer: wgpu::Buffer,
    pub count: u32,
}

/// Vertex and index buffers for one piece of geometry.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub triangle_list: Option<IndexBuffer>,
    pub triangle_strip: Option<IndexBuffer>,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, geometry: &GeometryData) -> Self {
        let indices = PipelineIndices::from_geometry(geometry);
        log::debug!(
            "Uploading mesh: {} vertices, {} list indices, {} strip indices",
            geometry.vertex_count(),
            indices.triangle_list.len(),
            indices.triangle_strip.len()
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            triangle_list: create_index_buffer(device, &indices.triangle_list, "List Index Buffer"),
            triangle_strip: create_index_buffer(
                device,
                &indices.triangle_strip,
                "Strip Index Buffer",
            ),
        }
    }
}

fn create_index_buffer(device: &wgpu::Device, indices: &[u32], label: &str) -> Option<IndexBuffer> {
    if indices.is_empty() {
        return None;
    }
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    Some(IndexBuffer {
        buffer,
        count: indices.len() as u32,
    })
}

/// Immutable geometry plus its lazily uploaded GPU buffers.
pub struct SharedGeometry {
    data: GeometryData,
    gpu: OnceLock<GpuMesh>,
}

impl SharedGeometry {
    pub fn new(data: GeometryData) -> Self {
        Self {
            data,
            gpu: OnceLock::new(),
        }
    }

    pub fn data(&self) -> &GeometryData {
        &self.data
    }

    /// Uploads the buffers on first use and returns them.
    pub fn upload(&self, device: &wgpu::Device) -> &GpuMesh {
        self.gpu.get_or_init(|| GpuMesh::upload(device, &self.data))
    }

    /// The buffers, if some primitive already uploaded them.
    pub fn gpu_mesh(&self) -> Option<&GpuMesh> {
        self.gpu.get()
    }
}

/// Geometry that never varies between primitives, built once per rendering
/// context and handed to primitive constructors.
#[derive(Default)]
pub struct GeometryLibrary {
    cube: OnceLock<Arc<SharedGeometry>>,
}

impl GeometryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unit cube, generated on first request.
    pub fn cube(&self) -> Arc<SharedGeometry> {
        self.cube
            .get_or_init(|| {
                log::debug!("Generating shared cube geometry");
                Arc::new(SharedGeometry::new(generate_cube()))
            })
            .clone()
    }
}
