use std::sync::Arc;

use cgmath::{Matrix4, SquareMatrix, Vector3};

use super::mesh::{GeometryLibrary, GpuMesh, SharedGeometry};
use crate::{
    gfx::{geometry::generate_cylinder, transform::euler_rotation_matrix},
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Which shape a [`Primitive`] draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Cube,
    Cylinder { resolution: u32 },
}

/// Model matrix as the vertex shader reads it.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl From<Matrix4<f32>> for ModelUniform {
    fn from(model: Matrix4<f32>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

// GPU resources for one primitive's transform
pub struct PrimitiveGpuResources {
    pub transform_ubo: UniformBuffer<ModelUniform>,
    pub transform_bind_group: wgpu::BindGroup,
}

/// A shape placed in the world by its own model matrix.
pub struct Primitive {
    kind: PrimitiveKind,
    geometry: Arc<SharedGeometry>,
    transform: Matrix4<f32>,
    gpu_resources: Option<PrimitiveGpuResources>, // None until init_gpu_resources called
}

impl Primitive {
    /// A unit cube using the library's shared geometry.
    pub fn cube(library: &GeometryLibrary) -> Self {
        Self::new(PrimitiveKind::Cube, library.cube())
    }

    /// A cylinder with its own geometry. `resolution` must be at least 3.
    pub fn cylinder(resolution: u32) -> Self {
        let geometry = Arc::new(SharedGeometry::new(generate_cylinder(resolution)));
        Self::new(PrimitiveKind::Cylinder { resolution }, geometry)
    }

    fn new(kind: PrimitiveKind, geometry: Arc<SharedGeometry>) -> Self {
        Self {
            kind,
            geometry,
            transform: Matrix4::identity(),
            gpu_resources: None,
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn geometry(&self) -> &Arc<SharedGeometry> {
        &self.geometry
    }

    pub fn model_matrix(&self) -> &Matrix4<f32> {
        &self.transform
    }

    /// Apply translation in the primitive's local frame
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.transform = self.transform * Matrix4::from_translation(translation);
    }

    /// Apply rotation by Euler angles in radians, X then Y then Z, in the
    /// primitive's local frame
    pub fn rotate(&mut self, angles: Vector3<f32>) {
        self.transform = self.transform * euler_rotation_matrix(angles);
    }

    /// Reset to identity matrix
    pub fn reset_transform(&mut self) {
        self.transform = Matrix4::identity();
    }

    /// Uploads the geometry (once per shared geometry) and creates the
    /// transform uniform bound at slot 1.
    pub fn init_gpu_resources(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        self.geometry.upload(device);

        let transform_ubo = UniformBuffer::new_with_data(device, &ModelUniform::from(self.transform));
        let transform_bind_group = binding_types::single_binding_group(
            device,
            layout,
            transform_ubo.binding_resource(),
            "Transform Bind Group",
        );

        self.gpu_resources = Some(PrimitiveGpuResources {
            transform_ubo,
            transform_bind_group,
        });
    }

    /// Sync the model matrix to the GPU if resources exist
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        if let Some(gpu_resources) = self.gpu_resources.as_mut() {
            gpu_resources
                .transform_ubo
                .update_content(queue, ModelUniform::from(self.transform));
        }
    }

    /// Mesh and transform bind group, once both exist.
    fn gpu_parts(&self) -> Option<(&GpuMesh, &wgpu::BindGroup)> {
        let mesh = self.geometry.gpu_mesh()?;
        let resources = self.gpu_resources.as_ref()?;
        Some((mesh, &resources.transform_bind_group))
    }
}

/// Draw calls for primitives, one method per pipeline.
///
/// The caller sets the matching pipeline and the global bind group first.
pub trait DrawPrimitive {
    fn draw_primitive_lists(&mut self, primitive: &Primitive);
    fn draw_primitive_strips(&mut self, primitive: &Primitive);
}

impl DrawPrimitive for wgpu::RenderPass<'_> {
    fn draw_primitive_lists(&mut self, primitive: &Primitive) {
        let Some((mesh, bind_group)) = primitive.gpu_parts() else {
            return; // Skip drawing if not uploaded
        };
        let Some(indices) = &mesh.triangle_list else {
            return;
        };

        self.set_bind_group(1, bind_group, &[]);
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(indices.buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..indices.count, 0, 0..1);
    }

    fn draw_primitive_strips(&mut self, primitive: &Primitive) {
        let Some((mesh, bind_group)) = primitive.gpu_parts() else {
            return;
        };
        let Some(indices) = &mesh.triangle_strip else {
            return;
        };

        self.set_bind_group(1, bind_group, &[]);
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(indices.buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..indices.count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4, Zero};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_new_primitive_has_identity_model() {
        let library = GeometryLibrary::new();
        assert_eq!(*Primitive::cube(&library).model_matrix(), Matrix4::identity());
        assert_eq!(*Primitive::cylinder(8).model_matrix(), Matrix4::identity());
    }

    #[test]
    fn test_cubes_share_geometry() {
        let library = GeometryLibrary::new();
        let a = Primitive::cube(&library);
        let b = Primitive::cube(&library);
        assert!(Arc::ptr_eq(a.geometry(), b.geometry()));
        assert_eq!(a.kind(), PrimitiveKind::Cube);
    }

    #[test]
    fn test_cylinders_own_geometry() {
        let a = Primitive::cylinder(8);
        let b = Primitive::cylinder(8);
        assert!(!Arc::ptr_eq(a.geometry(), b.geometry()));
        assert_eq!(a.kind(), PrimitiveKind::Cylinder { resolution: 8 });
        assert_eq!(a.geometry().data().vertex_count(), 18);
    }

    #[test]
    fn test_translations_compose() {
        let mut cylinder = Primitive::cylinder(4);
        cylinder.translate(Vector3::new(0.0, 0.0, -2.0));
        cylinder.translate(Vector3::new(1.0, 0.0, 0.0));

        let origin = *cylinder.model_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(origin, Vector4::new(1.0, 0.0, -2.0, 1.0));
    }

    #[test]
    fn test_rotation_applies_in_local_frame() {
        let mut cylinder = Primitive::cylinder(4);
        cylinder.translate(Vector3::new(0.0, 0.0, -2.0));
        cylinder.rotate(Vector3::new(0.0, FRAC_PI_2, 0.0));

        // rotation spins about the primitive's own center, not the world origin
        let center = *cylinder.model_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((center - Vector4::new(0.0, 0.0, -2.0, 1.0)).magnitude2() < 1e-10);

        let edge = *cylinder.model_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!((edge - Vector4::new(0.0, 0.0, -3.0, 1.0)).magnitude2() < 1e-10);
    }

    #[test]
    fn test_zero_rotation_is_noop() {
        let mut cube = Primitive::cube(&GeometryLibrary::new());
        cube.translate(Vector3::new(1.0, 2.0, 3.0));
        let before = *cube.model_matrix();
        cube.rotate(Vector3::zero());
        assert_eq!(*cube.model_matrix(), before);

        cube.reset_transform();
        assert_eq!(*cube.model_matrix(), Matrix4::identity());
    }
}
