//! Global uniform bindings for camera data
//!
//! Manages the uniform buffer and bind group holding per-frame state shared
//! by every primitive in the scene. Bound to slot 0 in all render pipelines.

use crate::{
    gfx::camera::camera_utils::CameraUniform,
    wgpu_utils::{binding_types, uniform_buffer::UniformBuffer},
};

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<CameraUniform>;

/// Writes this frame's camera data into the global uniform buffer
///
/// Unchanged camera data is not re-uploaded.
pub fn update_global_ubo(ubo: &mut GlobalUBO, queue: &wgpu::Queue, camera: CameraUniform) {
    ubo.update_content(queue, camera);
}

/// Bind group layout and bind group for the global uniforms
pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    /// Creates the layout and binds `ubo` to it
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout =
            binding_types::vertex_uniform_layout(device, "Globals Bind Group Layout");
        let bind_group = binding_types::single_binding_group(
            device,
            &bind_group_layout,
            ubo.binding_resource(),
            "Global Bind Group",
        );

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    /// Used when creating render pipelines that need access to global uniforms.
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
