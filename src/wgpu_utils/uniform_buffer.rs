use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// One `Content` value living in a GPU uniform buffer.
///
/// The last uploaded bytes are kept so that per-frame updates with unchanged
/// data cost nothing.
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    uploaded: Vec<u8>,
    content_type: PhantomData<Content>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    /// Short type name used in buffer labels, e.g. `CameraUniform`.
    fn label() -> String {
        let type_name = std::any::type_name::<Content>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        format!("Uniform: {}", short)
    }

    /// Zero-initialised buffer
    pub fn new(device: &wgpu::Device) -> Self {
        Self::new_with_data(device, &Content::zeroed())
    }

    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let bytes = bytemuck::bytes_of(initial_content);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&Self::label()),
            contents: bytes,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            uploaded: bytes.to_vec(),
            content_type: PhantomData,
        }
    }

    /// Writes `content` unless it matches what the buffer already holds.
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let bytes = bytemuck::bytes_of(&content);
        if self.uploaded == bytes {
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytes);
        self.uploaded.clear();
        self.uploaded.extend_from_slice(bytes);
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}
