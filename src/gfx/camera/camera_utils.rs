use cgmath::{Matrix4, SquareMatrix, Vector3};
use winit::event::KeyEvent;

use super::{camera_controller::CameraController, view::View};

/// Maps OpenGL clip depth (`-1..1`) onto the `0..1` range wgpu expects.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// The demo's single camera together with the keyboard controller driving it.
pub struct CameraManager {
    pub view: View,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(view: View, controller: CameraController) -> Self {
        Self { view, controller }
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.controller.process_keyboard_event(event);
    }

    /// Applies the input held during the last `dt` seconds to the view.
    pub fn update(&mut self, dt: f32) {
        self.controller.update_view(&mut self.view, dt);
    }

    /// Get the view projection matrix from the camera
    pub fn get_view_proj_matrix(&mut self) -> &Matrix4<f32> {
        self.view.get_view_projection_matrix()
    }

    /// Builds the uniform the shaders read for this frame.
    pub fn uniform(&mut self) -> CameraUniform {
        let position = self.view.view_parameters().position;
        CameraUniform::new(position, self.view.get_view_projection_matrix())
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// The eye position of the camera in homogenous coordinates.
    ///
    /// Homogenous coordinates are used to fullfill the 16 byte alignment requirement.
    pub view_position: [f32; 4],

    /// Contains the view projection matrix, already remapped for wgpu clip space.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Packs a view-projection matrix produced with OpenGL depth conventions.
    pub fn new(view_position: Vector3<f32>, view_projection: &Matrix4<f32>) -> Self {
        Self {
            view_position: [view_position.x, view_position.y, view_position.z, 1.0],
            view_proj: convert_matrix4_to_array(OPENGL_TO_WGPU_MATRIX * *view_projection),
        }
    }
}

impl Default for CameraUniform {
    /// Creates a default [CameraUniform].
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}
