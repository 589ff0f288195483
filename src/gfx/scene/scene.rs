use cgmath::{Vector3, Zero};
use wgpu::Device;

use super::{
    mesh::GeometryLibrary,
    primitive::{Primitive, PrimitiveKind},
};
use crate::gfx::camera::camera_utils::CameraManager;

pub struct Scene {
    pub camera_manager: CameraManager,
    pub primitives: Vec<Primitive>,
    library: GeometryLibrary,
    /// Angular velocity in radians per second applied to every cube
    cube_spin: Vector3<f32>,
}

impl Scene {
    pub fn new(camera_manager: CameraManager) -> Self {
        Self {
            camera_manager,
            primitives: Vec::new(),
            library: GeometryLibrary::new(),
            cube_spin: Vector3::zero(),
        }
    }

    pub fn set_cube_spin(&mut self, spin: Vector3<f32>) {
        self.cube_spin = spin;
    }

    /// Adds a cube at `position` and returns it for further placement.
    pub fn add_cube(&mut self, position: Vector3<f32>) -> &mut Primitive {
        let mut cube = Primitive::cube(&self.library);
        cube.translate(position);
        self.push(cube)
    }

    /// Adds a cylinder at `position`. `resolution` must be at least 3.
    pub fn add_cylinder(&mut self, position: Vector3<f32>, resolution: u32) -> &mut Primitive {
        let mut cylinder = Primitive::cylinder(resolution);
        cylinder.translate(position);
        self.push(cylinder)
    }

    fn push(&mut self, primitive: Primitive) -> &mut Primitive {
        log::debug!("Adding {:?} to scene", primitive.kind());
        self.primitives.push(primitive);
        let last = self.primitives.len() - 1;
        &mut self.primitives[last]
    }

    /// Advances the scene by `dt` seconds: camera input, then cube spin.
    pub fn update(&mut self, dt: f32) {
        self.camera_manager.update(dt);

        let spin = self.cube_spin * dt;
        if spin.is_zero() {
            return;
        }
        for primitive in self
            .primitives
            .iter_mut()
            .filter(|primitive| primitive.kind() == PrimitiveKind::Cube)
        {
            primitive.rotate(spin);
        }
    }

    pub fn init_gpu_resources(&mut self, device: &Device, layout: &wgpu::BindGroupLayout) {
        for primitive in self.primitives.iter_mut() {
            primitive.init_gpu_resources(device, layout);
        }
    }

    /// Pushes every model matrix that changed since the last frame.
    pub fn sync_transforms(&mut self, queue: &wgpu::Queue) {
        for primitive in self.primitives.iter_mut() {
            primitive.update_transform(queue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{
        camera_controller::CameraController,
        view::{ProjectionParameters, View, ViewParameters},
    };
    use cgmath::{Deg, SquareMatrix};
    use std::sync::Arc;

    fn test_scene() -> Scene {
        let view = View::new(
            ProjectionParameters::new(Deg(60.0), 1.0),
            ViewParameters::default(),
        );
        Scene::new(CameraManager::new(view, CameraController::new(1.0, 1.0, 1.0)))
    }

    #[test]
    fn test_cubes_in_scene_share_geometry() {
        let mut scene = test_scene();
        scene.add_cube(Vector3::new(-1.0, 0.0, -3.0));
        scene.add_cylinder(Vector3::new(1.0, 0.0, -3.0), 12);
        scene.add_cube(Vector3::new(0.0, 2.0, -3.0));

        assert_eq!(scene.primitives.len(), 3);
        assert!(Arc::ptr_eq(
            scene.primitives[0].geometry(),
            scene.primitives[2].geometry()
        ));
        assert_eq!(
            scene.primitives[1].kind(),
            PrimitiveKind::Cylinder { resolution: 12 }
        );
    }

    #[test]
    fn test_spin_only_turns_cubes() {
        let mut scene = test_scene();
        scene.add_cube(Vector3::zero());
        scene.add_cylinder(Vector3::zero(), 8);
        scene.set_cube_spin(Vector3::new(0.0, 1.0, 1.0));

        scene.update(0.1);

        assert_ne!(*scene.primitives[0].model_matrix(), cgmath::Matrix4::identity());
        assert_eq!(*scene.primitives[1].model_matrix(), cgmath::Matrix4::identity());
    }

    #[test]
    fn test_update_without_input_keeps_camera_cached() {
        let mut scene = test_scene();
        scene.camera_manager.get_view_proj_matrix();
        scene.update(0.016);
        assert!(!scene.camera_manager.view.is_stale());
    }
}
