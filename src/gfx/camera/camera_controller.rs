use std::collections::HashSet;

use cgmath::{Rad, Vector3, Zero};
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::view::View;

/// Smallest field of view the zoom keys can reach.
const MIN_FIELD_OF_VIEW: f32 = 0.05;
/// Largest field of view the zoom keys can reach.
const MAX_FIELD_OF_VIEW: f32 = std::f32::consts::PI - 0.05;

/// Turns held keys into camera movement.
///
/// The controller only remembers which keys are down. Once per frame the host
/// calls [`CameraController::update_view`] with the view to drive, and the
/// held keys are converted into translate / rotate / zoom deltas scaled by the
/// frame time.
///
/// | Keys              | Effect                      |
/// |-------------------|-----------------------------|
/// | W / S             | move along -Z / +Z          |
/// | A / D             | move along -X / +X          |
/// | Space / Left Shift| move along +Y / -Y          |
/// | Up / Down         | pitch (rotation about X)    |
/// | Left / Right      | yaw (rotation about Y)      |
/// | Q / E             | roll (rotation about Z)     |
/// | `=` / `-`         | narrow / widen field of view|
pub struct CameraController {
    pub move_speed: f32,
    pub rotate_speed: f32,
    pub fov_speed: f32,
    pressed: HashSet<KeyCode>,
}

impl CameraController {
    pub fn new(move_speed: f32, rotate_speed: f32, fov_speed: f32) -> Self {
        Self {
            move_speed,
            rotate_speed,
            fov_speed,
            pressed: HashSet::new(),
        }
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.process_key(code, event.state);
        }
    }

    pub fn process_key(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(code);
            }
            ElementState::Released => {
                self.pressed.remove(&code);
            }
        }
    }

    /// Forgets every held key, e.g. after the window lost focus.
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// Applies the movement accumulated over `dt` seconds to `view`.
    ///
    /// Nothing is written when no relevant key is held, so the view keeps its
    /// cached matrices.
    pub fn update_view(&self, view: &mut View, dt: f32) {
        let translation = self.translation_direction() * (self.move_speed * dt);
        if !translation.is_zero() {
            view.translate(translation);
        }

        let rotation = self.rotation_direction() * (self.rotate_speed * dt);
        if !rotation.is_zero() {
            view.rotate(rotation);
        }

        let zoom = self.axis(KeyCode::Minus, KeyCode::Equal) * self.fov_speed * dt;
        if zoom != 0.0 {
            let current = view.projection_parameters().field_of_view.0;
            let clamped = (current + zoom).clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW);
            if clamped != current {
                view.update_field_of_view(Rad(clamped));
            }
        }
    }

    fn translation_direction(&self) -> Vector3<f32> {
        Vector3::new(
            self.axis(KeyCode::KeyD, KeyCode::KeyA),
            self.axis(KeyCode::Space, KeyCode::ShiftLeft),
            self.axis(KeyCode::KeyS, KeyCode::KeyW),
        )
    }

    fn rotation_direction(&self) -> Vector3<f32> {
        Vector3::new(
            self.axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
            self.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
            self.axis(KeyCode::KeyQ, KeyCode::KeyE),
        )
    }

    /// `1.0` while only `positive` is held, `-1.0` while only `negative` is.
    fn axis(&self, positive: KeyCode, negative: KeyCode) -> f32 {
        let mut value = 0.0;
        if self.is_pressed(positive) {
            value += 1.0;
        }
        if self.is_pressed(negative) {
            value -= 1.0;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::view::{ProjectionParameters, ViewParameters};
    use cgmath::Deg;

    fn test_view() -> View {
        let mut view = View::new(
            ProjectionParameters::new(Deg(60.0), 1.0),
            ViewParameters::default(),
        );
        view.get_view_projection_matrix();
        view
    }

    #[test]
    fn test_idle_controller_keeps_cache() {
        let controller = CameraController::new(2.0, 1.0, 0.5);
        let mut view = test_view();

        controller.update_view(&mut view, 0.016);
        assert!(!view.is_stale());
    }

    #[test]
    fn test_forward_key_moves_along_negative_z() {
        let mut controller = CameraController::new(2.0, 1.0, 0.5);
        let mut view = test_view();

        controller.process_key(KeyCode::KeyW, ElementState::Pressed);
        controller.update_view(&mut view, 0.5);

        assert!(view.is_stale());
        assert_eq!(view.view_parameters().position, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut controller = CameraController::new(2.0, 1.0, 0.5);
        let mut view = test_view();

        controller.process_key(KeyCode::KeyA, ElementState::Pressed);
        controller.process_key(KeyCode::KeyD, ElementState::Pressed);
        controller.update_view(&mut view, 1.0);

        assert!(!view.is_stale());
    }

    #[test]
    fn test_release_stops_movement() {
        let mut controller = CameraController::new(2.0, 1.0, 0.5);
        let mut view = test_view();

        controller.process_key(KeyCode::Space, ElementState::Pressed);
        controller.process_key(KeyCode::Space, ElementState::Released);
        controller.update_view(&mut view, 1.0);

        assert_eq!(view.view_parameters().position, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_arrow_keys_rotate() {
        let mut controller = CameraController::new(2.0, 1.0, 0.5);
        let mut view = test_view();

        controller.process_key(KeyCode::ArrowLeft, ElementState::Pressed);
        controller.process_key(KeyCode::KeyQ, ElementState::Pressed);
        controller.update_view(&mut view, 0.25);

        assert_eq!(view.view_parameters().rotation, Vector3::new(0.0, 0.25, 0.25));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut controller = CameraController::new(2.0, 1.0, 10.0);
        let mut view = test_view();

        controller.process_key(KeyCode::Minus, ElementState::Pressed);
        controller.update_view(&mut view, 1.0);
        assert_eq!(
            view.projection_parameters().field_of_view,
            Rad(MAX_FIELD_OF_VIEW)
        );

        controller.release_all();
        controller.process_key(KeyCode::Equal, ElementState::Pressed);
        controller.update_view(&mut view, 1.0);
        assert_eq!(
            view.projection_parameters().field_of_view,
            Rad(MIN_FIELD_OF_VIEW)
        );
    }
}
