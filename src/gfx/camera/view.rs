//! # Camera View State
//!
//! [`View`] owns the camera parameters and lazily derives the matrices the
//! renderer needs from them. Mutators only record the change and mark the
//! affected matrix as stale; the work happens the next time the renderer asks
//! for the view-projection matrix.
//!
//! ```
//! use cgmath::{Deg, Vector3};
//! use u3d::gfx::camera::view::{ProjectionParameters, View, ViewParameters};
//!
//! let mut view = View::new(
//!     ProjectionParameters::new(Deg(60.0), 16.0 / 9.0),
//!     ViewParameters::default(),
//! );
//! view.translate(Vector3::new(0.0, 0.0, 3.0));
//! let view_proj = *view.get_view_projection_matrix();
//! assert!(!view.is_stale());
//! # let _ = view_proj;
//! ```

use cgmath::{perspective, Matrix4, Rad, SquareMatrix, Vector3, Zero};

use crate::gfx::transform::euler_rotation;

/// Distance of the near clip plane.
pub const NEAR_PLANE: f32 = 0.1;
/// Distance of the far clip plane.
pub const FAR_PLANE: f32 = 100.0;

/// Perspective projection inputs.
///
/// `aspect_ratio` is width / height of the render target and must be positive;
/// `field_of_view` is the vertical angle and must lie in `(0, π)`. Neither is
/// checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParameters {
    pub field_of_view: Rad<f32>,
    pub aspect_ratio: f32,
}

impl ProjectionParameters {
    pub fn new(field_of_view: impl Into<Rad<f32>>, aspect_ratio: f32) -> Self {
        Self {
            field_of_view: field_of_view.into(),
            aspect_ratio,
        }
    }
}

/// Where the camera sits and how it is turned.
///
/// `rotation` holds Euler angles in radians, applied X then Y then Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParameters {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
}

impl ViewParameters {
    pub fn new(position: Vector3<f32>, rotation: Vector3<f32>) -> Self {
        Self { position, rotation }
    }
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
        }
    }
}

/// Whether a cached matrix still matches its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Freshness {
    Current,
    Stale,
}

/// Camera state with lazily recomputed projection and view matrices.
#[derive(Debug, Clone)]
pub struct View {
    projection: ProjectionParameters,
    view: ViewParameters,

    projection_state: Freshness,
    view_state: Freshness,

    projection_matrix: Matrix4<f32>,
    view_matrix: Matrix4<f32>,
    view_projection_matrix: Matrix4<f32>,
}

impl View {
    /// Creates a view with both matrices pending recomputation.
    pub fn new(projection: ProjectionParameters, view: ViewParameters) -> Self {
        Self {
            projection,
            view,
            projection_state: Freshness::Stale,
            view_state: Freshness::Stale,
            projection_matrix: Matrix4::identity(),
            view_matrix: Matrix4::identity(),
            view_projection_matrix: Matrix4::identity(),
        }
    }

    pub fn update_field_of_view(&mut self, field_of_view: impl Into<Rad<f32>>) {
        self.projection.field_of_view = field_of_view.into();
        self.projection_state = Freshness::Stale;
    }

    /// Updates the aspect ratio after the render target changed size.
    pub fn resize_projection(&mut self, width: u32, height: u32) {
        self.projection.aspect_ratio = width as f32 / height as f32;
        self.projection_state = Freshness::Stale;
    }

    /// Moves the camera by `delta` in world space.
    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.view.position += delta;
        self.view_state = Freshness::Stale;
    }

    /// Adds `delta` to each Euler angle.
    ///
    /// This is plain component-wise accumulation, not a composition of
    /// rotations, so large pitch values run into gimbal lock.
    pub fn rotate(&mut self, delta: Vector3<f32>) {
        self.view.rotation += delta;
        self.view_state = Freshness::Stale;
    }

    /// Returns the combined `projection * view` matrix, recomputing whatever
    /// changed since the previous call.
    pub fn get_view_projection_matrix(&mut self) -> &Matrix4<f32> {
        if !self.is_stale() {
            return &self.view_projection_matrix;
        }

        if self.projection_state == Freshness::Stale {
            log::trace!("Recalculate projection matrix");
            self.projection_matrix = perspective(
                self.projection.field_of_view,
                self.projection.aspect_ratio,
                NEAR_PLANE,
                FAR_PLANE,
            );
        }

        if self.view_state == Freshness::Stale {
            log::trace!("Recalculate view matrix");
            // world -> camera is the inverse of translate-then-rotate
            let rotation = euler_rotation(self.view.rotation);
            self.view_matrix = Matrix4::from(rotation.conjugate())
                * Matrix4::from_translation(-self.view.position);
        }

        log::trace!("Recalculate view projection matrix");
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
        self.projection_state = Freshness::Current;
        self.view_state = Freshness::Current;

        &self.view_projection_matrix
    }

    /// True if the next call to [`View::get_view_projection_matrix`] has work to do.
    pub fn is_stale(&self) -> bool {
        self.projection_state == Freshness::Stale || self.view_state == Freshness::Stale
    }

    pub fn projection_parameters(&self) -> &ProjectionParameters {
        &self.projection
    }

    pub fn view_parameters(&self) -> &ViewParameters {
        &self.view
    }

    /// Projection matrix as of the last refresh.
    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        &self.projection_matrix
    }

    /// View matrix as of the last refresh.
    pub fn view_matrix(&self) -> &Matrix4<f32> {
        &self.view_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, InnerSpace, Vector4};
    use std::f32::consts::FRAC_PI_2;

    fn test_view() -> View {
        View::new(
            ProjectionParameters::new(Deg(60.0), 4.0 / 3.0),
            ViewParameters::new(Vector3::new(0.0, 1.0, 5.0), Vector3::new(0.1, 0.2, 0.0)),
        )
    }

    fn assert_matrix_close(a: &Matrix4<f32>, b: &Matrix4<f32>) {
        let a: &[f32; 16] = a.as_ref();
        let b: &[f32; 16] = b.as_ref();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_new_view_is_stale() {
        let mut view = test_view();
        assert!(view.is_stale());
        view.get_view_projection_matrix();
        assert!(!view.is_stale());
    }

    #[test]
    fn test_repeated_queries_hit_the_cache() {
        let mut view = test_view();
        view.translate(Vector3::new(0.5, -0.25, 1.0));
        view.rotate(Vector3::new(0.0, 0.3, 0.1));

        let first = *view.get_view_projection_matrix();
        let second = *view.get_view_projection_matrix();
        assert_eq!(first, second);
        assert!(!view.is_stale());
    }

    #[test]
    fn test_translate_invalidates() {
        let mut view = test_view();
        let before = *view.get_view_projection_matrix();

        view.translate(Vector3::new(0.0, 0.0, -1.0));
        assert!(view.is_stale());
        assert_ne!(*view.get_view_projection_matrix(), before);
    }

    #[test]
    fn test_rotate_invalidates() {
        let mut view = test_view();
        let before = *view.get_view_projection_matrix();

        view.rotate(Vector3::new(0.0, 0.05, 0.0));
        assert_ne!(*view.get_view_projection_matrix(), before);
    }

    #[test]
    fn test_field_of_view_invalidates_without_moving() {
        let mut view = test_view();
        let before = *view.get_view_projection_matrix();
        let view_before = *view.view_matrix();

        view.update_field_of_view(Deg(45.0));
        let after = *view.get_view_projection_matrix();

        assert_ne!(after, before);
        assert_eq!(*view.view_matrix(), view_before);
    }

    #[test]
    fn test_resize_changes_aspect() {
        let mut view = test_view();
        let before = *view.get_view_projection_matrix();

        view.resize_projection(1920, 1080);
        assert_eq!(view.projection_parameters().aspect_ratio, 1920.0 / 1080.0);
        assert_ne!(*view.get_view_projection_matrix(), before);
    }

    #[test]
    fn test_origin_camera_matches_standard_perspective() {
        let mut view = View::new(
            ProjectionParameters::new(Deg(90.0), 1.0),
            ViewParameters::default(),
        );
        let view_proj = *view.get_view_projection_matrix();

        assert_eq!(*view.view_matrix(), Matrix4::identity());

        // tan(45°) = 1 so x and y pass through unscaled
        let depth = (FAR_PLANE + NEAR_PLANE) / (NEAR_PLANE - FAR_PLANE);
        let offset = 2.0 * FAR_PLANE * NEAR_PLANE / (NEAR_PLANE - FAR_PLANE);
        #[rustfmt::skip]
        let expected = Matrix4::new(
            1.0, 0.0, 0.0,    0.0,
            0.0, 1.0, 0.0,    0.0,
            0.0, 0.0, depth, -1.0,
            0.0, 0.0, offset, 0.0,
        );
        assert_matrix_close(view.projection_matrix(), &expected);
        assert_matrix_close(&view_proj, &expected);
    }

    #[test]
    fn test_translations_accumulate() {
        let mut stepped = test_view();
        stepped.translate(Vector3::new(1.0, 0.0, 0.0));
        stepped.translate(Vector3::new(2.0, 0.0, 0.0));

        let mut single = test_view();
        single.translate(Vector3::new(3.0, 0.0, 0.0));

        assert_eq!(
            stepped.view_parameters().position,
            single.view_parameters().position
        );
        assert_matrix_close(
            stepped.get_view_projection_matrix(),
            single.get_view_projection_matrix(),
        );
    }

    #[test]
    fn test_rotations_accumulate_per_component() {
        let mut view = test_view();
        view.rotate(Vector3::new(0.1, 0.0, 0.0));
        view.rotate(Vector3::new(0.0, 0.2, 0.3));

        let diff = view.view_parameters().rotation - Vector3::new(0.2, 0.4, 0.3);
        assert!(diff.x.abs() < 1e-6 && diff.y.abs() < 1e-6 && diff.z.abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_moves_camera_to_origin() {
        let mut view = View::new(
            ProjectionParameters::new(Deg(60.0), 1.0),
            ViewParameters::new(Vector3::new(2.0, 3.0, 4.0), Vector3::zero()),
        );
        view.get_view_projection_matrix();

        let eye = *view.view_matrix() * Vector4::new(2.0, 3.0, 4.0, 1.0);
        assert_eq!(eye, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_view_matrix_undoes_camera_turn() {
        // camera turned a quarter left about +Y looks down world -X
        let mut view = View::new(
            ProjectionParameters::new(Deg(60.0), 1.0),
            ViewParameters::new(Vector3::zero(), Vector3::new(0.0, FRAC_PI_2, 0.0)),
        );
        view.get_view_projection_matrix();

        let ahead = *view.view_matrix() * Vector4::new(-1.0, 0.0, 0.0, 1.0);
        assert!(ahead.x.abs() < 1e-6);
        assert!(ahead.y.abs() < 1e-6);
        assert!((ahead.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_translates_before_turning() {
        // a quarter turn left from (0, 0, 5): the point one unit to world -X
        // of the camera sits straight ahead
        let mut view = View::new(
            ProjectionParameters::new(Deg(60.0), 1.0),
            ViewParameters::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, FRAC_PI_2, 0.0)),
        );
        let before = *view.get_view_projection_matrix();

        let ahead = *view.view_matrix() * Vector4::new(-1.0, 0.0, 5.0, 1.0);
        assert!((ahead - Vector4::new(0.0, 0.0, -1.0, 1.0)).magnitude2() < 1e-10);

        view.rotate(Vector3::zero());
        assert!(view.is_stale());
        assert_eq!(*view.get_view_projection_matrix(), before);
    }
}
