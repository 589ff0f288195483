//! # Application Configuration
//!
//! Plain settings structs with sensible defaults. Values are checked once by
//! [`AppConfig::validate`] before anything is built from them; the camera and
//! geometry code downstream trusts its inputs.
//!
//! ```
//! use u3d::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_title("u3d")
//!     .with_cylinder_resolution(48)
//!     .with_vsync(false);
//! assert!(config.validate().is_ok());
//! ```

use cgmath::{Deg, Vector3, Zero};

use crate::error::ConfigError;

/// How the window is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// A decorated window of `width` x `height` logical pixels
    Windowed,
    /// Borderless fullscreen on the monitor with this index, falling back to
    /// a window when that monitor does not exist.
    Fullscreen { monitor: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Logical size used in windowed mode
    pub width: u32,
    pub height: u32,
    pub mode: WindowMode,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "u3DEngine".to_string(),
            width: 700,
            height: 700,
            // second monitor when present, otherwise the 700x700 window
            mode: WindowMode::Fullscreen { monitor: 1 },
            vsync: true,
        }
    }
}

/// Initial camera placement and input sensitivity.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub field_of_view: Deg<f32>,
    pub position: Vector3<f32>,
    /// Euler angles in radians
    pub rotation: Vector3<f32>,
    /// World units per second
    pub move_speed: f32,
    /// Radians per second
    pub rotate_speed: f32,
    /// Field of view change in radians per second
    pub fov_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            field_of_view: Deg(60.0),
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            move_speed: 2.0,
            rotate_speed: 1.0,
            fov_speed: 0.5,
        }
    }
}

/// Which primitives the demo scene contains and where.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub cube_position: Vector3<f32>,
    /// Radians per second about each axis
    pub cube_spin: Vector3<f32>,
    pub cylinder_position: Vector3<f32>,
    pub cylinder_resolution: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cube_position: Vector3::new(-1.0, 0.0, -3.0),
            cube_spin: Vector3::new(0.0, 1.5, 1.5),
            cylinder_position: Vector3::new(1.2, 0.0, -3.0),
            cylinder_resolution: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

impl AppConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_window_mode(mut self, mode: WindowMode) -> Self {
        self.window.mode = mode;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.window.vsync = vsync;
        self
    }

    pub fn with_field_of_view(mut self, field_of_view: Deg<f32>) -> Self {
        self.camera.field_of_view = field_of_view;
        self
    }

    pub fn with_camera_position(mut self, position: Vector3<f32>) -> Self {
        self.camera.position = position;
        self
    }

    pub fn with_cylinder_resolution(mut self, resolution: u32) -> Self {
        self.scene.cylinder_resolution = resolution;
        self
    }

    pub fn with_cube_spin(mut self, spin: Vector3<f32>) -> Self {
        self.scene.cube_spin = spin;
        self
    }

    /// Checks every value the camera and geometry code assume to be valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::WindowSize {
                width: window.width,
                height: window.height,
            });
        }

        let fov = self.camera.field_of_view.0;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::FieldOfView(fov));
        }

        for (name, value) in [
            ("move_speed", self.camera.move_speed),
            ("rotate_speed", self.camera.rotate_speed),
            ("fov_speed", self.camera.fov_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Speed { name, value });
            }
        }

        if self.scene.cylinder_resolution < 3 {
            return Err(ConfigError::CylinderResolution(
                self.scene.cylinder_resolution,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(AppConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_window_targets_second_monitor() {
        let window = WindowConfig::default();
        assert_eq!(window.mode, WindowMode::Fullscreen { monitor: 1 });
        assert_eq!((window.width, window.height), (700, 700));
        assert!(window.vsync);
    }

    #[test]
    fn test_rejects_small_cylinder_resolution() {
        let config = AppConfig::default().with_cylinder_resolution(2);
        assert_eq!(config.validate(), Err(ConfigError::CylinderResolution(2)));
        assert!(AppConfig::default()
            .with_cylinder_resolution(3)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_field_of_view_out_of_range() {
        for fov in [0.0, -10.0, 180.0, f32::NAN] {
            let config = AppConfig::default().with_field_of_view(Deg(fov));
            assert!(matches!(config.validate(), Err(ConfigError::FieldOfView(_))));
        }
    }

    #[test]
    fn test_rejects_empty_window() {
        let config = AppConfig::default().with_window_size(800, 0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::WindowSize {
                width: 800,
                height: 0
            })
        );
    }

    #[test]
    fn test_rejects_negative_speed() {
        let mut config = AppConfig::default();
        config.camera.rotate_speed = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Speed {
                name: "rotate_speed",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_builders_apply() {
        let config = AppConfig::default()
            .with_title("demo")
            .with_window_mode(WindowMode::Windowed)
            .with_vsync(false)
            .with_camera_position(Vector3::new(0.0, 1.0, 2.0));

        assert_eq!(config.window.title, "demo");
        assert_eq!(config.window.mode, WindowMode::Windowed);
        assert!(!config.window.vsync);
        assert_eq!(config.camera.position, Vector3::new(0.0, 1.0, 2.0));
    }
}
