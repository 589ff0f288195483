pub mod camera_controller;
pub mod camera_utils;
pub mod view;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{CameraManager, CameraUniform};
pub use view::{ProjectionParameters, View, ViewParameters};
