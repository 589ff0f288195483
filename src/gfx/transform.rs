//! Rotation helpers shared by the camera and the scene primitives.
//!
//! Euler angles are always interpreted in the same fixed order: the rotation
//! about X is applied first, then Y, then Z. In quaternion form that is
//! `q = q_z * q_y * q_x`.

use cgmath::{Matrix4, Quaternion, Rad, Rotation3, Vector3};

/// Builds the rotation described by Euler angles `(x, y, z)` in radians.
pub fn euler_rotation(angles: Vector3<f32>) -> Quaternion<f32> {
    Quaternion::from_angle_z(Rad(angles.z))
        * Quaternion::from_angle_y(Rad(angles.y))
        * Quaternion::from_angle_x(Rad(angles.x))
}

/// Same as [`euler_rotation`], as a 4x4 matrix.
pub fn euler_rotation_matrix(angles: Vector3<f32>) -> Matrix4<f32> {
    Matrix4::from(euler_rotation(angles))
}
