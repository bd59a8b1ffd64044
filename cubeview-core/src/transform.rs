/// 3D transformation matrices
use nalgebra::{Matrix4, Vector3};

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Rotation about the X axis (radians)
    pub fn rotation_x(angle: f32) -> Matrix4<f32> {
        Matrix4::from_axis_angle(&Vector3::x_axis(), angle)
    }

    /// Rotation about the Y axis (radians)
    pub fn rotation_y(angle: f32) -> Matrix4<f32> {
        Matrix4::from_axis_angle(&Vector3::y_axis(), angle)
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Create a scale matrix
    pub fn scale_matrix(sx: f32, sy: f32, sz: f32) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }

    pub fn uniform_scale(factor: f32) -> Matrix4<f32> {
        Self::scale_matrix(factor, factor, factor)
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * model
    }

    /// Re-express a Y-up transform in a Y-down screen frame (CSS, layer trees).
    /// Conjugating by the Y flip keeps the geometric meaning.
    pub fn to_y_down(matrix: &Matrix4<f32>) -> Matrix4<f32> {
        let flip = Self::scale_matrix(1.0, -1.0, 1.0);
        flip * matrix * flip
    }
}
