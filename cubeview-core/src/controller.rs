/// Owner of the cube transform; applies gesture updates to it
use nalgebra::{Matrix4, Vector3};
use tracing::{debug, trace};

use crate::face::Face;
use crate::gesture::{pan_rotation, pinch_scale, GestureState};
use crate::layout::face_transform;

/// Holds the committed cube transform plus the live state of any gesture in
/// progress. Pan and pinch track their cumulative deltas separately, so the
/// two can overlap; a gesture's contribution is folded into the committed
/// transform only when it finishes.
#[derive(Debug, Clone)]
pub struct CubeController {
    base: Matrix4<f32>,
    pan: Option<(f32, f32)>,
    pinch: Option<f32>,
    transform: Matrix4<f32>,
}

impl CubeController {
    pub fn new() -> Self {
        Self::with_transform(Matrix4::identity())
    }

    pub fn with_transform(transform: Matrix4<f32>) -> Self {
        Self {
            base: transform,
            pan: None,
            pinch: None,
            transform,
        }
    }

    pub fn transform(&self) -> &Matrix4<f32> {
        &self.transform
    }

    /// Uniform scale currently applied to the cube
    pub fn scale(&self) -> f32 {
        self.transform.transform_vector(&Vector3::x()).norm()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Drag handler; `(dx, dy)` is the translation since the drag began
    pub fn handle_pan(&mut self, state: GestureState, dx: f32, dy: f32) {
        match state {
            GestureState::Began => {
                debug!(gesture = "pan", "gesture began");
                self.commit_pan();
            }
            GestureState::Changed => self.pan = Some((dx, dy)),
            state if state.is_terminal() => {
                debug!(gesture = "pan", ?state, "gesture finished");
                self.commit_pan();
            }
            _ => return,
        }
        self.update();
    }

    /// Pinch handler; `factor` is the scale since the pinch began
    pub fn handle_pinch(&mut self, state: GestureState, factor: f32) {
        match state {
            GestureState::Began => {
                debug!(gesture = "pinch", "gesture began");
                self.commit_pinch();
            }
            GestureState::Changed => self.pinch = Some(factor),
            state if state.is_terminal() => {
                debug!(gesture = "pinch", ?state, "gesture finished");
                self.commit_pinch();
            }
            _ => return,
        }
        self.update();
    }

    fn commit_pan(&mut self) {
        if let Some((dx, dy)) = self.pan.take() {
            self.base *= pan_rotation(dx, dy);
        }
    }

    fn commit_pinch(&mut self) {
        if let Some(factor) = self.pinch.take() {
            self.base *= pinch_scale(factor);
        }
    }

    fn update(&mut self) {
        let mut transform = self.base;
        if let Some((dx, dy)) = self.pan {
            transform *= pan_rotation(dx, dy);
        }
        if let Some(factor) = self.pinch {
            transform *= pinch_scale(factor);
        }
        self.transform = transform;
        trace!(transform = ?self.transform, "transform updated");
    }

    /// World transform of a single face: cube transform applied on top of
    /// the face layout
    pub fn face_world_transform(&self, face: Face) -> Matrix4<f32> {
        self.transform * face_transform(face)
    }

    pub fn face_world_transforms(&self) -> [(Face, Matrix4<f32>); 6] {
        Face::ALL.map(|face| (face, self.face_world_transform(face)))
    }
}

impl Default for CubeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::EDGE_LENGTH;
    use crate::transform::Transform;
    use nalgebra::Point3;

    fn prior() -> Matrix4<f32> {
        Transform::rotation_x(0.3) * Transform::uniform_scale(1.5)
    }

    #[test]
    fn test_pan_of_ninety_points_is_one_radian_about_y() {
        let mut controller = CubeController::with_transform(prior());
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, 90.0, 0.0);

        let expected = prior() * Matrix4::from_axis_angle(&Vector3::y_axis(), 1.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_pinch_of_two_scales_every_axis() {
        let mut controller = CubeController::new();
        controller.handle_pinch(GestureState::Began, 1.0);
        controller.handle_pinch(GestureState::Changed, 2.0);

        let m = controller.transform();
        assert!((m.transform_vector(&Vector3::x()) - Vector3::x() * 2.0).norm() < 1e-6);
        assert!((m.transform_vector(&Vector3::y()) - Vector3::y() * 2.0).norm() < 1e-6);
        assert!((m.transform_vector(&Vector3::z()) - Vector3::z() * 2.0).norm() < 1e-6);
    }

    #[test]
    fn test_pinch_composes_onto_prior() {
        let mut controller = CubeController::with_transform(prior());
        controller.handle_pinch(GestureState::Began, 1.0);
        controller.handle_pinch(GestureState::Changed, 2.0);

        let expected = prior() * Transform::uniform_scale(2.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_pan_updates_are_cumulative_within_gesture() {
        let mut controller = CubeController::new();
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, 30.0, 0.0);
        controller.handle_pan(GestureState::Changed, 60.0, 0.0);
        controller.handle_pan(GestureState::Changed, 90.0, 0.0);

        assert!((controller.transform() - Transform::rotation_y(1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_second_gesture_builds_on_first() {
        let mut controller = CubeController::new();
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, 90.0, 0.0);
        controller.handle_pan(GestureState::Ended, 90.0, 0.0);

        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, 90.0, 0.0);

        assert!((controller.transform() - Transform::rotation_y(2.0)).norm() < 1e-5);
    }

    #[test]
    fn test_non_changed_states_leave_transform_alone() {
        let mut controller = CubeController::with_transform(prior());
        for state in [
            GestureState::Possible,
            GestureState::Began,
            GestureState::Ended,
            GestureState::Cancelled,
            GestureState::Failed,
        ] {
            controller.handle_pan(state, 45.0, 45.0);
            controller.handle_pinch(state, 3.0);
            assert_eq!(*controller.transform(), prior());
        }
    }

    #[test]
    fn test_changed_without_began_uses_current_transform() {
        let mut controller = CubeController::with_transform(prior());
        controller.handle_pinch(GestureState::Changed, 2.0);
        controller.handle_pinch(GestureState::Changed, 2.0);

        let expected = prior() * Transform::uniform_scale(2.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
    }

    #[test]
    fn test_pinch_during_pan_does_not_repeat_rotation() {
        let mut controller = CubeController::new();
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, 45.0, 0.0);
        controller.handle_pinch(GestureState::Began, 1.0);
        controller.handle_pinch(GestureState::Changed, 1.0);
        controller.handle_pinch(GestureState::Ended, 1.0);
        controller.handle_pan(GestureState::Changed, 90.0, 0.0);

        assert!((controller.transform() - Transform::rotation_y(1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_overlapping_pan_and_pinch_combine() {
        let mut controller = CubeController::new();
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pinch(GestureState::Began, 1.0);
        controller.handle_pan(GestureState::Changed, 90.0, 0.0);
        controller.handle_pinch(GestureState::Changed, 2.0);

        let expected = Transform::rotation_y(1.0) * Transform::uniform_scale(2.0);
        assert!((controller.transform() - expected).norm() < 1e-6);

        controller.handle_pan(GestureState::Ended, 90.0, 0.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
        controller.handle_pinch(GestureState::Cancelled, 2.0);
        assert!((controller.transform() - expected).norm() < 1e-6);
        assert!((controller.scale() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_reset() {
        let mut controller = CubeController::with_transform(prior());
        controller.reset();
        assert_eq!(*controller.transform(), Matrix4::identity());
    }

    #[test]
    fn test_face_world_transform_follows_cube() {
        let mut controller = CubeController::new();
        controller.handle_pan(GestureState::Began, 0.0, 0.0);
        controller.handle_pan(GestureState::Changed, 90.0 * std::f32::consts::FRAC_PI_2, 0.0);

        // A quarter turn about Y brings the front face to the right side
        let center = controller
            .face_world_transform(Face::Front)
            .transform_point(&Point3::origin());
        let expected = Point3::new(EDGE_LENGTH / 2.0, 0.0, 0.0);
        assert!((center - expected).norm() < 1e-3);
    }

    #[test]
    fn test_face_world_transforms_cover_all_faces() {
        let controller = CubeController::new();
        let transforms = controller.face_world_transforms();
        for (i, (face, m)) in transforms.iter().enumerate() {
            assert_eq!(*face, Face::ALL[i]);
            assert!((m - face_transform(*face)).norm() < 1e-6);
        }
    }
}
