/// Gesture recognizer states and the delta-to-transform mappings
use nalgebra::Matrix4;

use crate::error::CubeError;
use crate::transform::Transform;

/// Drag distance, in points, that turns the cube by one radian
pub const PAN_DIVISOR: f32 = 90.0;

/// State reported by a platform gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GestureState {
    /// Decode a recognizer state code (`0..=5`, declaration order)
    pub fn from_raw(code: u32) -> Result<Self, CubeError> {
        match code {
            0 => Ok(GestureState::Possible),
            1 => Ok(GestureState::Began),
            2 => Ok(GestureState::Changed),
            3 => Ok(GestureState::Ended),
            4 => Ok(GestureState::Cancelled),
            5 => Ok(GestureState::Failed),
            other => Err(CubeError::UnknownGestureState(other)),
        }
    }

    /// Whether the gesture has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GestureState::Ended | GestureState::Cancelled | GestureState::Failed
        )
    }
}

impl TryFrom<u32> for GestureState {
    type Error = CubeError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_raw(code)
    }
}

/// Rotation for a cumulative drag of `(dx, dy)` points.
/// Vertical drag turns about X, horizontal drag about Y.
pub fn pan_rotation(dx: f32, dy: f32) -> Matrix4<f32> {
    Transform::rotation_x(dy / PAN_DIVISOR) * Transform::rotation_y(dx / PAN_DIVISOR)
}

/// Uniform scale for a cumulative pinch factor
pub fn pinch_scale(factor: f32) -> Matrix4<f32> {
    Transform::uniform_scale(factor)
}
