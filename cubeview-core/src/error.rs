/// Errors raised at the boundary where platform input enters the core
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CubeError {
    /// A gesture recognizer reported a state code outside `0..=5`
    UnknownGestureState(u32),
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::UnknownGestureState(code) => {
                write!(f, "unknown gesture recognizer state: {}", code)
            }
        }
    }
}

impl std::error::Error for CubeError {}
