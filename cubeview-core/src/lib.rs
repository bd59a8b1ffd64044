/// cubeview core library - the six-faced cube model
///
/// Face attributes, the fixed layout that folds six panels into a cube,
/// gesture-driven transform updates, and the mesh/projection helpers the
/// rasterizing frontend draws with.

pub mod controller;
pub mod error;
pub mod face;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use controller::CubeController;
pub use error::CubeError;
pub use face::{Face, Rgb, EDGE_LENGTH};
pub use geometry::{Mesh, Triangle, Vertex};
pub use gesture::{GestureState, PAN_DIVISOR};
pub use layout::{cube_layout, face_transform};
pub use projection::{Camera, ProjectionMode};
pub use transform::Transform;
