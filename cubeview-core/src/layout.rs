/// Placement of the six panels around the cube center
use nalgebra::Matrix4;
use std::f32::consts::{FRAC_PI_2, PI};

use crate::face::Face;
use crate::transform::Transform;

/// Local transform that moves a panel authored in the XY plane (facing +Z)
/// onto its side of the cube.
pub fn face_transform(face: Face) -> Matrix4<f32> {
    let half = face.edge_length() / 2.0;

    let rotation = match face {
        Face::Front => Transform::rotation_y(0.0),
        Face::Back => Transform::rotation_y(PI),
        Face::Left => Transform::rotation_y(-FRAC_PI_2),
        Face::Right => Transform::rotation_y(FRAC_PI_2),
        Face::Top => Transform::rotation_x(-FRAC_PI_2),
        Face::Bottom => Transform::rotation_x(FRAC_PI_2),
    };

    let offset = face.normal() * half;
    Transform::translation_matrix(offset.x, offset.y, offset.z) * rotation
}

/// Layout transforms for every face, in `Face::ALL` order
pub fn cube_layout() -> [(Face, Matrix4<f32>); 6] {
    Face::ALL.map(|face| (face, face_transform(face)))
}
