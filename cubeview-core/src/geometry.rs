/// Geometry primitives for 3D rendering
use nalgebra::{Point3, Vector3};

use crate::face::Face;
use crate::layout::cube_layout;

/// A 3D vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}

/// A triangle belonging to one cube face
#[derive(Debug, Clone)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
    pub face: Face,
}

impl Triangle {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex, face: Face) -> Self {
        Self {
            vertices: [v0, v1, v2],
            face,
        }
    }

    /// Calculate the face normal from the triangle's vertices
    pub fn calculate_normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0].position;
        let v1 = self.vertices[1].position;
        let v2 = self.vertices[2].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        edge1.cross(&edge2).normalize()
    }

    pub fn centroid(&self) -> Point3<f32> {
        let sum = self.vertices[0].position.coords
            + self.vertices[1].position.coords
            + self.vertices[2].position.coords;
        Point3::from(sum / 3.0)
    }
}

/// A 3D mesh composed of triangles
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Two triangles per face, each face's square panel placed by the cube
    /// layout. Winding is counter-clockwise seen from outside.
    pub fn cube() -> Self {
        let mut mesh = Self::with_capacity(12);

        for (face, placement) in cube_layout() {
            let (width, height) = face.size();
            let (hw, hh) = (width / 2.0, height / 2.0);
            let normal = placement.transform_vector(&Vector3::z());

            let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
                .map(|(x, y)| Vertex::new(placement.transform_point(&Point3::new(x, y, 0.0)), normal));

            mesh.add_triangle(Triangle::new(corners[0], corners[1], corners[2], face));
            mesh.add_triangle(Triangle::new(corners[0], corners[2], corners[3], face));
        }

        mesh
    }

    pub fn triangles_for(&self, face: Face) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter().filter(move |t| t.face == face)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
