/// ASCII rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cubeview_core::{face_transform, Camera, Face, Mesh, Rgb, Triangle};
use nalgebra::{Matrix4, Point3, Vector3};
use std::io::Write;

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Lowest ramp entry used for a visible face, so panels seen edge-on stay visible
const MIN_RAMP_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    color: Option<Rgb>,
    face: Option<Face>,
}

impl Cell {
    const EMPTY: Cell = Cell {
        character: ' ',
        color: None,
        face: None,
    };
}

/// ASCII renderer that converts the cube mesh to colored terminal characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    cells: Vec<Cell>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            cells: vec![Cell::EMPTY; size],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.cells.fill(Cell::EMPTY);
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for triangle in &mesh.triangles {
            self.render_triangle(triangle, model_matrix, camera);
        }
    }

    fn render_triangle(&mut self, triangle: &Triangle, model_matrix: &Matrix4<f32>, camera: &Camera) {
        // Back faces are hidden by the closed cube
        let world_normal = model_matrix.transform_vector(&triangle.calculate_normal());
        let world_centroid = model_matrix.transform_point(&triangle.centroid());
        if !camera.faces_camera(&world_centroid, &world_normal) {
            return;
        }

        // Project vertices to screen space
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (slot, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match camera.project_to_screen(
                &vertex.position,
                model_matrix,
                self.width as u32,
                self.height as u32,
            ) {
                Some(coords) => *slot = coords,
                None => return, // Triangle is clipped
            }
        }

        // Shade by how directly the face looks at the camera
        let to_camera = (camera.position - world_centroid).normalize();
        let brightness = world_normal.normalize().dot(&to_camera).clamp(0.0, 1.0);

        let span = (LUMINOSITY_RAMP.len() - 1 - MIN_RAMP_INDEX) as f32;
        let char_index = MIN_RAMP_INDEX + (brightness * span).round() as usize;
        let character = LUMINOSITY_RAMP[char_index.min(LUMINOSITY_RAMP.len() - 1)];

        let cell = Cell {
            character,
            color: Some(shade(triangle.face.color(), brightness)),
            face: Some(triangle.face),
        };

        // Rasterize triangle using scanline algorithm
        self.rasterize_triangle(&screen_coords, cell);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], cell: Cell) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) = barycentric(
                    (v0.0, v0.1),
                    (v1.0, v1.1),
                    (v2.0, v2.1),
                    (px, py),
                ) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.cells[idx] = cell;
                        }
                    }
                }
            }
        }
    }

    /// Print each visible face's label over the middle of the panel
    pub fn render_labels(&mut self, model_matrix: &Matrix4<f32>, camera: &Camera) {
        for face in Face::ALL {
            let Some(label) = face.label() else {
                continue;
            };

            let placement = model_matrix * face_transform(face);
            let center = placement.transform_point(&Point3::origin());
            let normal = placement.transform_vector(&Vector3::z());
            if !camera.faces_camera(&center, &normal) {
                continue;
            }

            let Some((x, y, _)) = camera.project_to_screen(
                &Point3::origin(),
                &placement,
                self.width as u32,
                self.height as u32,
            ) else {
                continue;
            };

            let row = y.round() as i64;
            let start = x.round() as i64 - label.chars().count() as i64 / 2;
            for (i, character) in label.chars().enumerate() {
                self.put_label_char(face, start + i as i64, row, character);
            }
        }
    }

    fn put_label_char(&mut self, face: Face, x: i64, y: i64, character: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        // Only over the face's own cells
        let cell = &mut self.cells[idx];
        if cell.face == Some(face) {
            cell.character = character;
            cell.color = Some(Rgb::new(255, 255, 255));
        }
    }

    /// Character at a cell, for inspection
    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x].character
    }

    /// Color drawn at a cell, if any
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.cells[y * self.width + x].color
    }

    /// Face covering a cell, if any
    pub fn face_at(&self, x: usize, y: usize) -> Option<Face> {
        self.cells[y * self.width + x].face
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<Option<Rgb>> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];

                if current != Some(cell.color) {
                    let color = match cell.color {
                        Some(rgb) => Color::Rgb {
                            r: rgb.r,
                            g: rgb.g,
                            b: rgb.b,
                        },
                        None => Color::DarkGrey,
                    };
                    writer.queue(SetForegroundColor(color))?;
                    current = Some(cell.color);
                }

                writer.queue(Print(cell.character))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Darken a face color toward half intensity as it turns away
fn shade(color: Rgb, brightness: f32) -> Rgb {
    let factor = 0.5 + 0.5 * brightness;
    let scale = |channel: u8| (channel as f32 * factor).round().min(255.0) as u8;
    Rgb::new(scale(color.r), scale(color.g), scale(color.b))
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
