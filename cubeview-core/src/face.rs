/// The six panels of the cube and their fixed attributes
use nalgebra::Vector3;

/// Edge length shared by every face, in points
pub const EDGE_LENGTH: f32 = 200.0;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` notation
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    pub fn edge_length(&self) -> f32 {
        EDGE_LENGTH
    }

    /// Width and height of the panel
    pub fn size(&self) -> (f32, f32) {
        (self.edge_length(), self.edge_length())
    }

    pub fn color(&self) -> Rgb {
        match self {
            Face::Front => Rgb::new(220, 50, 47),
            Face::Back => Rgb::new(133, 153, 0),
            Face::Left => Rgb::new(38, 139, 210),
            Face::Right => Rgb::new(181, 137, 0),
            Face::Top => Rgb::new(211, 54, 130),
            Face::Bottom => Rgb::new(42, 161, 152),
        }
    }

    /// Text drawn on the panel. Top and bottom are plain.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Face::Front => Some("Front"),
            Face::Back => Some("Back"),
            Face::Left => Some("Left"),
            Face::Right => Some("Right"),
            Face::Top | Face::Bottom => None,
        }
    }

    /// Unit vector pointing out of the cube through this face
    pub fn normal(&self) -> Vector3<f32> {
        match self {
            Face::Front => Vector3::z(),
            Face::Back => -Vector3::z(),
            Face::Left => -Vector3::x(),
            Face::Right => Vector3::x(),
            Face::Top => Vector3::y(),
            Face::Bottom => -Vector3::y(),
        }
    }
}
