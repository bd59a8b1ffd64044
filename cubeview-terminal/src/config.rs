/// Runtime options for the terminal viewer

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Frame rate the render loop aims for
    pub target_fps: u32,
    /// Points of drag represented by one terminal column
    pub points_per_cell: f32,
    /// Pinch factor applied per scroll notch
    pub zoom_step: f32,
    /// Turn the cube slowly while no gesture is active
    pub spin: bool,
    /// Orthographic instead of perspective projection
    pub orthographic: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            points_per_cell: 4.0,
            zoom_step: 1.1,
            spin: false,
            orthographic: false,
        }
    }
}

pub const USAGE: &str = "Usage: cubeview-terminal [--fps N] [--cell-points X] [--zoom-step X] [--spin] [--ortho]";

impl ViewerConfig {
    /// Parse command line arguments (without the program name)
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fps" => {
                    config.target_fps = parse_value(&arg, args.next())?;
                    if config.target_fps == 0 {
                        return Err("--fps must be at least 1".to_string());
                    }
                }
                "--cell-points" => {
                    config.points_per_cell = parse_value(&arg, args.next())?;
                    if !(config.points_per_cell > 0.0) {
                        return Err("--cell-points must be positive".to_string());
                    }
                }
                "--zoom-step" => {
                    config.zoom_step = parse_value(&arg, args.next())?;
                    if !(config.zoom_step > 1.0) {
                        return Err("--zoom-step must be greater than 1".to_string());
                    }
                }
                "--spin" => config.spin = true,
                "--ortho" => config.orthographic = true,
                other => return Err(format!("Unknown argument: {}\n{}", other, USAGE)),
            }
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} expects a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}
