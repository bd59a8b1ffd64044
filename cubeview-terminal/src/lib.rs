/// Terminal frontend: mouse drag rotates the cube, scroll wheel scales it
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use cubeview_core::{Camera, CubeController, GestureState, Mesh, ProjectionMode, EDGE_LENGTH};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::debug;

pub mod config;
pub mod input;
pub mod renderer;

pub use config::ViewerConfig;
pub use input::GestureInput;
pub use renderer::AsciiRenderer;

/// Drag distance, in points, the idle spin advances per frame
const SPIN_POINTS_PER_FRAME: f32 = 0.6;

/// Rows reserved for the status line
const STATUS_ROWS: u16 = 1;

/// Main application struct for terminal cube viewing
pub struct TerminalApp {
    config: ViewerConfig,
    mesh: Mesh,
    controller: CubeController,
    input: GestureInput,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: ViewerConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let height = height.saturating_sub(STATUS_ROWS).max(1);

        let mut camera = Camera::framing(EDGE_LENGTH, width as u32, height as u32);
        if config.orthographic {
            camera.mode = ProjectionMode::Orthographic;
        }

        Ok(Self {
            input: GestureInput::new(config.points_per_cell, config.zoom_step),
            config,
            mesh: Mesh::cube(),
            controller: CubeController::new(),
            camera,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        execute!(stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / self.config.target_fps.max(1) as u64);
        debug!(fps = self.config.target_fps, "render loop started");

        while self.running {
            let frame_start = Instant::now();

            // Drain pending input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        debug!("render loop stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('r') => {
                    debug!("transform reset");
                    self.input.cancel(&mut self.controller);
                    self.controller.reset();
                }
                other => self.input.handle_key(other, &mut self.controller),
            },
            Event::Mouse(mouse) => self.input.handle_mouse(&mouse, &mut self.controller),
            Event::Resize(width, height) => {
                let height = height.saturating_sub(STATUS_ROWS).max(1);
                debug!(width, height, "terminal resized");
                self.renderer.resize(width as usize, height as usize);
                self.camera.set_viewport(width as u32, height as u32);
            }
            _ => {}
        }
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        if self.config.spin && !self.input.is_active() {
            self.controller.handle_pan(GestureState::Began, 0.0, 0.0);
            self.controller
                .handle_pan(GestureState::Changed, SPIN_POINTS_PER_FRAME, 0.0);
            self.controller
                .handle_pan(GestureState::Ended, SPIN_POINTS_PER_FRAME, 0.0);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let model = *self.controller.transform();

        // Clear renderer
        self.renderer.clear();

        // Render mesh
        self.renderer.render_mesh(&self.mesh, &model, &self.camera);
        self.renderer.render_labels(&model, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, STATUS_ROWS))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "cubeview | FPS: {:.1} | Drag=Rotate Scroll=Scale Arrows=Nudge R=Reset Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
