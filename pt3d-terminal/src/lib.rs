/// Terminal front end for the pt3d pipeline
///
/// Thin I/O shell around the core: polls keyboard state into an
/// `InputState`, times the frame, hands both to the pipeline, and paints
/// the returned draw list with the glyph rasterizer.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use pt3d_core::{InputState, Mesh, Pipeline};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::GlyphRenderer;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    pipeline: Pipeline,
    renderer: GlyphRenderer,
    running: bool,
    last_tick: Instant,
    fps_window: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        Self::with_fov(mesh, pt3d_core::DEFAULT_FOV)
    }

    /// Like [`TerminalApp::new`] with an explicit vertical field of view
    /// in radians.
    pub fn with_fov(mesh: Mesh, fov: f32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            pipeline: Pipeline::with_fov(mesh, width as usize, height as usize, fov),
            renderer: GlyphRenderer::new(width as usize, height as usize),
            running: true,
            last_tick: Instant::now(),
            fps_window: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Freeze or resume the mesh spin.
    pub fn set_spin(&mut self, spin: bool) {
        self.pipeline.set_spin(spin);
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
        log::info!("frame loop finished");

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target
        self.last_tick = Instant::now();

        while self.running {
            let frame_start = Instant::now();
            let elapsed = frame_start.duration_since(self.last_tick).as_secs_f32();
            self.last_tick = frame_start;

            let input = self.poll_input()?;
            self.render(elapsed, &input)?;

            // Frame pacing
            let spent = frame_start.elapsed();
            if spent < target_frame_time {
                std::thread::sleep(target_frame_time - spent);
            }

            // Update FPS counter
            self.frame_count += 1;
            let window = self.fps_window.elapsed();
            if window.as_secs() >= 1 {
                self.fps = self.frame_count as f32 / window.as_secs_f32();
                self.frame_count = 0;
                self.fps_window = Instant::now();
            }
        }

        Ok(())
    }

    /// Drain pending key events into this tick's directional state.
    fn poll_input(&mut self) -> io::Result<InputState> {
        let mut input = InputState::default();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                    KeyCode::Char('w') => input.forward = true,
                    KeyCode::Char('s') => input.backward = true,
                    KeyCode::Char('a') => input.turn_left = true,
                    KeyCode::Char('d') => input.turn_right = true,
                    KeyCode::Up => input.up = true,
                    KeyCode::Down => input.down = true,
                    KeyCode::Left => input.left = true,
                    KeyCode::Right => input.right = true,
                    _ => {}
                }
            }
        }
        Ok(input)
    }

    fn render(&mut self, elapsed: f32, input: &InputState) -> io::Result<()> {
        let draw_list = self.pipeline.render_frame(elapsed, input);

        self.renderer.clear();
        for triangle in &draw_list {
            self.renderer.fill_triangle(triangle);
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout)?;

        // Status overlay
        let camera = self.pipeline.camera();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "pt3d | FPS: {:.1} | tris: {} | yaw: {:.2} | WASD=Move/Turn Arrows=Slide Q=Quit",
                self.fps,
                draw_list.len(),
                camera.yaw
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
