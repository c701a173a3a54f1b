/// Terminal front end for the vecspace wireframe viewer
use crossterm::{cursor, event, execute, terminal};
use std::cell::Cell;
use std::io::{self, stdout, Stdout};
use std::rc::Rc;
use vecspace_core::{Mesh, Vec3, Viewer, ViewerConfig};

pub mod events;
pub mod renderer;

pub use events::TerminalEvents;
pub use renderer::{LineCanvas, SharedGrid, TerminalSurface};

/// Configure `log` output through colog, overridable with `RUST_LOG`
pub fn init_logging() {
    #[cfg(debug_assertions)]
    let default_log_levels = (log::LevelFilter::Warn, log::LevelFilter::Info);
    #[cfg(not(debug_assertions))]
    let default_log_levels = (log::LevelFilter::Warn, log::LevelFilter::Warn);

    colog::basic_builder()
        .filter_level(default_log_levels.0)
        .filter_module("vecspace", default_log_levels.1)
        .filter_module("vecspace_core", default_log_levels.1)
        .filter_module("vecspace_terminal", default_log_levels.1)
        .parse_default_env()
        .init();
}

/// Default configuration for the terminal viewer
pub fn terminal_config() -> ViewerConfig {
    ViewerConfig {
        max_fps: Some(30),
        ..ViewerConfig::default()
    }
}

/// How a terminal run ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Finished { frames: u64, translation: Vec3 },
    /// The drawing surface could not be created; nothing was drawn
    NoSurface(String),
}

impl Outcome {
    /// Report the run. Called once the terminal has been restored so the
    /// lines do not land on the alternate screen.
    pub fn log(&self) {
        match self {
            Outcome::Finished {
                frames,
                translation,
            } => log::info!(
                "Stopped after {frames} frames, translation {:.2} {:.2} {:.2}",
                translation.x,
                translation.y,
                translation.z
            ),
            Outcome::NoSurface(e) => log::error!("Failed to create drawing surface: {e}"),
        }
    }
}

/// Keep the first error: the run's own, then each cleanup step's in order
fn finish<T>(result: io::Result<T>, cleanup: [io::Result<()>; 2]) -> io::Result<T> {
    let value = result?;
    for step in cleanup {
        step?;
    }
    Ok(value)
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    meshes: Vec<Mesh>,
    config: ViewerConfig,
}

impl TerminalApp {
    pub fn new(meshes: Vec<Mesh>, config: ViewerConfig) -> Self {
        Self { meshes, config }
    }

    /// Take over the terminal, run until quit and restore it.
    ///
    /// Failing to set up the terminal is an error; failing to build the
    /// drawing surface is logged and ends the run early.
    pub fn run(self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let setup = execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::SetTitle(&self.config.title),
            event::EnableMouseCapture,
            cursor::Hide
        );

        let result = setup.and_then(|_| self.main_loop());

        // Cleanup
        let restore = execute!(
            stdout(),
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let raw_mode = terminal::disable_raw_mode();

        let outcome = finish(result, [restore, raw_mode])?;
        outcome.log();
        Ok(())
    }

    fn main_loop(self) -> io::Result<Outcome> {
        let grid: SharedGrid = Rc::new(Cell::new(terminal::size()?));
        let viewport = self.config.viewport;

        let mut surface: TerminalSurface<Stdout> =
            match TerminalSurface::new(stdout(), grid.clone(), viewport) {
                Ok(surface) => surface,
                Err(e) => return Ok(Outcome::NoSurface(e)),
            };
        surface.set_title(self.config.title.as_str());

        let mut events = TerminalEvents::new(grid, viewport);
        let mut viewer = Viewer::new(self.meshes, &self.config);
        let frames = viewer.run(&mut events, &mut surface)?;

        Ok(Outcome::Finished {
            frames,
            translation: viewer.transform().translation(),
        })
    }
}
