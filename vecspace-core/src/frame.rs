/// Frame loop and the collaborators it draws to and reads from
use std::io;
use std::time::{Duration, Instant};

use crate::config::ViewerConfig;
use crate::geometry::Mesh;
use crate::input::{Controls, Flow, InputEvent};
use crate::math::{Vec2, Vec3};
use crate::pipeline::Projector;
use crate::transform::FrameTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 0xff);
    pub const WHITE: Rgba = Rgba::new(0xff, 0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Non-blocking source of input events
pub trait EventSource {
    /// Next pending event, or `None` when nothing is queued
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;
}

/// Something lines can be drawn on, in pixel coordinates
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
    fn present(&mut self) -> io::Result<()>;

    /// Current frame translation, offered once per frame before present
    fn show_translation(&mut self, _translation: Vec3) {}
}

/// Owns the meshes and per-frame state and drives frames
pub struct Viewer {
    meshes: Vec<Mesh>,
    transform: FrameTransform,
    controls: Controls,
    projector: Projector,
    frame_time: Option<Duration>,
    running: bool,
}

impl Viewer {
    pub const CLEAR_COLOR: Rgba = Rgba::BLACK;
    pub const LINE_COLOR: Rgba = Rgba::WHITE;

    pub fn new(meshes: Vec<Mesh>, config: &ViewerConfig) -> Self {
        Self {
            meshes,
            transform: config.frame_transform(),
            controls: Controls::new(config.depth_step),
            projector: Projector::from_config(config),
            frame_time: config
                .max_fps
                .filter(|fps| *fps > 0)
                .map(|fps| Duration::from_secs(1) / fps),
            running: true,
        }
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn transform(&self) -> &FrameTransform {
        &self.transform
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drain every pending event into the frame transform
    pub fn handle_events<E: EventSource>(&mut self, events: &mut E) -> io::Result<()> {
        while let Some(event) = events.poll_event()? {
            if self.controls.apply(&event, &mut self.transform) == Flow::Quit {
                log::debug!("Quit requested");
                self.running = false;
            }
        }
        Ok(())
    }

    /// Clear the surface and draw every mesh as a line strip
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear(Self::CLEAR_COLOR);
        for mesh in &self.meshes {
            for (from, to) in self.projector.project_strip(mesh, &self.transform) {
                surface.draw_line(from, to, Self::LINE_COLOR);
            }
        }
        surface.show_translation(self.transform.translation());
    }

    /// One full frame: input, draw, present.
    ///
    /// A quit event still lets the current frame finish.
    pub fn frame<E: EventSource, S: Surface>(
        &mut self,
        events: &mut E,
        surface: &mut S,
    ) -> io::Result<()> {
        self.handle_events(events)?;
        self.render(surface);
        surface.present()
    }

    /// Run frames until a quit event arrives; returns the number of frames drawn
    pub fn run<E: EventSource, S: Surface>(
        &mut self,
        events: &mut E,
        surface: &mut S,
    ) -> io::Result<u64> {
        let mut frames = 0u64;

        while self.running {
            let frame_start = Instant::now();

            self.frame(events, surface)?;
            frames += 1;

            if let Some(target) = self.frame_time {
                let elapsed = frame_start.elapsed();
                if elapsed < target && self.running {
                    std::thread::sleep(target - elapsed);
                }
            }
        }

        log::debug!("Stopped after {frames} frames");
        Ok(frames)
    }
}
