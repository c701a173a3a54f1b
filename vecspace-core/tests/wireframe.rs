use std::collections::VecDeque;
use std::io;

use approx::assert_relative_eq;
use vecspace_core::projection::look_at;
use vecspace_core::{
    Camera, EventSource, InputEvent, Mat4, Mesh, Rgba, Surface, Vec2, Vec3, ViewMode, Viewer,
    ViewerConfig, Viewport,
};

struct Queue(VecDeque<InputEvent>);

impl EventSource for Queue {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        Ok(self.0.pop_front())
    }
}

#[derive(Default)]
struct Lines(Vec<(Vec2, Vec2)>);

impl Surface for Lines {
    fn clear(&mut self, _color: Rgba) {
        self.0.clear();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, _color: Rgba) {
        self.0.push((from, to));
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn cube_viewer(config: &ViewerConfig) -> Viewer {
    Viewer::new(vec![Mesh::cube()], config)
}

#[test]
fn default_frame_matches_hand_computed_pixels() {
    let mut viewer = cube_viewer(&ViewerConfig::default());
    let mut surface = Lines::default();
    viewer
        .frame(&mut Queue(VecDeque::new()), &mut surface)
        .unwrap();

    // x' = x and y' = y under the default projection, then x*800+400, -y*600+300
    let expected = [
        Vec2::new(-400.0, -300.0),
        Vec2::new(1200.0, -300.0),
        Vec2::new(-400.0, 900.0),
        Vec2::new(-400.0, 900.0),
        Vec2::new(-400.0, -300.0),
        Vec2::new(1200.0, -300.0),
        Vec2::new(1200.0, 900.0),
        Vec2::new(1200.0, 900.0),
    ];
    assert_eq!(surface.0.len(), expected.len() - 1);
    for (i, (from, to)) in surface.0.iter().enumerate() {
        assert_relative_eq!(*from, expected[i]);
        assert_relative_eq!(*to, expected[i + 1]);
    }
}

#[test]
fn pointer_and_depth_input_accumulate_across_frames() {
    let mut viewer = cube_viewer(&ViewerConfig::default());
    let mut surface = Lines::default();

    let mut events = Queue(VecDeque::from(vec![
        InputEvent::MouseMotion { x: 500, y: 400 },
        InputEvent::KeyDown { symbol: 'w' },
        InputEvent::KeyDown { symbol: 'w' },
    ]));
    viewer.frame(&mut events, &mut surface).unwrap();

    events.0.extend([
        InputEvent::KeyDown { symbol: 'w' },
        InputEvent::KeyDown { symbol: 's' },
        InputEvent::KeyDown { symbol: 'x' },
    ]);
    viewer.frame(&mut events, &mut surface).unwrap();

    assert_relative_eq!(
        viewer.transform().translation(),
        Vec3::new(1.0, 1.0, 0.2),
        epsilon = 1e-6
    );
    assert_relative_eq!(surface.0[0].0, Vec2::new(400.0, -900.0));
}

#[test]
fn run_stops_after_quit_frame() {
    let mut viewer = cube_viewer(&ViewerConfig::default());
    let mut surface = Lines::default();
    let mut events = Queue(VecDeque::from(vec![InputEvent::Quit]));

    let frames = viewer.run(&mut events, &mut surface).unwrap();

    assert_eq!(frames, 1);
    assert_eq!(surface.0.len(), 7);
}

#[test]
fn look_at_view_shifts_the_cube() {
    let config = ViewerConfig {
        view_mode: ViewMode::LookAt,
        camera: Camera::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 0.0),
        ),
        ..ViewerConfig::default()
    };
    let viewer = cube_viewer(&config);
    let view_projection = viewer.projector().view_projection();
    assert_relative_eq!(view_projection.view, look_at(&config.camera).unwrap());
    assert_relative_eq!(view_projection.view[(0, 3)], -1.0);
    assert_ne!(view_projection.view, Mat4::identity());
    assert_eq!(*viewer.projector().viewport(), Viewport::default());

    let mut surface = Lines::default();
    viewer.render(&mut surface);

    // The view acts on the projected point, so its -1 x translation is
    // scaled by w = -z = -2 before reaching device space
    assert_relative_eq!(surface.0[0].0, Vec2::new(1200.0, -300.0), epsilon = 1e-3);
}
