/// Terminal input translated into viewer events
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::io;
use std::time::Duration;
use vecspace_core::{EventSource, InputEvent, Viewport};

use crate::renderer::SharedGrid;

/// Convert a cell position to viewport pixels, using the cell centre
pub fn cell_to_pixels(
    column: u16,
    row: u16,
    grid: (u16, u16),
    viewport: &Viewport,
) -> (i32, i32) {
    let (cols, rows) = (grid.0.max(1) as f32, grid.1.max(1) as f32);
    let x = (column as f32 + 0.5) * viewport.width / cols;
    let y = (row as f32 + 0.5) * viewport.height / rows;
    (x as i32, y as i32)
}

/// Map one terminal event onto a viewer event, if it has one
pub fn translate(event: &Event, grid: (u16, u16), viewport: &Viewport) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(InputEvent::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            // Key symbols are unshifted, so 'W' and Caps Lock still read as 'w'
            KeyCode::Char(symbol) => Some(InputEvent::KeyDown {
                symbol: symbol.to_ascii_lowercase(),
            }),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
            column,
            row,
            ..
        }) => {
            let (x, y) = cell_to_pixels(*column, *row, grid, viewport);
            Some(InputEvent::MouseMotion { x, y })
        }
        Event::Resize(cols, rows) if *cols == 0 || *rows == 0 => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Non-blocking [`EventSource`] over crossterm's event queue
pub struct TerminalEvents {
    grid: SharedGrid,
    viewport: Viewport,
}

impl TerminalEvents {
    pub fn new(grid: SharedGrid, viewport: Viewport) -> Self {
        Self { grid, viewport }
    }
}

impl EventSource for TerminalEvents {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            if let Event::Resize(cols, rows) = raw {
                log::debug!("Terminal resized to {cols}x{rows}");
                self.grid.set((cols, rows));
            }
            if let Some(input) = translate(&raw, self.grid.get(), &self.viewport) {
                return Ok(Some(input));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecspace_core::{Controls, FrameTransform};

    const GRID: (u16, u16) = (80, 30);

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cell_to_pixels() {
        let viewport = Viewport::default();
        assert_eq!(cell_to_pixels(0, 0, GRID, &viewport), (5, 10));
        assert_eq!(cell_to_pixels(40, 15, GRID, &viewport), (405, 310));
        assert_eq!(cell_to_pixels(79, 29, GRID, &viewport), (795, 590));
    }

    #[test]
    fn test_keys() {
        let viewport = Viewport::default();
        let w = translate(&key(KeyCode::Char('w'), KeyModifiers::NONE), GRID, &viewport);
        assert_eq!(w, Some(InputEvent::KeyDown { symbol: 'w' }));

        for quit in [
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert_eq!(translate(&quit, GRID, &viewport), Some(InputEvent::Quit));
        }

        let arrow = translate(&key(KeyCode::Up, KeyModifiers::NONE), GRID, &viewport);
        assert_eq!(arrow, None);
    }

    #[test]
    fn test_shifted_letters_are_lowercased() {
        let viewport = Viewport::default();
        let shifted = translate(&key(KeyCode::Char('W'), KeyModifiers::SHIFT), GRID, &viewport);
        assert_eq!(shifted, Some(InputEvent::KeyDown { symbol: 'w' }));

        let caps = translate(&key(KeyCode::Char('S'), KeyModifiers::NONE), GRID, &viewport);
        assert_eq!(caps, Some(InputEvent::KeyDown { symbol: 's' }));

        let punct = translate(&key(KeyCode::Char('!'), KeyModifiers::SHIFT), GRID, &viewport);
        assert_eq!(punct, Some(InputEvent::KeyDown { symbol: '!' }));
    }

    #[test]
    fn test_shift_w_moves_depth() {
        let viewport = Viewport::default();
        let controls = Controls::default();
        let mut transform = FrameTransform::default();
        let event = translate(&key(KeyCode::Char('W'), KeyModifiers::SHIFT), GRID, &viewport);
        controls.apply(&event.unwrap(), &mut transform);
        assert!((transform.translation().z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(translate(&release, GRID, &Viewport::default()), None);
    }

    #[test]
    fn test_mouse_motion() {
        let viewport = Viewport::default();
        let moved = translate(&mouse(MouseEventKind::Moved, 40, 15), GRID, &viewport);
        assert_eq!(moved, Some(InputEvent::MouseMotion { x: 405, y: 310 }));

        let dragged = mouse(MouseEventKind::Drag(event::MouseButton::Left), 0, 0);
        assert_eq!(
            translate(&dragged, GRID, &viewport),
            Some(InputEvent::MouseMotion { x: 5, y: 10 })
        );

        let click = mouse(MouseEventKind::Down(event::MouseButton::Left), 3, 3);
        assert_eq!(translate(&click, GRID, &viewport), None);
    }

    #[test]
    fn test_resize() {
        let viewport = Viewport::default();
        assert_eq!(translate(&Event::Resize(100, 40), GRID, &viewport), None);
        assert_eq!(
            translate(&Event::Resize(0, 40), GRID, &viewport),
            Some(InputEvent::Quit)
        );
    }
}
