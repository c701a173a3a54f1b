/// Line rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use vecspace_core::{Rgba, Surface, Vec2, Vec3, Viewport};

/// Glyph used for every lit cell
const LINE_GLYPH: char = '#';

const CONTROLS_HINT: &str = "Mouse=Move W/S=Depth Q/Esc=Quit";

/// Terminal size in cells, shared between the event source and the surface
pub type SharedGrid = Rc<Cell<(u16, u16)>>;

/// Character grid that lines are rasterized into.
///
/// Lines arrive in viewport pixels and are scaled onto the cell grid.
pub struct LineCanvas {
    cols: usize,
    rows: usize,
    viewport: Viewport,
    background: Rgba,
    cells: Vec<Option<Rgba>>,
}

impl LineCanvas {
    pub fn new(cols: usize, rows: usize, viewport: Viewport) -> Result<Self, String> {
        if cols == 0 || rows == 0 {
            return Err(format!("Cannot create a {cols}x{rows} canvas"));
        }

        Ok(Self {
            cols,
            rows,
            viewport,
            background: Rgba::BLACK,
            cells: vec![None; cols * rows],
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Rgba> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self, background: Rgba) {
        self.background = background;
        self.cells.fill(None);
    }

    /// Resize the grid, dropping its contents. Zero-sized requests are ignored.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        if cols == 0 || rows == 0 || (cols, rows) == (self.cols, self.rows) {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; cols * rows];
    }

    fn to_cell_space(&self, p: Vec2) -> (f32, f32) {
        (
            p.x * self.cols as f32 / self.viewport.width,
            p.y * self.rows as f32 / self.viewport.height,
        )
    }

    /// Rasterize a line given in viewport pixels
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        let a = self.to_cell_space(from);
        let b = self.to_cell_space(to);

        // Cell centres sit at integer coordinates after flooring, so clip to the
        // half-open cell range shrunk just inside the last cell
        let max_x = self.cols as f32 - 1e-3;
        let max_y = self.rows as f32 - 1e-3;
        let Some((a, b)) = clip_line(a, b, (0.0, 0.0), (max_x, max_y)) else {
            return;
        };

        let (cols, rows) = (self.cols, self.rows);
        let cells = &mut self.cells;
        bresenham(
            (a.0.floor() as i32, a.1.floor() as i32),
            (b.0.floor() as i32, b.1.floor() as i32),
            |x, y| {
                if x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows {
                    cells[y as usize * cols + x as usize] = Some(color);
                }
            },
        );
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.queue(SetBackgroundColor(to_color(self.background)))?;
        let mut current: Option<Rgba> = None;

        for y in 0..self.rows {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.cols {
                match self.cells[y * self.cols + x] {
                    Some(color) => {
                        if current != Some(color) {
                            writer.queue(SetForegroundColor(to_color(color)))?;
                            current = Some(color);
                        }
                        writer.queue(Print(LINE_GLYPH))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Clip a segment to an axis-aligned box (Liang–Barsky).
///
/// Returns `None` when the segment misses the box or has non-finite ends.
fn clip_line(
    a: (f32, f32),
    b: (f32, f32),
    min: (f32, f32),
    max: (f32, f32),
) -> Option<((f32, f32), (f32, f32))> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }

    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    for (p, q) in [
        (-dx, a.0 - min.0),
        (dx, max.0 - a.0),
        (-dy, a.1 - min.1),
        (dy, max.1 - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        (a.0 + t0 * dx, a.1 + t0 * dy),
        (a.0 + t1 * dx, a.1 + t1 * dy),
    ))
}

/// Bresenham's line algorithm, endpoints included
fn bresenham(from: (i32, i32), to: (i32, i32), mut plot: impl FnMut(i32, i32)) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x, y);
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// [`Surface`] that presents a [`LineCanvas`] to a terminal writer
pub struct TerminalSurface<W: Write> {
    canvas: LineCanvas,
    writer: W,
    grid: SharedGrid,
    title: String,
    translation: Vec3,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(writer: W, grid: SharedGrid, viewport: Viewport) -> Result<Self, String> {
        let (cols, rows) = grid.get();
        Ok(Self {
            canvas: LineCanvas::new(cols as usize, rows as usize, viewport)?,
            writer,
            grid,
            title: String::new(),
            translation: Vec3::zeros(),
        })
    }

    pub fn canvas(&self) -> &LineCanvas {
        &self.canvas
    }

    /// Leading text of the status bar
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Status bar drawn over the first row, rebuilt on every present
    pub fn status_line(&self) -> String {
        let t = self.translation;
        format!(
            "{} | x={:.2} y={:.2} z={:.2} | {CONTROLS_HINT}",
            self.title, t.x, t.y, t.z
        )
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, color: Rgba) {
        let (cols, rows) = self.grid.get();
        self.canvas.resize(cols as usize, rows as usize);
        self.canvas.clear(color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.canvas.draw_line(from, to, color);
    }

    fn present(&mut self) -> io::Result<()> {
        self.canvas.draw(&mut self.writer)?;

        let (cols, _) = self.canvas.size();
        let status: String = self.status_line().chars().take(cols).collect();
        self.writer.queue(cursor::MoveTo(0, 0))?;
        self.writer.queue(SetForegroundColor(Color::Yellow))?;
        self.writer.queue(Print(status))?;
        self.writer.queue(ResetColor)?;

        self.writer.flush()
    }

    fn show_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }
}
