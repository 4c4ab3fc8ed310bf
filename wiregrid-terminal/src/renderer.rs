/// ASCII line rasterizer for terminal rendering
use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wiregrid_core::{CanvasSize, Surface};

/// Character luminosity ramp for line intensity (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Canvas rows per terminal row; cells are roughly twice as tall as wide
pub const SUBROWS_PER_CELL: usize = 2;

/// Character-cell surface. Each cell keeps the brightest alpha drawn into it.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    alpha_buffer: Vec<f64>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alpha_buffer: vec![0.0; width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.alpha_buffer = vec![0.0; width * height];
    }

    /// Canvas the projector should target for this terminal size
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.width as f64, (self.height * SUBROWS_PER_CELL) as f64)
    }

    fn plot(&mut self, x: i64, y: i64, alpha: f64) {
        if x < 0 || y < 0 {
            return;
        }
        let (col, row) = (x as usize, y as usize / SUBROWS_PER_CELL);
        if col >= self.width || row >= self.height {
            return;
        }
        let cell = &mut self.alpha_buffer[row * self.width + col];
        *cell = cell.max(alpha);
    }

    fn glyph(alpha: f64) -> char {
        let index = (alpha.clamp(0.0, 1.0) * (LUMINOSITY_RAMP.len() - 1) as f64).round() as usize;
        let index = if alpha > 0.0 { index.max(1) } else { index };
        LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)]
    }

    /// Rows of the current frame as plain text
    pub fn lines(&self) -> Vec<String> {
        self.alpha_buffer
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|&a| Self::glyph(a)).collect())
            .collect()
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (y, row) in self.lines().iter().enumerate() {
            writer.queue(MoveTo(0, y as u16))?;
            for c in row.chars() {
                // Color based on character intensity
                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Cyan,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for AsciiRenderer {
    fn clear(&mut self, _canvas: CanvasSize) {
        self.alpha_buffer.iter_mut().for_each(|a| *a = 0.0);
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>, alpha: f64) {
        let canvas = self.canvas_size();
        let Some((from, to)) = clip_line(from, to, canvas) else {
            return;
        };

        // Bresenham over the clipped segment
        let (mut x, mut y) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, alpha);
            if x == x1 && y == y1 {
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
}

/// Liang-Barsky clip of a segment to the canvas rectangle.
///
/// Returns `None` for segments fully outside or with non-finite endpoints,
/// which the unguarded perspective divide can produce.
fn clip_line(from: Point2<f64>, to: Point2<f64>, canvas: CanvasSize) -> Option<(Point2<f64>, Point2<f64>)> {
    if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
        return None;
    }

    let d = to - from;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let max_x = canvas.width - 1.0;
    let max_y = canvas.height - 1.0;
    let edges = [
        (-d.x, from.x),
        (d.x, max_x - from.x),
        (-d.y, from.y),
        (d.y, max_y - from.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((from + d * t0, from + d * t1))
}
