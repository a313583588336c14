use glam::DVec2;

use crate::components::Color;
use crate::map::Aabb;

/// Drawing capability the simulation needs from a backend
pub trait Renderer {
    fn set_color(&mut self, color: Color);

    /// Fill a rectangle given by its center and full size
    fn fill_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64);
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect {
        color: Color,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
    },
}

/// Renderer that records draw calls, for tests and headless runs
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    pub commands: Vec<DrawCommand>,
    color: Color,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Rectangles filled so far, in draw order
    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            color: Color::WHITE,
        }
    }
}

impl Renderer for FrameRecorder {
    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect {
            color: self.color,
            cx,
            cy,
            width,
            height,
        });
    }
}

/// Renderer that rasterises rectangles into a character grid
pub struct ConsoleRenderer {
    cols: usize,
    rows: usize,
    world_size: DVec2,
    cells: Vec<char>,
    glyph: char,
}

impl ConsoleRenderer {
    /// A `cols` x `rows` grid covering `[0, world_size]`
    pub fn new(cols: usize, rows: usize, world_size: DVec2) -> Self {
        Self {
            cols,
            rows,
            world_size,
            cells: vec![' '; cols * rows],
            glyph: '#',
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Current frame, one line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols.max(1)) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn glyph_for(color: Color) -> char {
        match color {
            Color::YELLOW => 'O',
            Color::GREEN => '|',
            Color::GRAY => '#',
            _ => '*',
        }
    }

    fn cell_range(min: f64, max: f64, cell: f64, count: usize) -> std::ops::Range<usize> {
        let start = (min / cell).floor().max(0.0) as usize;
        let end = ((max / cell).ceil().max(0.0) as usize).min(count);
        start.min(end)..end
    }
}

impl Renderer for ConsoleRenderer {
    fn set_color(&mut self, color: Color) {
        self.glyph = Self::glyph_for(color);
    }

    fn fill_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let rect = Aabb::from_center_size(DVec2::new(cx, cy), DVec2::new(width, height));
        let view = Aabb::new(DVec2::ZERO, self.world_size);
        if !rect.intersects(&view) {
            return;
        }

        let cell_w = self.world_size.x / self.cols as f64;
        let cell_h = self.world_size.y / self.rows as f64;
        let cols = Self::cell_range(rect.min.x, rect.max.x, cell_w, self.cols);
        let rows = Self::cell_range(rect.min.y, rect.max.y, cell_h, self.rows);
        for row in rows {
            for col in cols.clone() {
                self.cells[row * self.cols + col] = self.glyph;
            }
        }
    }
}
