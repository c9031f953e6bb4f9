//! BoardSurface: draws the game's world-unit commands into terminal cells.
//!
//! This module is pure (no I/O). The board is scaled to fill the terminal
//! height, with columns counted at half the height of a row so the playfield
//! keeps roughly its proportions on typical fonts.

use crate::engine::RenderSurface;
use crate::fb::{CellRect, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Rect, Sprite};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board lands on screen and how big one cell is in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    /// Top-left cell inside the border.
    pub origin_x: i32,
    pub origin_y: i32,
    pub cols: i32,
    pub rows: i32,
    pub units_per_col: f32,
    pub units_per_row: f32,
}

impl BoardLayout {
    /// Rows lost to the border (2) and the status line (1).
    const CHROME_ROWS: u16 = 3;
    const CHROME_COLS: u16 = 2;

    /// Fit a `board_w` x `board_h` world into `viewport`.
    ///
    /// Height wins unless the result is too wide, in which case width wins.
    pub fn fit(viewport: Viewport, board_w: f32, board_h: f32) -> Self {
        let avail_rows = viewport.height.saturating_sub(Self::CHROME_ROWS).max(1) as i32;
        let avail_cols = viewport.width.saturating_sub(Self::CHROME_COLS).max(1) as i32;

        let mut rows = avail_rows;
        let mut units_per_row = board_h / rows as f32;
        let mut units_per_col = units_per_row / 2.0;
        let mut cols = (board_w / units_per_col).ceil() as i32;

        if cols > avail_cols {
            cols = avail_cols;
            units_per_col = board_w / cols as f32;
            units_per_row = units_per_col * 2.0;
            rows = ((board_h / units_per_row).ceil() as i32).clamp(1, avail_rows);
        }

        let frame_w = cols + Self::CHROME_COLS as i32;
        Self {
            origin_x: (viewport.width as i32 - frame_w).max(0) / 2 + 1,
            origin_y: 1,
            cols,
            rows,
            units_per_col,
            units_per_row,
        }
    }

    /// The playfield, border excluded.
    pub fn inner(&self) -> CellRect {
        CellRect::new(self.origin_x, self.origin_y, self.cols, self.rows)
    }

    /// Cells touched by `rect`, unclipped.
    pub fn to_cells(&self, rect: Rect) -> CellRect {
        let x0 = (rect.x / self.units_per_col).floor() as i32;
        let x1 = (rect.right() / self.units_per_col).ceil() as i32;
        let y0 = (rect.y / self.units_per_row).floor() as i32;
        let y1 = (rect.bottom() / self.units_per_row).ceil() as i32;
        CellRect::new(self.origin_x + x0, self.origin_y + y0, x1 - x0, y1 - y0)
    }

    /// Row of the status line, just under the bottom border.
    pub fn status_row(&self) -> i32 {
        self.origin_y + self.rows + 1
    }
}

const SKY: Rgb = Rgb::new(112, 197, 206);
const PIPE_GREEN: Rgb = Rgb::new(84, 168, 52);
const PIPE_LIP: Rgb = Rgb::new(150, 220, 90);
const BIRD_YELLOW: Rgb = Rgb::new(250, 210, 40);
const WHITE: Rgb = Rgb::new(255, 255, 255);

fn sky() -> CellStyle {
    CellStyle::new(WHITE, SKY)
}

fn border() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0))
}

/// A [`RenderSurface`] over a borrowed framebuffer.
pub struct BoardSurface<'a> {
    fb: &'a mut FrameBuffer,
    layout: BoardLayout,
}

impl<'a> BoardSurface<'a> {
    /// Resize `fb` to the viewport and lay the board out inside it.
    pub fn new(fb: &'a mut FrameBuffer, viewport: Viewport, board_w: f32, board_h: f32) -> Self {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));
        Self {
            fb,
            layout: BoardLayout::fit(viewport, board_w, board_h),
        }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Controls hint under the board.
    pub fn draw_status(&mut self, phase: Phase) {
        let hint = match phase {
            Phase::NotStarted => "SPACE / \u{2191} / X / click to start   q quit",
            Phase::Running => "SPACE / \u{2191} / X / click to flap   q quit",
            Phase::GameOver => "flap to play again   q quit",
        };
        let row = self.layout.status_row();
        let style = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
        self.fb.put_str(self.layout.origin_x, row, hint, style);
    }

    fn draw_border(&mut self) {
        let inner = self.layout.inner();
        let style = border();
        let (left, right) = (inner.x - 1, inner.x + inner.w);
        let (top, bottom) = (inner.y - 1, inner.y + inner.h);

        for x in inner.x..right {
            self.fb.set(x, top, style.cell('─'));
            self.fb.set(x, bottom, style.cell('─'));
        }
        for y in inner.y..bottom {
            self.fb.set(left, y, style.cell('│'));
            self.fb.set(right, y, style.cell('│'));
        }
        self.fb.set(left, top, style.cell('┌'));
        self.fb.set(right, top, style.cell('┐'));
        self.fb.set(left, bottom, style.cell('└'));
        self.fb.set(right, bottom, style.cell('┘'));
    }
}

impl RenderSurface for BoardSurface<'_> {
    fn clear(&mut self, region: Rect) {
        let cells = self.layout.to_cells(region).intersect(&self.layout.inner());
        self.fb.fill(cells, sky().cell(' '));
        self.draw_border();
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let inner = self.layout.inner();
        let cells = self.layout.to_cells(rect);
        match sprite {
            Sprite::Bird => {
                let body = CellStyle::new(Rgb::new(0, 0, 0), BIRD_YELLOW).bold();
                self.fb.fill(cells.intersect(&inner), body.cell(' '));
                // Eye on the leading edge.
                let eye = CellRect::new(cells.x + cells.w - 1, cells.y, 1, 1).intersect(&inner);
                self.fb.fill(eye, body.cell('●'));
            }
            Sprite::TopPipe | Sprite::BottomPipe => {
                let body = CellStyle::new(PIPE_GREEN, PIPE_GREEN);
                self.fb.fill(cells.intersect(&inner), body.cell(' '));
                let lip_y = match sprite {
                    Sprite::TopPipe => cells.y + cells.h - 1,
                    _ => cells.y,
                };
                let lip = CellRect::new(cells.x, lip_y, cells.w, 1).intersect(&inner);
                self.fb.fill(lip, CellStyle::new(PIPE_GREEN, PIPE_LIP).cell('▀'));
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        // `y` is a baseline; the glyphs sit on the row above it.
        let inner = self.layout.inner();
        let row = (self.layout.origin_y + (y / self.layout.units_per_row).floor() as i32 - 1)
            .max(inner.y);
        let col = self.layout.origin_x + (x / self.layout.units_per_col).floor() as i32;
        self.fb.put_str_clipped(col, row, text, sky().bold(), inner);
    }
}
