//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is written in full; later
//! frames only rewrite the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows, if known.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, mouse clicks on.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        log::debug!("terminal: raw mode on");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal: raw mode off");
        Ok(())
    }

    /// Forget what is on screen so the next present is a full redraw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Write `fb` to the terminal.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.shown.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match self.shown.as_mut() {
            Some(shown) => shown.copy_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no usable `prev` (first frame, or a size change) the whole screen is
/// cleared and rewritten.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for y in 0..next.height() {
        for (x, len) in dirty_runs(prev, next, y) {
            out.queue(cursor::MoveTo(x, y))?;
            for cx in x..x + len {
                let cell = next.get(cx, y).unwrap_or_default();
                if style != Some(cell.style) {
                    queue_style(out, cell.style)?;
                    style = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Runs of changed cells on row `y` as `(start_x, len)`.
///
/// Without a previous frame the whole row is one run.
fn dirty_runs<'a>(
    prev: Option<&'a FrameBuffer>,
    next: &'a FrameBuffer,
    y: u16,
) -> DirtyRuns<'a> {
    DirtyRuns {
        prev,
        next,
        y,
        x: 0,
    }
}

struct DirtyRuns<'a> {
    prev: Option<&'a FrameBuffer>,
    next: &'a FrameBuffer,
    y: u16,
    x: u16,
}

impl DirtyRuns<'_> {
    fn changed(&self, x: u16) -> bool {
        match self.prev {
            Some(prev) => prev.get(x, self.y) != self.next.get(x, self.y),
            None => true,
        }
    }
}

impl Iterator for DirtyRuns<'_> {
    type Item = (u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        let w = self.next.width();
        while self.x < w && !self.changed(self.x) {
            self.x += 1;
        }
        if self.x >= w {
            return None;
        }
        let start = self.x;
        while self.x < w && self.changed(self.x) {
            self.x += 1;
        }
        Some((start, self.x - start))
    }
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(if style.bold {
        Attribute::Bold
    } else {
        Attribute::NormalIntensity
    }))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
