//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change or `invalidate`) is a
//! full redraw; later frames only emit the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Ink};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode + alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        self.last
            .get_or_insert_with(|| FrameBuffer::new(0, 0))
            .clone_from(fb);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            pen.print(out, fb, x, y)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();

    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            pen.print(out, next, x + dx, y)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Tracks the active ink so runs of equal ink emit one escape sequence.
#[derive(Default)]
struct Pen {
    ink: Option<Ink>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, fb: &FrameBuffer, x: u16, y: u16) -> Result<()> {
        let glyph = fb.get(x, y).unwrap_or_default();
        if self.ink != Some(glyph.ink) {
            apply_ink_into(out, glyph.ink)?;
            self.ink = Some(glyph.ink);
        }
        out.queue(Print(glyph.ch))?;
        Ok(())
    }
}

/// Colours and weight for one ink.
struct Paint {
    fg: Color,
    bg: Color,
    bold: bool,
    dim: bool,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

const BLACK: Color = rgb(0, 0, 0);
const STAGE_RED: Color = rgb(160, 36, 36);

fn paint(ink: Ink) -> Paint {
    let (fg, bg) = match ink {
        Ink::Blank | Ink::Label => (rgb(220, 220, 220), BLACK),
        Ink::Border | Ink::Value | Ink::Hint => (rgb(200, 200, 200), BLACK),
        Ink::Stage | Ink::Platform => (rgb(10, 10, 10), STAGE_RED),
        Ink::Character => (rgb(250, 220, 40), STAGE_RED),
    };
    Paint {
        fg,
        bg,
        bold: matches!(ink, Ink::Label | Ink::Character),
        dim: ink == Ink::Hint,
    }
}

fn apply_ink_into(out: &mut Vec<u8>, ink: Ink) -> Result<()> {
    let paint = paint(ink);
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(paint.fg))?;
    out.queue(SetBackgroundColor(paint.bg))?;
    if paint.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if paint.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

/// `(x, y, len)` runs of horizontally adjacent cells that differ.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Glyph;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        b.fill_rect(1, 0, 3, 1, Glyph::new('X', Ink::Platform));
        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_runs_close_at_row_end() {
        let a = FrameBuffer::new(3, 2);
        let mut b = FrameBuffer::new(3, 2);
        b.put(2, 0, Glyph::new('X', Ink::Label));
        b.put(0, 1, Glyph::new('Y', Ink::Label));
        assert_eq!(changed_runs(&a, &b), vec![(2, 0, 1), (0, 1, 1)]);
    }

    #[test]
    fn ink_only_change_is_redrawn() {
        let a = FrameBuffer::new(2, 1);
        let mut b = FrameBuffer::new(2, 1);
        b.put(1, 0, Glyph::new(' ', Ink::Stage));
        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_text() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains(' '));
    }

    #[test]
    fn full_encode_prints_every_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.text(0, 0, "AB", Ink::Label);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("AB"));
    }
}
