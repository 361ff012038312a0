//! Character grid the game view draws into and the renderer flushes.
//!
//! Glyphs carry an [`Ink`] naming what they depict; colours are picked by the
//! renderer, so the view never deals with escape codes or RGB values.

/// What a glyph depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    /// Terminal background outside the stage.
    #[default]
    Blank,
    Border,
    /// Empty stage cell.
    Stage,
    Platform,
    Character,
    Label,
    Value,
    Hint,
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub ink: Ink,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::new(' ', Ink::Blank);

    pub const fn new(ch: char, ink: Ink) -> Self {
        Self { ch, ink }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size, keeping the allocation. Contents are unspecified
    /// afterwards; callers repaint the whole frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.resize(usize::from(width) * usize::from(height), Glyph::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph; anything off the grid is dropped.
    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.put(px, py, glyph);
            }
        }
    }

    pub fn text(&mut self, x: u16, y: u16, text: &str, ink: Ink) {
        for (px, ch) in (x..self.width).zip(text.chars()) {
            self.put(px, y, Glyph::new(ch, ink));
        }
    }

    /// Decimal digits of `value`, most significant first.
    pub fn number(&mut self, x: u16, y: u16, value: u32, ink: Ink) {
        let digits = value.checked_ilog10().unwrap_or(0) + 1;
        for (px, place) in (x..self.width).zip((0..digits).rev()) {
            let digit = value / 10u32.pow(place) % 10;
            self.put(px, y, Glyph::new(char::from(b'0' + digit as u8), ink));
        }
    }

    /// Characters of one row (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|glyph| glyph.ch)
            .collect()
    }
}
