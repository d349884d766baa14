/// Rendering backend: all terminal I/O lives here.
///
/// `TerminalCanvas` implements the library's [`Canvas`] on top of crossterm.
/// Commands are queued and only flushed by `present`, once per frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use text_invaders::canvas::{Canvas, Tint};
use text_invaders::entities::Size;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAIN: Color = Color::White;
const C_HUD: Color = Color::Yellow;
const C_TITLE: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_MISSILE: Color = Color::Cyan;
const C_SHIELD: Color = Color::Green;
const C_ALIEN30: Color = Color::Magenta;
const C_ALIEN20: Color = Color::Cyan;
const C_ALIEN10: Color = Color::Green;
const C_EXPLOSION: Color = Color::Yellow;
const C_BOMB: Color = Color::Red;
const C_UFO: Color = Color::Red;

fn color_for(tint: Tint) -> Color {
    match tint {
        Tint::Plain => C_PLAIN,
        Tint::Hud => C_HUD,
        Tint::Title => C_TITLE,
        Tint::Player => C_PLAYER,
        Tint::Missile => C_MISSILE,
        Tint::Shield => C_SHIELD,
        Tint::Alien30 => C_ALIEN30,
        Tint::Alien20 => C_ALIEN20,
        Tint::Alien10 => C_ALIEN10,
        Tint::Explosion => C_EXPLOSION,
        Tint::Bomb => C_BOMB,
        Tint::Ufo => C_UFO,
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub struct TerminalCanvas<W: Write> {
    out: W,
    size: Size,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, size: Size) -> Self {
        Self { out, size }
    }

    /// Follow terminal resizes so clipping stays correct.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.size.width && y < self.size.height
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn set_tint(&mut self, tint: Tint) -> std::io::Result<()> {
        self.out.queue(style::SetForegroundColor(color_for(tint)))?;
        Ok(())
    }

    fn set_underline(&mut self, on: bool) -> std::io::Result<()> {
        let attr = if on {
            Attribute::Underlined
        } else {
            Attribute::NoUnderline
        };
        self.out.queue(style::SetAttribute(attr))?;
        Ok(())
    }

    fn draw_char(&mut self, x: i32, y: i32, c: char) -> std::io::Result<()> {
        if self.in_bounds(x, y) {
            self.out.queue(cursor::MoveTo(x as u16, y as u16))?;
            self.out.queue(Print(c))?;
        }
        Ok(())
    }

    /// Prints the visible run of `text` with a single cursor move.
    fn draw_str(&mut self, x: i32, y: i32, text: &str) -> std::io::Result<()> {
        if y < 0 || y >= self.size.height {
            return Ok(());
        }
        let skip = (-x).max(0) as usize;
        let start = x.max(0);
        let room = (self.size.width - start).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if !visible.is_empty() {
            self.out.queue(cursor::MoveTo(start as u16, y as u16))?;
            self.out.queue(Print(visible))?;
        }
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.size.height.saturating_sub(1).max(0) as u16))?;
        self.out.flush()?;
        Ok(())
    }
}
