//! The drawing surface the scene is composed onto.
//!
//! Coordinates are signed cells; anything that falls outside the surface
//! is clipped by the implementation, never reported as an error.

use std::io;

use crate::entities::Size;

/// Semantic colour slots; each backend maps them to whatever it can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    Plain,
    Hud,
    Title,
    Player,
    Missile,
    Shield,
    Alien30,
    Alien20,
    Alien10,
    Explosion,
    Bomb,
    Ufo,
}

pub trait Canvas {
    fn size(&self) -> Size;

    fn clear(&mut self) -> io::Result<()>;

    fn set_tint(&mut self, tint: Tint) -> io::Result<()>;

    fn set_underline(&mut self, on: bool) -> io::Result<()>;

    fn draw_char(&mut self, x: i32, y: i32, c: char) -> io::Result<()>;

    fn draw_str(&mut self, x: i32, y: i32, text: &str) -> io::Result<()> {
        for (i, c) in text.chars().enumerate() {
            self.draw_char(x + i as i32, y, c)?;
        }
        Ok(())
    }

    /// Draw `height` lines of a sprite sheet starting at line `frame_offset`,
    /// so stacked animation frames can share one array.
    fn draw_sprite(
        &mut self,
        x: i32,
        y: i32,
        sheet: &[&str],
        height: usize,
        frame_offset: usize,
    ) -> io::Result<()> {
        for (i, line) in sheet.iter().skip(frame_offset).take(height).enumerate() {
            self.draw_str(x, y + i as i32, line)?;
        }
        Ok(())
    }

    /// Make everything drawn since the last `clear` visible.
    fn present(&mut self) -> io::Result<()>;
}
