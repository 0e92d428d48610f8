//! Drawing surface abstraction
//!
//! The renderer only ever clears a surface and fills axis-aligned rectangles.
//! Hosts own the pixels; tests use [`RecordingSurface`].

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::gray(0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same intensity on every channel
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// CSS `rgb()` notation, as accepted by canvas `fillStyle`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Something the renderer can draw on
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;
    /// Height in pixels
    fn height(&self) -> u32;
    /// Reset every pixel
    fn clear(&mut self);
    /// Fill a rectangle; coordinates may be fractional or off-surface
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
}

/// A single recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb,
    },
}

/// Surface that remembers what was drawn instead of drawing it
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Return and forget the recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(Rgb::new(85, 51, 0).to_css(), "rgb(85, 51, 0)");
        assert_eq!(Rgb::gray(0x55), Rgb::new(85, 85, 85));
    }

    #[test]
    fn test_recording() {
        let mut surface = RecordingSurface::new(4, 3);
        surface.clear();
        surface.fill_rect(0.0, 0.5, 2.0, 1.0, Rgb::BLACK);
        assert_eq!(surface.width(), 4);
        assert_eq!(surface.height(), 3);

        let commands = surface.take();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], DrawCommand::Clear);
        assert!(surface.commands.is_empty());
    }
}
