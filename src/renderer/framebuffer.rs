//! Software framebuffer
//!
//! Backing surface for the native host. Pixels are packed RGB, row-major.

use super::surface::{Rgb, Surface};

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    /// Colour at a pixel, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Encode as a binary PPM (P6) image
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for p in &self.pixels {
            out.extend_from_slice(&[p.r, p.g, p.b]);
        }
        out
    }

    /// Pixel span covered by `[start, start + len)`, clipped to `[0, limit)`
    ///
    /// Edges round to the nearest pixel boundary, so adjacent rectangles
    /// sharing an edge never overlap or leave a gap.
    fn span(start: f32, len: f32, limit: u32) -> std::ops::Range<usize> {
        let lo = start.round().clamp(0.0, limit as f32) as usize;
        let hi = (start + len).round().clamp(0.0, limit as f32) as usize;
        lo..hi.max(lo)
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) {
            return;
        }
        let cols = Self::span(x, w, self.width);
        let stride = self.width as usize;
        for row in Self::span(y, h, self.height) {
            self.pixels[row * stride + cols.start..row * stride + cols.end].fill(color);
        }
    }
}
