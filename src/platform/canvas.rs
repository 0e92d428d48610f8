//! HTML canvas surface

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::{Rgb, Surface};

/// A 2D canvas context sized once at startup
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }
}
