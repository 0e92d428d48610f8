//! Platform abstraction layer
//!
//! Host-side drawing surfaces. The browser host draws through a 2D canvas
//! context; the native host uses [`Framebuffer`](crate::renderer::Framebuffer).

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
