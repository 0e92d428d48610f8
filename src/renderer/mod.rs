//! Software raycast rendering
//!
//! Everything is expressed as `clear` and `fill_rect` calls against a
//! [`Surface`], so the same renderer drives the browser canvas, the native
//! framebuffer and headless tests.

pub mod frame;
pub mod framebuffer;
pub mod surface;

pub use frame::{ViewParams, ray_angle, ray_count, render_frame, shade_for_distance, wall_height};
pub use framebuffer::Framebuffer;
pub use surface::{DrawCommand, RecordingSurface, Rgb, Surface};
