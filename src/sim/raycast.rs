//! Grid ray marching
//!
//! A ray is marched from the viewer in fixed distance steps until the sample
//! point leaves the map, lands in a wall cell, or the search cap is reached.
//! The travelled distance is then projected onto the view direction to undo
//! the fisheye bowing of off-centre rays.

use glam::Vec2;

use super::map::{CellQuery, GridMap, cell_coords};

/// Default search cap, in cells
pub const MAX_SEARCH_CELLS: f32 = 20.0;

/// Default march step, in world units
pub const RAY_STEP: f32 = 1.0;

/// Hard cap on march steps per ray
pub const MAX_RAY_STEPS: u32 = 65_536;

/// A ray leaving the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub angle: f32,
}

impl Ray {
    pub fn new(origin: Vec2, angle: f32) -> Self {
        Self { origin, angle }
    }

    /// Unit direction
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}

/// What stopped the ray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Struck the wall cell at (col, row)
    Wall { col: i32, row: i32 },
    /// Left the map or hit the search cap
    MaxDistance,
}

/// Result of a cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Perpendicular distance from the view plane
    pub distance: f32,
    /// Distance travelled along the ray before correction
    pub raw_distance: f32,
    pub kind: HitKind,
}

impl RayHit {
    pub fn is_wall(&self) -> bool {
        matches!(self.kind, HitKind::Wall { .. })
    }
}

/// Ray caster tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastParams {
    pub cell_size: f32,
    /// Search cap in world units
    pub max_distance: f32,
    /// March step in world units, must be positive
    pub step: f32,
}

impl CastParams {
    pub fn new(cell_size: f32, max_search_cells: f32, step: f32) -> Self {
        Self {
            cell_size,
            max_distance: max_search_cells * cell_size,
            step,
        }
    }

    /// Steps needed to march from the origin to the search cap
    ///
    /// Infinite when the cap is not finite.
    pub fn required_steps(&self) -> f32 {
        (self.max_distance / self.step).ceil()
    }

    /// Steps a cast will actually take, never more than [`MAX_RAY_STEPS`]
    pub fn step_count(&self) -> u32 {
        // NaN saturates to 0, infinity to u32::MAX
        (self.required_steps() as u32).min(MAX_RAY_STEPS)
    }
}

impl Default for CastParams {
    fn default() -> Self {
        Self::new(crate::consts::CELL_SIZE, MAX_SEARCH_CELLS, RAY_STEP)
    }
}

/// March `ray` through `map`; `facing` is the viewer's angle, used as the
/// reference for fisheye correction
pub fn cast(map: &GridMap, ray: &Ray, facing: f32, params: &CastParams) -> RayHit {
    let dir = ray.direction();
    let mut distance = params.max_distance;
    let mut kind = HitKind::MaxDistance;

    // Distance is derived from the step index so it always advances
    for i in 1..=params.step_count() {
        let travelled = (i as f32 * params.step).min(params.max_distance);
        let sample = ray.origin + dir * travelled;
        let (col, row) = cell_coords(sample, params.cell_size);

        match map.cell_at(col, row) {
            // Leaving the map reports the cap
            CellQuery::OutOfBounds => break,
            CellQuery::Wall => {
                distance = travelled;
                kind = HitKind::Wall { col, row };
                break;
            }
            CellQuery::Empty => {}
        }
    }

    RayHit {
        distance: distance * (facing - ray.angle).cos(),
        raw_distance: distance,
        kind,
    }
}
