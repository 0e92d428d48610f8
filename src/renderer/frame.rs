//! First-person frame rendering
//!
//! Flat ceiling and floor bands, then one vertical wall slice per cast ray.
//! Slice height is inversely proportional to the corrected ray distance and
//! brightness falls off linearly with it.

use crate::settings::Palette;
use crate::sim::{CastParams, GridMap, Player, Ray, cast};

use super::surface::{Rgb, Surface};

/// Projection tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Horizontal field of view (radians)
    pub fov: f32,
    /// Screen pixels per ray
    pub column_width: u32,
    /// Distance floor used when projecting wall height
    pub min_distance: f32,
    pub cast: CastParams,
    pub palette: Palette,
}

impl Default for ViewParams {
    fn default() -> Self {
        crate::Settings::default().view_params()
    }
}

/// Number of rays needed to cover `width` pixels
#[inline]
pub fn ray_count(width: u32, column_width: u32) -> u32 {
    width / column_width.max(1)
}

/// Angle of ray `index` out of `count`, sweeping left to right across the view
#[inline]
pub fn ray_angle(index: u32, count: u32, facing: f32, fov: f32) -> f32 {
    facing - fov / 2.0 + index as f32 * (fov / count as f32)
}

/// On-screen height of a wall slice at `distance`
#[inline]
pub fn wall_height(distance: f32, cell_size: f32, screen_height: f32, min_distance: f32) -> f32 {
    cell_size * screen_height / distance.max(min_distance)
}

/// Grey level of a wall slice at `distance`: full white at 0, black from 510
#[inline]
pub fn shade_for_distance(distance: f32) -> Rgb {
    Rgb::gray((255.0 - distance / 2.0).clamp(0.0, 255.0) as u8)
}

/// Draw one frame of the player's view
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    player: &Player,
    map: &GridMap,
    view: &ViewParams,
) {
    let width = surface.width() as f32;
    let height = surface.height() as f32;
    let half = height / 2.0;

    surface.clear();
    surface.fill_rect(0.0, 0.0, width, height, view.palette.background);
    surface.fill_rect(0.0, 0.0, width, half, view.palette.ceiling);
    surface.fill_rect(0.0, half, width, half, view.palette.floor);

    let count = ray_count(surface.width(), view.column_width);
    let column = view.column_width as f32;

    for i in 0..count {
        let angle = ray_angle(i, count, player.angle, view.fov);
        let hit = cast(map, &Ray::new(player.pos, angle), player.angle, &view.cast);

        let slice = wall_height(hit.distance, view.cast.cell_size, height, view.min_distance);
        let top = (height - slice) / 2.0;
        surface.fill_rect(
            i as f32 * column,
            top,
            column,
            slice,
            shade_for_distance(hit.distance),
        );
    }

    log::trace!(
        "rendered {} rays at ({:.1}, {:.1}) facing {:.2}",
        count,
        player.pos.x,
        player.pos.y,
        player.angle
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};
    use glam::Vec2;
    use proptest::prelude::*;

    fn slices(commands: &[DrawCommand]) -> Vec<(f32, f32, f32, f32, Rgb)> {
        commands
            .iter()
            .skip(4)
            .map(|c| match *c {
                DrawCommand::FillRect { x, y, w, h, color } => (x, y, w, h, color),
                DrawCommand::Clear => panic!("unexpected clear"),
            })
            .collect()
    }

    #[test]
    fn test_background_bands() {
        let map = GridMap::dungeon();
        let player = Player::spawn(64.0);
        let mut surface = RecordingSurface::new(64, 48);
        render_frame(&mut surface, &player, &map, &ViewParams::default());

        let palette = Palette::default();
        assert_eq!(surface.commands[0], DrawCommand::Clear);
        assert_eq!(
            surface.commands[1],
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                w: 64.0,
                h: 48.0,
                color: palette.background
            }
        );
        assert_eq!(
            surface.commands[2],
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                w: 64.0,
                h: 24.0,
                color: palette.ceiling
            }
        );
        assert_eq!(
            surface.commands[3],
            DrawCommand::FillRect {
                x: 0.0,
                y: 24.0,
                w: 64.0,
                h: 24.0,
                color: palette.floor
            }
        );
    }

    #[test]
    fn test_one_slice_per_two_columns() {
        let map = GridMap::dungeon();
        let player = Player::spawn(64.0);
        let mut surface = RecordingSurface::new(101, 40);
        render_frame(&mut surface, &player, &map, &ViewParams::default());

        let slices = slices(&surface.commands);
        assert_eq!(slices.len(), 50);
        for (i, (x, y, w, h, _)) in slices.iter().enumerate() {
            assert_eq!(*x, i as f32 * 2.0);
            assert_eq!(*w, 2.0);
            // Vertically centred
            assert!((y + h / 2.0 - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_ray_angles_span_fov() {
        let fov = std::f32::consts::FRAC_PI_3;
        assert!((ray_angle(0, 10, 1.0, fov) - (1.0 - fov / 2.0)).abs() < 1e-6);
        assert!((ray_angle(5, 10, 1.0, fov) - 1.0).abs() < 1e-6);
        assert!((ray_angle(9, 10, 1.0, fov) - (1.0 + fov / 2.0 - fov / 10.0)).abs() < 1e-6);
    }

    #[test]
    fn test_wall_height_guards_zero_distance() {
        let h = wall_height(0.0, 64.0, 480.0, 1e-3);
        assert!(h.is_finite());
        assert_eq!(wall_height(64.0, 64.0, 480.0, 1e-3), 480.0);
    }

    #[test]
    fn test_shading() {
        assert_eq!(shade_for_distance(0.0), Rgb::gray(255));
        assert_eq!(shade_for_distance(100.0), Rgb::gray(205));
        assert_eq!(shade_for_distance(510.0), Rgb::gray(0));
        assert_eq!(shade_for_distance(1280.0), Rgb::gray(0));
    }

    #[test]
    fn test_nearer_walls_render_taller() {
        let map = GridMap::dungeon();
        let params = CastParams::default();
        let from_spawn = cast(&map, &Ray::new(Vec2::new(96.0, 96.0), 0.0), 0.0, &params);
        let one_cell_east = cast(&map, &Ray::new(Vec2::new(160.0, 96.0), 0.0), 0.0, &params);

        assert!(one_cell_east.distance < from_spawn.distance);
        let far = wall_height(from_spawn.distance, 64.0, 480.0, 1e-3);
        let near = wall_height(one_cell_east.distance, 64.0, 480.0, 1e-3);
        assert!(near > far);
    }

    #[test]
    fn test_render_is_idempotent() {
        let map = GridMap::dungeon();
        let player = Player::new(Vec2::new(200.0, 150.0), 0.7);
        let view = ViewParams::default();

        let mut first = RecordingSurface::new(320, 200);
        let mut second = RecordingSurface::new(320, 200);
        render_frame(&mut first, &player, &map, &view);
        render_frame(&mut second, &player, &map, &view);
        assert_eq!(first.commands, second.commands);
    }

    #[test]
    fn test_narrow_surface_draws_only_background() {
        let map = GridMap::dungeon();
        let mut surface = RecordingSurface::new(1, 10);
        render_frame(&mut surface, &Player::spawn(64.0), &map, &ViewParams::default());
        assert_eq!(surface.commands.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_shading_is_monotonic(a in 0.0f32..510.0, b in 0.0f32..510.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(shade_for_distance(near).r >= shade_for_distance(far).r);
        }
    }
}
