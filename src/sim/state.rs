//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::map::GridMap;

/// Spawn cell, in (col, row)
pub const SPAWN_CELL: (f32, f32) = (1.0, 1.0);

/// Spawn facing angle (radians)
pub const SPAWN_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

/// The first-person viewer
///
/// Serializes as JSON for the native host's pose report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Position in world units (one cell = `cell_size` units)
    pub pos: Vec2,
    /// Facing angle (radians); 0 faces +x, increasing turns toward +y
    pub angle: f32,
    /// Signed forward speed in world units per frame; 0 when idle
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle,
            speed: 0.0,
        }
    }

    /// Centre of the spawn cell, facing diagonally into the dungeon
    pub fn spawn(cell_size: f32) -> Self {
        let pos = Vec2::new(SPAWN_CELL.0 + 0.5, SPAWN_CELL.1 + 0.5) * cell_size;
        Self::new(pos, SPAWN_ANGLE)
    }

    /// Unit vector along the facing angle
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: GridMap,
    pub player: Player,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    pub fn new(map: GridMap, player: Player) -> Self {
        Self {
            map,
            player,
            frame: 0,
        }
    }

    /// The built-in dungeon with the player at the spawn pose
    pub fn dungeon(cell_size: f32) -> Self {
        Self::new(GridMap::dungeon(), Player::spawn(cell_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::map::CellQuery;

    #[test]
    fn test_spawn_pose() {
        let player = Player::spawn(64.0);
        assert_eq!(player.pos, Vec2::new(96.0, 96.0));
        assert!((player.angle - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_spawn_is_in_open_cell() {
        let state = GameState::dungeon(64.0);
        assert_eq!(
            state.map.cell_at_point(state.player.pos, 64.0),
            CellQuery::Empty
        );
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_pose_as_json() {
        let player = Player::spawn(64.0);
        let value = serde_json::to_value(player).unwrap();
        assert_eq!(value["pos"], serde_json::json!([96.0, 96.0]));
        assert_eq!(value["speed"], serde_json::json!(0.0));

        let back: Player = serde_json::from_value(value).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn test_direction() {
        let player = Player::new(Vec2::ZERO, 0.0);
        assert!((player.direction() - Vec2::X).length() < 1e-6);
    }
}
