//! Player movement with axis-separated collision
//!
//! Each axis is tested on its own against the cell a look-ahead point would
//! occupy, so a blocked axis never stops the other one (wall sliding).

use glam::Vec2;

use super::map::GridMap;
use super::state::Player;

/// Default collision look-ahead, as a multiple of the per-frame displacement
pub const LOOK_AHEAD: f32 = 4.0;

/// Movement tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveParams {
    pub cell_size: f32,
    pub look_ahead: f32,
}

impl Default for MoveParams {
    fn default() -> Self {
        Self {
            cell_size: crate::consts::CELL_SIZE,
            look_ahead: LOOK_AHEAD,
        }
    }
}

/// Which axes moved this frame
///
/// The default is a standing player: nothing attempted, nothing moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Speed was non-zero
    pub attempted: bool,
    pub moved_x: bool,
    pub moved_y: bool,
}

impl MoveOutcome {
    /// True if the player tried to move but at least one axis was blocked
    pub fn blocked(&self) -> bool {
        self.attempted && !(self.moved_x && self.moved_y)
    }
}

/// Advance the player one frame along its facing angle
pub fn advance(player: &mut Player, map: &GridMap, params: &MoveParams) -> MoveOutcome {
    if player.speed == 0.0 {
        return MoveOutcome::default();
    }

    let step = player.direction() * player.speed;
    let probe = step * params.look_ahead;
    let start = player.pos;

    let moved_x = map
        .cell_at_point(Vec2::new(start.x + probe.x, start.y), params.cell_size)
        .is_passable();
    let moved_y = map
        .cell_at_point(Vec2::new(start.x, start.y + probe.y), params.cell_size)
        .is_passable();

    if moved_x {
        player.pos.x += step.x;
    }
    if moved_y {
        player.pos.y += step.y;
    }

    let outcome = MoveOutcome {
        attempted: true,
        moved_x,
        moved_y,
    };
    if outcome.blocked() {
        log::debug!(
            "movement blocked at ({:.1}, {:.1}): x={} y={}",
            start.x,
            start.y,
            moved_x,
            moved_y
        );
    }
    outcome
}
