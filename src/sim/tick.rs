//! Per-frame simulation update
//!
//! One update applies the commands queued since the last frame, in order, and
//! then moves the player once. There is no delta time: speed is per frame.

use super::input::Command;
use super::movement::{MoveOutcome, MoveParams, advance};
use super::state::GameState;

/// Apply a single command to the player
pub fn apply_command(state: &mut GameState, command: Command) {
    match command {
        Command::SetSpeed(speed) => state.player.speed = speed,
        Command::AdjustAngle(delta) => state.player.angle += delta,
    }
    log::debug!("applied {:?} at frame {}", command, state.frame);
}

/// Advance the game state by one frame
pub fn tick<I>(state: &mut GameState, commands: I, params: &MoveParams) -> MoveOutcome
where
    I: IntoIterator<Item = Command>,
{
    for command in commands {
        apply_command(state, command);
    }

    let outcome = advance(&mut state.player, &state.map, params);
    state.frame += 1;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{CommandQueue, InputParams, Key, KeyEvent};
    use glam::Vec2;

    fn params() -> MoveParams {
        MoveParams {
            cell_size: 64.0,
            look_ahead: 4.0,
        }
    }

    #[test]
    fn test_tick_idle() {
        let mut state = GameState::dungeon(64.0);
        let start = state.player;

        tick(&mut state, std::iter::empty(), &params());
        assert_eq!(state.player, start);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_commands_apply_before_movement() {
        let mut state = GameState::dungeon(64.0);
        state.player.angle = 0.0;

        tick(&mut state, [Command::SetSpeed(2.0)], &params());
        assert!((state.player.pos.x - 98.0).abs() < 1e-4);

        tick(&mut state, [Command::SetSpeed(0.0)], &params());
        assert!((state.player.pos.x - 98.0).abs() < 1e-4);
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn test_turns_accumulate() {
        let mut state = GameState::dungeon(64.0);
        state.player.angle = 0.0;

        let input = InputParams::default();
        let mut queue = CommandQueue::new();
        for _ in 0..3 {
            queue.push_key(KeyEvent::Pressed(Key::Right), &input);
        }
        queue.push_key(KeyEvent::Pressed(Key::Left), &input);
        tick(&mut state, queue.drain(), &params());

        assert!((state.player.angle - 0.2).abs() < 1e-5);
        assert_eq!(state.player.pos, Vec2::new(96.0, 96.0));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::dungeon(64.0);
        let mut state2 = GameState::dungeon(64.0);

        let frames = [
            vec![Command::SetSpeed(2.0)],
            vec![Command::AdjustAngle(0.1)],
            vec![],
            vec![Command::AdjustAngle(-0.3), Command::SetSpeed(-2.0)],
            vec![],
        ];

        for commands in &frames {
            tick(&mut state1, commands.iter().copied(), &params());
            tick(&mut state2, commands.iter().copied(), &params());
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.player, state2.player);
    }
}
