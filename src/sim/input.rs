//! Keyboard input as queued commands
//!
//! Key events never touch the player directly. They are translated into
//! [`Command`]s and queued; the frame loop drains the queue at the start of
//! each update so a frame always sees a consistent player.

use std::collections::VecDeque;

/// Speed set by the forward/backward keys (world units per frame)
pub const MOVE_SPEED: f32 = 2.0;

/// Turn applied per turn key press (radians)
pub const TURN_STEP: f32 = 0.1;

/// The keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// A raw key transition from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// A state change to apply at the start of the next update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Replace the player's speed
    SetSpeed(f32),
    /// Add to the player's facing angle
    AdjustAngle(f32),
}

/// Key mapping tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputParams {
    pub move_speed: f32,
    pub turn_step: f32,
}

impl Default for InputParams {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            turn_step: TURN_STEP,
        }
    }
}

impl InputParams {
    /// Command for a key transition, if it has one
    ///
    /// Turning is a single step per press, not a held rate; releasing a turn
    /// key does nothing.
    pub fn command_for(&self, event: KeyEvent) -> Option<Command> {
        match event {
            KeyEvent::Pressed(Key::Up) => Some(Command::SetSpeed(self.move_speed)),
            KeyEvent::Pressed(Key::Down) => Some(Command::SetSpeed(-self.move_speed)),
            KeyEvent::Released(Key::Up | Key::Down) => Some(Command::SetSpeed(0.0)),
            KeyEvent::Pressed(Key::Left) => Some(Command::AdjustAngle(-self.turn_step)),
            KeyEvent::Pressed(Key::Right) => Some(Command::AdjustAngle(self.turn_step)),
            KeyEvent::Released(Key::Left | Key::Right) => None,
        }
    }
}

/// FIFO of commands waiting for the next update
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Translate and enqueue a key event; unmapped transitions are dropped
    pub fn push_key(&mut self, event: KeyEvent, params: &InputParams) {
        if let Some(command) = params.command_for(event) {
            self.push(command);
        }
    }

    /// Remove and yield every pending command in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
