//! Deterministic simulation module
//!
//! Map, player, movement and ray casting. This module must stay pure:
//! - No delta time; every update is one frame
//! - Input only arrives as queued commands
//! - No rendering or platform dependencies

pub mod input;
pub mod map;
pub mod movement;
pub mod raycast;
pub mod state;
pub mod tick;

pub use input::{Command, CommandQueue, InputParams, Key, KeyEvent};
pub use map::{Cell, CellQuery, GridMap};
pub use movement::{MoveOutcome, MoveParams, advance};
pub use raycast::{CastParams, HitKind, Ray, RayHit, cast};
pub use state::{GameState, Player};
pub use tick::{apply_command, tick};
