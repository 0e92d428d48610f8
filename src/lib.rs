//! Dungeon Crawl - a first-person grid raycaster
//!
//! Core modules:
//! - `sim`: Deterministic simulation (map, player, movement, ray casting)
//! - `renderer`: Column renderer over an abstract drawing surface
//! - `game`: Frame driver tying input, simulation and rendering together
//! - `platform`: Browser canvas host
//! - `settings`: Serde-backed tunables

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{MapError, SettingsError};
pub use game::Game;
pub use settings::{Palette, Settings};

/// Game configuration constants
pub mod consts {
    /// World units per grid cell
    pub const CELL_SIZE: f32 = 64.0;

    /// Horizontal field of view (60 degrees)
    pub const FOV: f32 = std::f32::consts::FRAC_PI_3;

    /// Screen pixels drawn per cast ray
    pub const COLUMN_WIDTH: u32 = 2;

    /// Smallest distance used for wall-height projection
    pub const MIN_DISTANCE: f32 = 1e-3;
}
