//! Game settings
//!
//! Tunables for projection, movement and colours. Loaded from JSON by the
//! native host; every field has a default so partial files are accepted.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::renderer::{Rgb, ViewParams};
use crate::sim::raycast::MAX_RAY_STEPS;
use crate::sim::{CastParams, InputParams, MoveParams};

/// Flat colours of the frame background bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub ceiling: Rgb,
    pub floor: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BLACK,
            ceiling: Rgb::gray(0x55),
            floor: Rgb::gray(0x33),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Projection ===
    /// Horizontal field of view (radians)
    pub fov: f32,
    /// Screen pixels per cast ray
    pub column_width: u32,
    /// Distance floor for wall-height projection
    pub min_distance: f32,

    // === World ===
    /// World units per grid cell
    pub cell_size: f32,
    /// Ray search cap, in cells
    pub max_search_cells: f32,
    /// Ray march step, in world units
    pub ray_step: f32,

    // === Movement ===
    /// Speed set by the forward/backward keys (units per frame)
    pub move_speed: f32,
    /// Turn per key press (radians)
    pub turn_step: f32,
    /// Collision look-ahead multiplier
    pub look_ahead: f32,

    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov: FOV,
            column_width: COLUMN_WIDTH,
            min_distance: MIN_DISTANCE,

            cell_size: CELL_SIZE,
            max_search_cells: crate::sim::raycast::MAX_SEARCH_CELLS,
            ray_step: crate::sim::raycast::RAY_STEP,

            move_speed: crate::sim::input::MOVE_SPEED,
            turn_step: crate::sim::input::TURN_STEP,
            look_ahead: crate::sim::movement::LOOK_AHEAD,

            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("fov", self.fov)?;
        if self.fov >= std::f32::consts::PI {
            return Err(SettingsError::Invalid {
                field: "fov",
                reason: "must be less than pi radians",
            });
        }
        if self.column_width == 0 {
            return Err(SettingsError::Invalid {
                field: "column_width",
                reason: "must be at least one pixel",
            });
        }
        positive("min_distance", self.min_distance)?;
        positive("cell_size", self.cell_size)?;
        positive("max_search_cells", self.max_search_cells)?;
        positive("ray_step", self.ray_step)?;

        let cast = self.cast_params();
        if !cast.max_distance.is_finite() {
            return Err(SettingsError::Invalid {
                field: "max_search_cells",
                reason: "search distance overflows with this cell_size",
            });
        }
        if cast.required_steps() > MAX_RAY_STEPS as f32 {
            return Err(SettingsError::Invalid {
                field: "ray_step",
                reason: "too small for the search distance",
            });
        }

        positive("move_speed", self.move_speed)?;
        positive("turn_step", self.turn_step)?;
        positive("look_ahead", self.look_ahead)?;
        Ok(())
    }

    pub fn move_params(&self) -> MoveParams {
        MoveParams {
            cell_size: self.cell_size,
            look_ahead: self.look_ahead,
        }
    }

    pub fn cast_params(&self) -> CastParams {
        CastParams::new(self.cell_size, self.max_search_cells, self.ray_step)
    }

    pub fn input_params(&self) -> InputParams {
        InputParams {
            move_speed: self.move_speed,
            turn_step: self.turn_step,
        }
    }

    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            fov: self.fov,
            column_width: self.column_width,
            min_distance: self.min_distance,
            cast: self.cast_params(),
            palette: self.palette,
        }
    }
}
