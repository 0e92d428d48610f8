//! Frame driver
//!
//! Owns the simulation state, the pending input and the settings. Hosts feed
//! it key events whenever they arrive and call [`Game::run_frame`] once per
//! display refresh.

use crate::error::SettingsError;
use crate::renderer::{Surface, ViewParams, render_frame};
use crate::settings::Settings;
use crate::sim::{CommandQueue, GameState, InputParams, KeyEvent, MoveOutcome, MoveParams, tick};

/// A running game
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    queue: CommandQueue,
    settings: Settings,
    move_params: MoveParams,
    input_params: InputParams,
    view: ViewParams,
}

impl Game {
    /// Start in the built-in dungeon at the spawn pose
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let state = GameState::dungeon(settings.cell_size);
        log::info!(
            "dungeon {}x{}, player at ({:.1}, {:.1})",
            state.map.width(),
            state.map.height(),
            state.player.pos.x,
            state.player.pos.y
        );
        Ok(Self::with_state(state, settings))
    }

    /// Run an existing state with already-validated settings
    pub fn with_state(state: GameState, settings: Settings) -> Self {
        Self {
            state,
            queue: CommandQueue::new(),
            move_params: settings.move_params(),
            input_params: settings.input_params(),
            view: settings.view_params(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Queue a key event for the next frame
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.queue.push_key(event, &self.input_params);
    }

    /// Number of commands waiting for the next frame
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Apply queued input and move the player, without drawing
    pub fn update(&mut self) -> MoveOutcome {
        tick(&mut self.state, self.queue.drain(), &self.move_params)
    }

    /// Draw the current view
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_frame(surface, &self.state.player, &self.state.map, &self.view);
    }

    /// One full frame: update, then render
    pub fn run_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> MoveOutcome {
        let outcome = self.update();
        self.render(surface);
        outcome
    }
}
