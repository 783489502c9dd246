//! Core game logic for snake on a wrap-around grid
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front-end drives it through [`GameEngine::update`] once per tick.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickResult};
pub use state::{GameState, MAX_QUEUED_DIRECTIONS, Position, Snake};
