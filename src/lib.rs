//! Torus Snake - snake on a wrap-around grid, played in the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard and drag gesture adapters (input module)
//! - TUI rendering (render module)
//! - The fixed-rate play loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
