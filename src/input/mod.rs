//! Input adapters: keyboard events and drag gestures to game commands

pub mod handler;
pub mod swipe;

pub use handler::{InputHandler, KeyAction};
pub use swipe::{Point, SwipeTracker};
