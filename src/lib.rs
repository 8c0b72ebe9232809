//! Swipe-controlled Snake for mouse-capable terminals.
//!
//! The simulation is a fixed-tick grid game: [`game::GameState`] owns the
//! snake, the food and the score, and advances one cell per tick. Input
//! arrives as swipe gestures (mouse press/release pairs) or arrow keys and
//! only ever writes the snake's pending direction; the renderer is a passive
//! read of the state.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
