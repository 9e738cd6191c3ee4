//! Core game logic module for Snake
//!
//! Everything here is pure simulation: no I/O, no timers, no rendering
//! dependencies. The engine is driven by externally-scheduled `tick()` calls
//! and reports what happened through [`GameEvent`] values.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod events;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use collision::CollisionType;
pub use config::{GameConfig, GameMode};
pub use direction::Direction;
pub use engine::{GameEngine, GameStatus};
pub use events::{GameEvent, GameOverReason, GameSnapshot};
pub use grid::{Grid, Position};
pub use snake::Snake;
