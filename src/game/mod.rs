//! Core game logic module for Snake
//!
//! Pure simulation without any I/O or rendering dependencies: the engine
//! advances one step per call and never schedules itself.

pub mod config;
pub mod engine;
pub mod heading;
pub mod state;

pub use config::{FoodSpawn, GameConfig};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use heading::Heading;
pub use state::{Cell, CollisionType, GameState, Snake, Status};
