// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Edges - configuration and error types
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input, audio
pub mod audio;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{
    BoardView, Command, Cue, Engine, Evolution, Feedback, GameState, Intent, RunState, Scheduler,
    Silent, ThemeColor,
};
pub use config::GameConfig;
pub use domain::{Cell, Grid};
pub use error::{LifeError, Result};
