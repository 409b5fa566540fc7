mod board_view;
mod engine;
mod feedback;
mod game_state;
mod intent;
mod scheduler;
mod theme;

pub use board_view::BoardView;
pub use engine::{Engine, Evolution};
pub use feedback::{Cue, Feedback, Silent};
pub use game_state::GameState;
pub use intent::{Command, Intent};
pub use scheduler::{RunState, Scheduler, TimerId};
pub use theme::{PRESETS, ThemeColor};
