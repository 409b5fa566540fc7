use std::time::Duration;

use tracing::debug;

use super::{Command, Engine, Feedback, Intent, Scheduler, ThemeColor};
use crate::config::GameConfig;

/// GameState orchestrates the simulation and the presentation toggles
/// around it. This is the application layer the frame loop talks to.
pub struct GameState<F: Feedback> {
    pub scheduler: Scheduler<F>,
    pub theme: ThemeColor,
    pub show_help: bool,
    /// Set when a click dismissed the help overlay; the pointer does not
    /// paint again until that button is released.
    pointer_held: bool,
}

impl<F: Feedback> GameState<F> {
    pub fn new(scheduler: Scheduler<F>) -> Self {
        Self {
            scheduler,
            theme: ThemeColor::default(),
            show_help: false,
            pointer_held: false,
        }
    }

    /// Build the full state from a validated config
    pub fn from_config(config: &GameConfig, mut feedback: F) -> Self {
        feedback.set_muted(config.audio.muted);
        let engine = Engine::from_config(&config.board);
        let scheduler = Scheduler::new(engine, feedback, config.timing);
        Self {
            scheduler,
            theme: config.theme_color().unwrap_or_default(),
            show_help: config.display.show_help_on_start,
            pointer_held: false,
        }
    }

    pub fn apply(&mut self, command: Command, now: Duration) {
        match command {
            Command::Sim(intent) => self.scheduler.dispatch(intent, now),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::CloseHelp => self.show_help = false,
            Command::ToggleMute => {
                let muted = !self.scheduler.feedback().is_muted();
                self.scheduler.feedback_mut().set_muted(muted);
                debug!(muted, "mute");
            }
            Command::NextTheme => self.theme = self.theme.next_preset(),
            Command::SetTheme(color) => self.theme = color,
        }
    }

    /// Close the help overlay from a pointer press. The press is consumed:
    /// it keeps blocking paint until [`GameState::release_pointer`].
    pub fn dismiss_help(&mut self, now: Duration) {
        self.apply(Command::CloseHelp, now);
        self.pointer_held = true;
    }

    pub fn release_pointer(&mut self) {
        self.pointer_held = false;
    }

    /// Whether the pointer is still busy with the press that closed the help overlay
    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Paint from pointer input. Suppressed while the help overlay covers
    /// the board and while the press that closed it is still held.
    pub fn paint(&mut self, row: i32, col: i32, now: Duration) {
        if !self.show_help && !self.pointer_held {
            self.apply(Command::Sim(Intent::Paint { row, col }), now);
        }
    }

    /// Advance the timer; returns whether a generation was computed
    pub fn tick(&mut self, now: Duration) -> bool {
        self.scheduler.poll(now)
    }

    /// The "paint here" hint shows on an untouched, stopped, empty board
    pub fn show_paint_hint(&self) -> bool {
        self.scheduler.generation() == 0
            && !self.scheduler.is_playing()
            && self.scheduler.grid().is_all_dead()
    }
}
