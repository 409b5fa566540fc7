use super::ThemeColor;

/// User intents the simulation understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Bring a cell to life; coordinates may be off the board
    Paint { row: i32, col: i32 },
    Play,
    Pause,
    TogglePlay,
    /// Restore the snapshot taken when play started (or clear if none)
    Reset,
    Clear,
    Randomize,
    /// Requested delay between steps, clamped into the configured bounds
    SetTickInterval(i64),
    /// Shorten the interval by one configured step
    Faster,
    /// Lengthen the interval by one configured step
    Slower,
}

/// Everything the input layer can ask of the app: simulation intents plus
/// presentation toggles that never touch the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Sim(Intent),
    ToggleHelp,
    CloseHelp,
    ToggleMute,
    NextTheme,
    SetTheme(ThemeColor),
}

impl From<Intent> for Command {
    fn from(intent: Intent) -> Self {
        Command::Sim(intent)
    }
}
