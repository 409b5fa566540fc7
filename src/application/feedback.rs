/// Discrete notifications the simulation emits for audio/visual feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A cell was painted
    Click,
    /// Simulation started playing
    Start,
    Pause,
    /// One generation advanced
    Step,
    /// Board restored from the snapshot
    Reset,
    Clear,
    /// Board randomized
    Success,
}

impl Cue {
    pub const ALL: [Cue; 7] = [
        Cue::Click,
        Cue::Start,
        Cue::Pause,
        Cue::Step,
        Cue::Reset,
        Cue::Clear,
        Cue::Success,
    ];
}

/// Receiver of cues. Implementations must not block and cannot fail
/// the caller; anything they cannot render is dropped.
pub trait Feedback {
    fn cue(&mut self, cue: Cue);

    fn set_muted(&mut self, _muted: bool) {}

    fn is_muted(&self) -> bool {
        false
    }
}

/// Feedback sink that discards every cue but still tracks the mute toggle
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent {
    muted: bool,
}

impl Feedback for Silent {
    fn cue(&mut self, _cue: Cue) {}

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Records cues in order; handy for inspecting what a sequence of intents emitted
impl Feedback for Vec<Cue> {
    fn cue(&mut self, cue: Cue) {
        self.push(cue);
    }
}
