//! Play/pause state machine that drives the engine on a timer.
//!
//! The scheduler never sleeps or spawns. It keeps at most one pending step,
//! identified by a [`TimerId`], and the host calls [`Scheduler::poll`] with
//! the current time from its own loop. Any transition out of `Running`
//! drops the pending step, so a handle taken before a clear, reset or pause
//! can no longer fire. Randomizing while running reissues the pending step
//! under a new handle, which retires the old one the same way.

use std::time::Duration;

use tracing::{debug, trace};

use super::{Cue, Engine, Feedback, Intent};
use crate::config::TimingConfig;
use crate::domain::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Handle of a scheduled step. Only the most recently issued handle can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug)]
struct PendingStep {
    id: TimerId,
    due: Duration,
}

pub struct Scheduler<F: Feedback> {
    engine: Engine,
    feedback: F,
    timing: TimingConfig,
    interval_ms: u64,
    run_state: RunState,
    pending: Option<PendingStep>,
    next_timer: u64,
}

impl<F: Feedback> Scheduler<F> {
    pub fn new(engine: Engine, feedback: F, timing: TimingConfig) -> Self {
        let requested = i64::try_from(timing.initial_interval_ms).unwrap_or(i64::MAX);
        let interval_ms = timing.clamp_interval(requested);
        Self {
            engine,
            feedback,
            timing,
            interval_ms,
            run_state: RunState::Stopped,
            pending: None,
            next_timer: 0,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn generation(&self) -> u64 {
        self.engine.generation()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_playing(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Handle of the step that will fire next, if any
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.map(|p| p.id)
    }

    /// When the pending step becomes due
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Apply one intent. `now` is only read by intents that schedule a step.
    pub fn dispatch(&mut self, intent: Intent, now: Duration) {
        match intent {
            Intent::Paint { row, col } => {
                self.paint(row, col);
            }
            Intent::Play => self.play(now),
            Intent::Pause => self.pause(),
            Intent::TogglePlay => self.toggle_play(now),
            Intent::Reset => self.reset(),
            Intent::Clear => self.clear(),
            Intent::Randomize => self.randomize(),
            Intent::SetTickInterval(ms) => self.set_tick_interval(ms),
            Intent::Faster => self.faster(),
            Intent::Slower => self.slower(),
        }
    }

    /// Start running. The board is captured for reset when nothing was
    /// captured yet or the counter is still at zero. The first step is due
    /// immediately.
    pub fn play(&mut self, now: Duration) {
        if self.is_playing() {
            return;
        }
        if self.engine.snapshot().is_none() || self.engine.generation() == 0 {
            self.engine.capture_snapshot();
        }
        self.run_state = RunState::Running;
        debug!(generation = self.engine.generation(), "play");
        self.feedback.cue(Cue::Start);
        self.schedule(now);
    }

    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.stop();
        debug!(generation = self.engine.generation(), "pause");
        self.feedback.cue(Cue::Pause);
    }

    pub fn toggle_play(&mut self, now: Duration) {
        match self.run_state {
            RunState::Stopped => self.play(now),
            RunState::Running => self.pause(),
        }
    }

    /// Restore the snapshot and stop; behaves like [`Scheduler::clear`]
    /// when there is nothing to restore.
    pub fn reset(&mut self) {
        if !self.engine.restore_snapshot() {
            self.clear();
            return;
        }
        self.stop();
        debug!("reset to snapshot");
        self.feedback.cue(Cue::Reset);
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.stop();
        debug!("clear");
        self.feedback.cue(Cue::Clear);
    }

    /// Fill the board randomly. Run state is left alone: when running,
    /// the simulation carries on from the new board. The pending step keeps
    /// its due time but gets a new handle, so steps aimed at the old board
    /// are rejected.
    pub fn randomize(&mut self) {
        self.engine.randomize();
        if let (RunState::Running, Some(pending)) = (self.run_state, self.pending) {
            self.schedule(pending.due);
        }
        debug!(
            population = self.engine.grid().population(),
            running = self.is_playing(),
            "randomize"
        );
        self.feedback.cue(Cue::Success);
    }

    /// Paint a cell alive. Ignored while running; off-board coordinates
    /// are ignored too. Returns whether the board changed.
    pub fn paint(&mut self, row: i32, col: i32) -> bool {
        if self.is_playing() || !self.engine.paint(row, col) {
            return false;
        }
        self.feedback.cue(Cue::Click);
        true
    }

    /// Store a new interval, clamped into bounds. The pending step keeps its
    /// due time; the new value applies when the next step is scheduled.
    pub fn set_tick_interval(&mut self, ms: i64) {
        self.interval_ms = self.timing.clamp_interval(ms);
        debug!(interval_ms = self.interval_ms, requested = ms, "tick interval");
    }

    pub fn faster(&mut self) {
        let ms = self.interval_ms.saturating_sub(self.timing.interval_step_ms);
        self.store_interval(ms);
    }

    pub fn slower(&mut self) {
        let ms = self.interval_ms.saturating_add(self.timing.interval_step_ms);
        self.store_interval(ms);
    }

    fn store_interval(&mut self, ms: u64) {
        self.interval_ms = ms.clamp(self.timing.min_interval_ms, self.timing.max_interval_ms);
        debug!(interval_ms = self.interval_ms, "tick interval");
    }

    /// Fire the pending step if it is due. At most one step per call.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending {
            Some(pending) if pending.due <= now => self.fire(pending.id, now),
            _ => false,
        }
    }

    /// Fire the step behind `id`. Handles that were cancelled or already
    /// fired do nothing.
    pub fn fire(&mut self, id: TimerId, now: Duration) -> bool {
        let live = self.pending.is_some_and(|p| p.id == id) && self.is_playing();
        if !live {
            trace!(?id, "stale step ignored");
            return false;
        }
        self.pending = None;
        self.engine.step();
        trace!(generation = self.engine.generation(), "step");
        self.feedback.cue(Cue::Step);
        self.schedule(now + self.tick_interval());
        true
    }

    fn schedule(&mut self, due: Duration) {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.pending = Some(PendingStep { id, due });
    }

    fn stop(&mut self) {
        self.pending = None;
        self.run_state = RunState::Stopped;
    }
}
