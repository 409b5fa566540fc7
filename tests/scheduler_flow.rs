//! End-to-end flows through the public intent API with a manual clock.

use std::time::Duration;

use life_board::config::TimingConfig;
use life_board::{Cue, Engine, GameConfig, GameState, Grid, Intent, RunState, Scheduler};

fn at(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn glider_scheduler() -> Scheduler<Vec<Cue>> {
    let grid = Grid::from_rows(&[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
    ])
    .unwrap();
    let engine = Engine::new(6, 8, 0.3).with_grid(grid);
    Scheduler::new(engine, Vec::new(), TimingConfig::default())
}

/// Fire every due step between `from` and `to` in 10 ms host frames
fn run_frames(s: &mut Scheduler<Vec<Cue>>, from: u64, to: u64) -> usize {
    (from..=to).step_by(10).filter(|&t| s.poll(at(t))).count()
}

#[test]
fn play_steps_then_reset_restores_board() {
    let mut s = glider_scheduler();
    let painted_at_start = s.grid().clone();

    s.dispatch(Intent::Play, at(0));
    let fired = run_frames(&mut s, 0, 2000);
    // Steps at 0, 500, 1000, 1500, 2000
    assert_eq!(fired, 5);
    assert_eq!(s.generation(), 5);
    assert_ne!(s.grid(), &painted_at_start);

    s.dispatch(Intent::Reset, at(2005));
    assert_eq!(s.grid(), &painted_at_start);
    assert_eq!(s.generation(), 0);
    assert_eq!(s.run_state(), RunState::Stopped);
    assert_eq!(run_frames(&mut s, 2010, 5000), 0);
}

#[test]
fn no_step_fires_after_clear() {
    let mut s = glider_scheduler();
    s.dispatch(Intent::Play, at(0));
    run_frames(&mut s, 0, 700);
    s.dispatch(Intent::Clear, at(705));

    let steps_before = s.feedback().iter().filter(|&&c| c == Cue::Step).count();
    assert_eq!(run_frames(&mut s, 710, 10_000), 0);
    let steps_after = s.feedback().iter().filter(|&&c| c == Cue::Step).count();

    assert_eq!(steps_before, steps_after);
    assert!(s.grid().is_all_dead());
    assert_eq!(s.feedback().last(), Some(&Cue::Clear));
}

#[test]
fn speed_change_applies_without_restart() {
    let mut s = glider_scheduler();
    s.dispatch(Intent::Play, at(0));
    assert!(s.poll(at(0)));
    s.dispatch(Intent::SetTickInterval(100), at(50));
    // The already scheduled step still lands at 500, later ones every 100 ms
    assert_eq!(run_frames(&mut s, 60, 490), 0);
    assert_eq!(run_frames(&mut s, 500, 800), 4);
    assert_eq!(s.generation(), 5);
}

#[test]
fn intervals_are_clamped() {
    let mut s = glider_scheduler();
    s.dispatch(Intent::SetTickInterval(-5), at(0));
    assert_eq!(s.interval_ms(), 50);
    s.dispatch(Intent::SetTickInterval(5000), at(0));
    assert_eq!(s.interval_ms(), 1000);
    s.dispatch(Intent::SetTickInterval(i64::MIN), at(0));
    assert_eq!(s.interval_ms(), 50);
}

#[test]
fn cue_sequence_matches_session() {
    let mut s = glider_scheduler();
    s.dispatch(Intent::Paint { row: 5, col: 7 }, at(0));
    s.dispatch(Intent::Paint { row: -3, col: 100 }, at(0));
    s.dispatch(Intent::TogglePlay, at(0));
    s.poll(at(0));
    s.dispatch(Intent::TogglePlay, at(100));
    s.dispatch(Intent::Randomize, at(200));
    s.dispatch(Intent::Reset, at(300));
    s.dispatch(Intent::Clear, at(400));

    assert_eq!(
        s.feedback(),
        &vec![
            Cue::Click,
            Cue::Start,
            Cue::Step,
            Cue::Pause,
            Cue::Success,
            Cue::Reset,
            Cue::Clear,
        ]
    );
}

#[test]
fn randomize_then_play_then_reset_returns_random_board() {
    let mut s = glider_scheduler();
    s.dispatch(Intent::Randomize, at(0));
    let random = s.grid().clone();
    s.dispatch(Intent::Play, at(0));
    run_frames(&mut s, 0, 1000);
    s.dispatch(Intent::Reset, at(1001));
    assert_eq!(s.grid(), &random);
}

#[test]
fn game_state_runs_reference_board() {
    let mut state = GameState::from_config(&GameConfig::default(), Vec::new());
    state.apply(Intent::Randomize.into(), at(0));
    state.apply(Intent::Play.into(), at(0));
    // 16 ms frames: steps land on the frames at 0 and 512, the next is due at 1012
    for t in (0..=1000).step_by(16) {
        state.tick(at(t));
    }
    assert_eq!(state.scheduler.grid().dimensions(), (40, 60));
    assert_eq!(state.scheduler.generation(), 2);
}

#[test]
fn randomize_mid_run_retires_old_step_handle() {
    let mut s = glider_scheduler();
    s.dispatch(Intent::Play, at(0));
    assert!(s.poll(at(0)));
    let stale = s.pending_timer().unwrap();

    s.dispatch(Intent::Randomize, at(100));
    assert!(s.is_playing());
    assert!(!s.fire(stale, at(500)));
    assert_eq!(s.generation(), 0);

    // The run carries on from the new board on the original cadence
    assert_eq!(run_frames(&mut s, 110, 490), 0);
    assert_eq!(run_frames(&mut s, 500, 500), 1);
    assert_eq!(s.generation(), 1);
}
