use std::time::Duration;

use macroquad::prelude::*;

use crate::application::{BoardView, Command, Feedback, GameState, Intent};
use crate::ui::{Button, SpeedSlider};

/// Keyboard shortcut table. Keys without a binding map to `None`.
pub fn key_command(key: KeyCode) -> Option<Command> {
    let command: Command = match key {
        KeyCode::Space => Intent::TogglePlay.into(),
        KeyCode::R => Intent::Reset.into(),
        KeyCode::C | KeyCode::D => Intent::Clear.into(),
        KeyCode::Z => Intent::Randomize.into(),
        // `+` shortens the interval, `-` lengthens it
        KeyCode::Equal | KeyCode::KpAdd => Intent::Faster.into(),
        KeyCode::Minus | KeyCode::KpSubtract => Intent::Slower.into(),
        KeyCode::Slash => Command::ToggleHelp,
        KeyCode::Escape => Command::CloseHelp,
        KeyCode::M => Command::ToggleMute,
        KeyCode::T => Command::NextTheme,
        _ => return None,
    };
    Some(command)
}

/// Commands for the keys pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    get_keys_pressed().into_iter().filter_map(key_command).collect()
}

/// Commands for buttons clicked this frame
pub fn button_commands(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command)
        .collect()
}

/// Paint under the pointer while the left button is held, so dragging
/// leaves a trail. Off-board positions are dropped by the grid itself.
pub fn handle_mouse_paint<F: Feedback>(
    state: &mut GameState<F>,
    view: &BoardView,
    mouse_pos: (f32, f32),
    now: Duration,
) {
    if !is_mouse_button_down(MouseButton::Left) {
        return;
    }
    let (row, col) = view.screen_to_cell(mouse_pos.0, mouse_pos.1);
    state.paint(row, col, now);
}

/// Interval from the slider while the left button is held on its track
pub fn handle_slider_drag<F: Feedback>(
    state: &mut GameState<F>,
    slider: &SpeedSlider,
    mouse_pos: (f32, f32),
    now: Duration,
) {
    if !is_mouse_button_down(MouseButton::Left) || state.pointer_held() {
        return;
    }
    if let Some(command) = slider.command_at(mouse_pos) {
        state.apply(command, now);
    }
}

/// Collect and apply this frame's input in arrival order:
/// keyboard first, then buttons and the slider, then board painting.
pub fn process_input<F: Feedback>(
    state: &mut GameState<F>,
    buttons: &[Button],
    slider: &SpeedSlider,
    view: &BoardView,
    now: Duration,
) {
    let mouse_pos = mouse_position();

    if !is_mouse_button_down(MouseButton::Left) {
        state.release_pointer();
    }

    for command in keyboard_commands() {
        state.apply(command, now);
    }

    // A click anywhere dismisses the help overlay and does nothing else
    if state.show_help && is_mouse_button_pressed(MouseButton::Left) {
        state.dismiss_help(now);
        return;
    }

    for command in button_commands(buttons, mouse_pos) {
        state.apply(command, now);
    }

    handle_slider_drag(state, slider, mouse_pos, now);

    let on_control = slider.is_hovered(mouse_pos) || buttons.iter().any(|btn| btn.is_hovered(mouse_pos));
    if !on_control {
        handle_mouse_paint(state, view, mouse_pos, now);
    }
}
