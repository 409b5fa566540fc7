mod button;
pub mod help;
mod slider;

pub use button::Button;
pub use slider::SpeedSlider;

use macroquad::prelude::Color;

use crate::application::{BoardView, Command, Feedback, GameState, Intent, PRESETS, ThemeColor};

pub const MARGIN: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 70.0;
pub const CONTROLS_HEIGHT: f32 = 140.0;
pub const BUTTON_WIDTH: f32 = 88.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_GAP: f32 = 8.0;
const BUTTON_COUNT: usize = 9;
/// Gap between the button row and the slider/swatch row
const SETTINGS_OFFSET: f32 = BUTTON_HEIGHT + 24.0;
pub const SLIDER_WIDTH: f32 = 240.0;
pub const SWATCH_SIZE: f32 = 24.0;

/// Screen placement of the board and the control bar below it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub view: BoardView,
    pub board_width: f32,
    pub board_height: f32,
    pub controls_y: f32,
    /// Top of the speed slider and theme swatches
    pub settings_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Self {
        let view = BoardView::new(MARGIN, HEADER_HEIGHT, cell_size);
        let (board_width, board_height) = view.board_size(rows, cols);
        let buttons_width = BUTTON_COUNT as f32 * (BUTTON_WIDTH + BUTTON_GAP) - BUTTON_GAP;
        let controls_y = HEADER_HEIGHT + board_height + MARGIN;

        Self {
            view,
            board_width,
            board_height,
            controls_y,
            settings_y: controls_y + SETTINGS_OFFSET,
            width: board_width.max(buttons_width) + 2.0 * MARGIN,
            height: controls_y + CONTROLS_HEIGHT,
        }
    }
}

pub fn theme_to_color(theme: ThemeColor) -> Color {
    Color::from_rgba(theme.r, theme.g, theme.b, 255)
}

/// Create the control bar buttons. Labels follow the current state, so
/// they are rebuilt every frame.
pub fn create_buttons<F: Feedback>(state: &GameState<F>, layout: &Layout) -> Vec<Button> {
    let play_label = if state.scheduler.is_playing() { "Pause" } else { "Play" };
    let mute_label = if state.scheduler.feedback().is_muted() { "Unmute" } else { "Mute" };

    let entries: [(&str, Command); BUTTON_COUNT] = [
        (play_label, Intent::TogglePlay.into()),
        ("Reset", Intent::Reset.into()),
        ("Clear", Intent::Clear.into()),
        ("Random", Intent::Randomize.into()),
        ("Slower", Intent::Slower.into()),
        ("Faster", Intent::Faster.into()),
        (mute_label, Command::ToggleMute),
        ("Theme", Command::NextTheme),
        ("Help", Command::ToggleHelp),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, (label, command))| {
            let x = MARGIN + idx as f32 * (BUTTON_WIDTH + BUTTON_GAP);
            let button = Button::new(x, layout.controls_y, BUTTON_WIDTH, BUTTON_HEIGHT, label, command);
            if idx == 0 {
                button.with_color(theme_to_color(state.theme))
            } else {
                button
            }
        })
        .chain(create_swatches(layout))
        .collect()
}

/// One swatch per preset, right of the speed slider
fn create_swatches(layout: &Layout) -> impl Iterator<Item = Button> + '_ {
    let start = MARGIN + SLIDER_WIDTH + 4.0 * BUTTON_GAP;
    PRESETS.iter().enumerate().map(move |(idx, &preset)| {
        let x = start + idx as f32 * (SWATCH_SIZE + BUTTON_GAP);
        Button::new(x, layout.settings_y, SWATCH_SIZE, SWATCH_SIZE, "", Command::SetTheme(preset))
            .with_color(theme_to_color(preset))
    })
}

pub fn create_speed_slider<F: Feedback>(state: &GameState<F>, layout: &Layout) -> SpeedSlider {
    SpeedSlider::new(
        MARGIN,
        layout.settings_y,
        SLIDER_WIDTH,
        SWATCH_SIZE,
        state.scheduler.timing(),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::Silent;
    use crate::config::GameConfig;

    #[test]
    fn test_layout_fits_reference_board() {
        let layout = Layout::new(40, 60, 15.0);
        assert_eq!((layout.board_width, layout.board_height), (900.0, 600.0));
        assert_eq!(layout.width, 940.0);
        assert_eq!(layout.controls_y, HEADER_HEIGHT + 600.0 + MARGIN);
    }

    #[test]
    fn test_small_board_keeps_room_for_buttons() {
        let layout = Layout::new(5, 5, 10.0);
        assert!(layout.width >= BUTTON_COUNT as f32 * BUTTON_WIDTH);
    }

    #[test]
    fn test_buttons_follow_state() {
        let config = GameConfig::default();
        let mut state = GameState::from_config(&config, Silent::default());
        let layout = Layout::new(40, 60, 15.0);
        let buttons = create_buttons(&state, &layout);
        assert_eq!(buttons.len(), BUTTON_COUNT + PRESETS.len());
        assert_eq!(buttons[0].text(), "Play");
        assert_eq!(buttons[6].text(), "Mute");

        state.apply(Intent::Play.into(), Duration::ZERO);
        state.apply(Command::ToggleMute, Duration::ZERO);
        let buttons = create_buttons(&state, &layout);
        assert_eq!(buttons[0].text(), "Pause");
        assert_eq!(buttons[6].text(), "Unmute");
    }

    #[test]
    fn test_settings_row_emits_theme_and_speed() {
        let state = GameState::from_config(&GameConfig::default(), Silent::default());
        let layout = Layout::new(40, 60, 15.0);
        assert!(layout.settings_y + SWATCH_SIZE <= layout.height);

        let swatches: Vec<Command> = create_buttons(&state, &layout)
            .iter()
            .skip(BUTTON_COUNT)
            .map(Button::command)
            .collect();
        let expected: Vec<Command> = PRESETS.iter().map(|&p| Command::SetTheme(p)).collect();
        assert_eq!(swatches, expected);

        let slider = create_speed_slider(&state, &layout);
        let right_end = (MARGIN + SLIDER_WIDTH, layout.settings_y + 1.0);
        assert_eq!(
            slider.command_at(right_end),
            Some(Command::Sim(Intent::SetTickInterval(50)))
        );
    }
}
