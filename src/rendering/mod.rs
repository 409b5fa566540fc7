use macroquad::prelude::*;

use crate::application::{Feedback, GameState};
use crate::domain::Grid;
use crate::ui::{Button, Layout, MARGIN, SWATCH_SIZE, SpeedSlider, help, theme_to_color};

const BACKGROUND: Color = Color::new(0.008, 0.024, 0.090, 1.0);
const BOARD_COLOR: Color = Color::new(0.059, 0.090, 0.165, 1.0);
// Dead cells are a faint square so the board structure stays visible
const DEAD_CELL: Color = Color::new(1.0, 1.0, 1.0, 0.03);
const MUTED_TEXT: Color = Color::new(0.58, 0.64, 0.72, 1.0);

/// Draw the board; each cell leaves a 1px gap to suggest grid lines
pub fn draw_grid(grid: &Grid, layout: &Layout, alive: Color) {
    let view = &layout.view;
    draw_rectangle(view.origin_x, view.origin_y, layout.board_width, layout.board_height, BOARD_COLOR);

    let inner = (view.cell_size - 2.0).max(1.0);
    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = view.cell_to_screen(row, col);
        let color = if cell.is_alive() { alive } else { DEAD_CELL };
        draw_rectangle(x + 1.0, y + 1.0, inner, inner, color);
    }
}

fn draw_header(accent: Color) {
    draw_text("Game of Life", MARGIN, 42.0, 40.0, accent);
    draw_text("SPACE to run  |  ? for help", MARGIN, 62.0, 16.0, MUTED_TEXT);
}

fn draw_paint_hint(layout: &Layout) {
    let text = "Click or drag to paint cells";
    let size = measure_text(text, None, 24, 1.0);
    let x = layout.view.origin_x + (layout.board_width - size.width) / 2.0;
    let y = layout.view.origin_y + (layout.board_height + size.height) / 2.0;
    // Slow pulse
    let alpha = 0.45 + 0.25 * (get_time() as f32 * 3.0).sin();
    draw_text(text, x, y, 24.0, Color::new(0.39, 0.45, 0.55, alpha));
}

/// Generation, speed and status readouts under the settings row
fn draw_stats<F: Feedback>(state: &GameState<F>, layout: &Layout, accent: Color) {
    let scheduler = &state.scheduler;
    let y = layout.settings_y + SWATCH_SIZE + 24.0;

    let (status, status_color) = if scheduler.is_playing() {
        ("Running", Color::from_rgba(34, 197, 94, 255))
    } else {
        ("Stopped", Color::from_rgba(249, 115, 22, 255))
    };

    let labels = [
        (format!("Generation {}", scheduler.generation()), MARGIN, accent),
        (format!("Step every {} ms", scheduler.interval_ms()), MARGIN + 220.0, MUTED_TEXT),
        (format!("Population {}", scheduler.grid().population()), MARGIN + 440.0, MUTED_TEXT),
        (status.to_owned(), MARGIN + 660.0, status_color),
    ];

    labels.iter().for_each(|(text, x, color)| {
        draw_text(text, *x, y, 22.0, *color);
    });
}

/// Draw one full frame
pub fn draw_frame<F: Feedback>(
    state: &GameState<F>,
    layout: &Layout,
    buttons: &[Button],
    slider: &SpeedSlider,
    mouse_pos: (f32, f32),
) {
    let accent = theme_to_color(state.theme);

    clear_background(BACKGROUND);
    draw_header(accent);
    draw_grid(state.scheduler.grid(), layout, accent);
    if state.show_paint_hint() && !state.show_help {
        draw_paint_hint(layout);
    }

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    slider.draw(state.scheduler.interval_ms(), accent);
    draw_stats(state, layout, accent);

    // Overlay last so it covers everything
    if state.show_help {
        help::draw_help_overlay(layout, accent);
    }
}
