use macroquad::prelude::*;

use super::Layout;

const RULES: [(&str, &str); 4] = [
    ("Underpopulation:", "a live cell with fewer than 2 neighbors dies."),
    ("Survival:", "a live cell with 2 or 3 neighbors lives on."),
    ("Overpopulation:", "a live cell with more than 3 neighbors dies."),
    ("Reproduction:", "a dead cell with exactly 3 neighbors comes alive."),
];

pub const SHORTCUTS: [(&str, &str); 8] = [
    ("Play / Pause", "Space"),
    ("Reset pattern", "R"),
    ("Clear board", "C / D"),
    ("Randomize", "Z"),
    ("Faster / Slower", "+ / -"),
    ("Mute", "M"),
    ("Next theme", "T"),
    ("Help", "?"),
];

/// Modal guide drawn over the whole window
pub fn draw_help_overlay(layout: &Layout, accent: Color) {
    draw_rectangle(0.0, 0.0, layout.width, layout.height, Color::from_rgba(0, 0, 0, 160));

    let panel_w = (layout.width - 80.0).min(640.0);
    let panel_h = 440.0_f32.min(layout.height - 40.0);
    let x = (layout.width - panel_w) / 2.0;
    let y = (layout.height - panel_h) / 2.0;
    draw_rectangle(x, y, panel_w, panel_h, Color::from_rgba(15, 23, 42, 255));
    draw_rectangle_lines(x, y, panel_w, panel_h, 2.0, Color::from_rgba(51, 65, 85, 255));

    let left = x + 24.0;
    let mut line = y + 40.0;
    draw_text("Game of Life Guide", left, line, 30.0, accent);

    line += 40.0;
    draw_text("The Rules", left, line, 22.0, WHITE);
    for (name, text) in RULES {
        line += 24.0;
        let name_width = measure_text(name, None, 17, 1.0).width;
        draw_text(name, left, line, 17.0, accent);
        draw_text(text, left + name_width + 8.0, line, 17.0, LIGHTGRAY);
    }

    line += 40.0;
    draw_text("Shortcuts", left, line, 22.0, WHITE);
    let column_w = (panel_w - 48.0) / 2.0;
    for (idx, (action, key)) in SHORTCUTS.iter().enumerate() {
        let cx = left + (idx % 2) as f32 * column_w;
        let cy = line + 26.0 * (idx / 2 + 1) as f32;
        draw_text(action, cx, cy, 17.0, LIGHTGRAY);
        let key_width = measure_text(key, None, 17, 1.0).width;
        draw_text(key, cx + column_w - key_width - 16.0, cy, 17.0, WHITE);
    }

    draw_text(
        "Click anywhere or press Esc to start painting",
        left,
        y + panel_h - 20.0,
        16.0,
        GRAY,
    );
}
