use macroquad::prelude::*;

use crate::application::{Command, Intent};
use crate::config::TimingConfig;

/// Horizontal speed control. The left end is the slowest interval, the
/// right end the fastest; dragging along the track sets the interval directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedSlider {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    min_ms: u64,
    max_ms: u64,
}

impl SpeedSlider {
    pub fn new(x: f32, y: f32, width: f32, height: f32, timing: &TimingConfig) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_ms: timing.min_interval_ms,
            max_ms: timing.max_interval_ms,
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Interval under horizontal position `x`; positions past either end pin to it
    pub fn interval_at(&self, x: f32) -> i64 {
        let t = if self.width > 0.0 {
            ((x - self.x) / self.width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let span = self.max_ms.saturating_sub(self.min_ms) as f32;
        (self.max_ms as f32 - t * span).round() as i64
    }

    /// Handle position for the given interval, the inverse of [`SpeedSlider::interval_at`]
    pub fn handle_x(&self, interval_ms: u64) -> f32 {
        let span = self.max_ms.saturating_sub(self.min_ms);
        if span == 0 {
            return self.x;
        }
        let clamped = interval_ms.clamp(self.min_ms, self.max_ms);
        let t = (self.max_ms - clamped) as f32 / span as f32;
        self.x + t * self.width
    }

    /// Interval request for a pointer held on the track
    pub fn command_at(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        self.is_hovered(mouse_pos)
            .then(|| Intent::SetTickInterval(self.interval_at(mouse_pos.0)).into())
    }

    pub fn draw(&self, interval_ms: u64, accent: Color) {
        let track_y = self.y + self.height / 2.0;
        let handle = self.handle_x(interval_ms);

        draw_line(self.x, track_y, self.x + self.width, track_y, 4.0, Color::from_rgba(51, 65, 85, 255));
        draw_line(self.x, track_y, handle, track_y, 4.0, accent);
        draw_circle(handle, track_y, self.height / 2.5, WHITE);
        draw_text("Slow", self.x, self.y - 4.0, 16.0, GRAY);
        let fast = measure_text("Fast", None, 16, 1.0);
        draw_text("Fast", self.x + self.width - fast.width, self.y - 4.0, 16.0, GRAY);
    }
}
