//! Startup configuration.
//!
//! Every value has a default matching the reference board (40x60, 30% fill,
//! 50..=1000 ms between steps), so an empty or missing file is a valid config.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::application::ThemeColor;
use crate::error::{LifeError, Result};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub timing: TimingConfig,
    pub display: DisplayConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Chance that a cell starts alive when the board is randomized
    pub alive_probability: f64,
    /// Compute steps on the rayon pool instead of serially
    pub parallel_step: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 60,
            alive_probability: 0.3,
            parallel_step: false,
        }
    }
}

/// Bounds and defaults for the delay between simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    pub initial_interval_ms: u64,
    /// Amount one "faster"/"slower" intent shifts the interval by
    pub interval_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 50,
            max_interval_ms: 1000,
            initial_interval_ms: 500,
            interval_step_ms: 50,
        }
    }
}

impl TimingConfig {
    /// Clamp a requested interval into the configured bounds.
    /// Negative requests land on the minimum.
    pub fn clamp_interval(&self, ms: i64) -> u64 {
        u64::try_from(ms)
            .unwrap_or(0)
            .clamp(self.min_interval_ms, self.max_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub cell_size: f32,
    /// Live cell color as `#rrggbb`
    pub theme: String,
    pub show_help_on_start: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            theme: "#38bdf8".to_owned(),
            show_help_on_start: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    pub muted: bool,
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            muted: false,
            volume: 1.0,
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| LifeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate config text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the board cannot run with. The initial interval is
    /// clamped later rather than rejected.
    pub fn validate(&self) -> Result<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> LifeError {
            LifeError::InvalidConfig { field, reason: reason.into() }
        }

        if self.board.rows == 0 || self.board.cols == 0 {
            return Err(invalid("board", "rows and cols must be non-zero"));
        }
        let p = self.board.alive_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(invalid("board.alive_probability", format!("{p} is not in [0, 1]")));
        }
        if self.timing.min_interval_ms == 0 {
            return Err(invalid("timing.min_interval_ms", "must be at least 1"));
        }
        if self.timing.min_interval_ms > self.timing.max_interval_ms {
            return Err(invalid(
                "timing",
                format!(
                    "min_interval_ms {} exceeds max_interval_ms {}",
                    self.timing.min_interval_ms, self.timing.max_interval_ms
                ),
            ));
        }
        if !(self.display.cell_size.is_finite() && self.display.cell_size > 0.0) {
            return Err(invalid("display.cell_size", "must be positive"));
        }
        let volume = self.audio.volume;
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(invalid("audio.volume", format!("{volume} is not in [0, 1]")));
        }
        self.theme_color()?;
        Ok(())
    }

    pub fn theme_color(&self) -> Result<ThemeColor> {
        self.display.theme.parse()
    }
}
