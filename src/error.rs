use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the crate: configuration and grid text.
/// Simulation operations themselves never fail.
#[derive(Error, Debug)]
pub enum LifeError {
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("grid text is empty")]
    EmptyGrid,

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    InvalidCellChar { ch: char, row: usize, col: usize },

    #[error("invalid theme color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
