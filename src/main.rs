use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use life_board::{
    GameConfig, GameState, audio::AudioFeedback, input, rendering,
    ui::{self, Layout},
};
use macroquad::prelude::*;
use tracing::{error, info};

const DEFAULT_CONFIG: &str = "life.toml";

/// Conway's Game of Life on a fixed board
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML config file (defaults to ./life.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with sound cues muted
    #[arg(long)]
    muted: bool,

    /// Override the board row count
    #[arg(long)]
    rows: Option<usize>,

    /// Override the board column count
    #[arg(long)]
    cols: Option<usize>,
}

fn load_config(args: &Args) -> life_board::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            GameConfig::load(path)?
        }
        None if Path::new(DEFAULT_CONFIG).exists() => {
            info!(path = DEFAULT_CONFIG, "loading config");
            GameConfig::load(DEFAULT_CONFIG)?
        }
        None => {
            info!("no config file, using defaults");
            GameConfig::default()
        }
    };

    if let Some(rows) = args.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.board.cols = cols;
    }
    config.audio.muted |= args.muted;
    config.validate()?;
    Ok(config)
}

/// Logging, argument parsing and config loading happen once, before the
/// window exists, since the window size depends on the board size.
fn startup() -> &'static life_board::Result<GameConfig> {
    static STARTUP: OnceLock<life_board::Result<GameConfig>> = OnceLock::new();
    STARTUP.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            )
            .init();
        load_config(&Args::parse())
    })
}

fn window_conf() -> Conf {
    let config = startup().as_ref().ok().cloned().unwrap_or_default();
    let layout = Layout::new(config.board.rows, config.board.cols, config.display.cell_size);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: layout.width as i32,
        window_height: layout.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match startup() {
        Ok(config) => config.clone(),
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    let feedback = AudioFeedback::load(&config.audio).await;
    let mut state = GameState::from_config(&config, feedback);
    let (rows, cols) = state.scheduler.grid().dimensions();
    let layout = Layout::new(rows, cols, config.display.cell_size);
    info!(rows, cols, interval_ms = state.scheduler.interval_ms(), "board ready");

    loop {
        let now = Duration::from_secs_f64(get_time());

        // Recreate buttons so labels track play and mute state
        let buttons = ui::create_buttons(&state, &layout);
        let slider = ui::create_speed_slider(&state, &layout);
        input::process_input(&mut state, &buttons, &slider, &layout.view, now);

        state.tick(now);

        rendering::draw_frame(&state, &layout, &buttons, &slider, mouse_position());
        next_frame().await;
    }
}
