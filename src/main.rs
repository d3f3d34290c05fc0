use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use torus_snake::config::{BoardMetric, FRAME_INTERVAL_MS};
use torus_snake::error::SettingsError;
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputHandler};
use torus_snake::renderer::{ConsoleSink, FrameInfo, RenderSink, TuiSink};
use torus_snake::settings::Settings;
use torus_snake::shared::{SharedGame, TickDriver};
use torus_snake::terminal_runtime::{RawModeGuard, install_panic_hook};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Fixed RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Segments grown onto the snake before the first tick.
    #[arg(long = "initial-growth")]
    initial_growth: Option<usize>,

    /// Settings file to read instead of the one in the config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Clear-and-print output instead of the full-screen view.
    #[arg(long)]
    plain: bool,
}

impl Cli {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.board_width = width;
        }
        if let Some(height) = self.height {
            settings.board_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_interval_ms = tick_ms;
        }
        if let Some(initial_growth) = self.initial_growth {
            settings.initial_growth = initial_growth;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let (settings, board) = match load_settings(&cli) {
        Ok(loaded) => loaded,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();

    match run(&cli, &settings, board) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

/// Reads the settings file, applies flag overrides and validates the result.
fn load_settings(cli: &Cli) -> Result<(Settings, BoardMetric), SettingsError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_path(path)?,
        None => Settings::load()?,
    };
    cli.apply_overrides(&mut settings);
    let board = settings.validate()?;
    Ok((settings, board))
}

fn run(cli: &Cli, settings: &Settings, board: BoardMetric) -> io::Result<()> {
    let mut state = match settings.seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::create_random(board),
    };
    state.extend_snake(settings.initial_growth);

    let game = SharedGame::new(state);
    info!(
        width = board.width(),
        height = board.height(),
        tick_ms = settings.tick_interval_ms,
        plain = cli.plain,
        "starting session"
    );

    if cli.plain {
        let _raw = RawModeGuard::enter()?;
        let mut sink = ConsoleSink::new(io::stdout());
        drive(&game, settings.tick_interval(), &mut sink)
    } else {
        let mut sink = TuiSink::enter()?;
        drive(&game, settings.tick_interval(), &mut sink)
    }
}

/// Ticks in the background while this thread handles input and redraws.
fn drive(game: &SharedGame, tick_interval: Duration, sink: &mut impl RenderSink) -> io::Result<()> {
    let mut driver = TickDriver::spawn(game.clone(), tick_interval);
    let mut input = InputHandler::new();
    let mut last_frame = None;

    loop {
        let frame = game.with_state(FrameInfo::capture);
        if last_frame.as_ref() != Some(&frame) {
            sink.present(&frame)?;
            last_frame = Some(frame);
        }

        match input.poll_input(Duration::from_millis(FRAME_INTERVAL_MS))? {
            Some(GameInput::Quit) => break,
            Some(other) => game.apply_input(other),
            None => {}
        }
    }

    driver.stop();
    info!(ticks = game.with_state(|state| state.tick_count), "session ended");
    Ok(())
}
