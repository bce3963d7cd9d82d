use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snake_arcade::config::{GameConfig, LogLevel};
use snake_arcade::controller::GameController;
use snake_arcade::input::{poll_input, GameInput};
use snake_arcade::logging::{self, LogObserver};
use snake_arcade::renderer;
use snake_arcade::terminal_runtime::TerminalSession;
use snake_arcade::Result;

/// Upper bound on how long one loop iteration waits for input.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Classic snake on a fixed grid")]
struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum)]
    log_level: Option<LogLevel>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("snake-arcade: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, config.log_level.into())?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!(
        "starting {}x{} game, tick {} ms, seed {seed}",
        config.grid_width,
        config.grid_height,
        config.tick_interval_ms
    );

    let mut controller = GameController::new(
        config.grid_size(),
        Duration::from_millis(config.tick_interval_ms),
        StdRng::seed_from_u64(seed),
    );
    controller.subscribe(LogObserver::default());

    let mut session = TerminalSession::enter()?;
    play(&mut session, &mut controller)?;

    log::info!("quit with score {}", controller.snapshot().score);
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(cli.config.as_deref())?;

    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    config.validate()?;
    Ok(config)
}

fn play(session: &mut TerminalSession, controller: &mut GameController) -> Result<()> {
    let terminal = session.terminal_mut();
    let mut drawn_revision = None;

    controller.start(Instant::now());

    loop {
        if drawn_revision != Some(controller.revision()) {
            terminal.draw(|frame| renderer::render(frame, &controller.snapshot()))?;
            drawn_revision = Some(controller.revision());
        }

        match poll_input(INPUT_POLL_INTERVAL)? {
            Some(GameInput::Quit) => return Ok(()),
            Some(GameInput::Reset) => controller.reset(Instant::now()),
            Some(GameInput::Redraw) => drawn_revision = None,
            Some(GameInput::Direction(direction)) => {
                controller.request_direction(direction);
            }
            None => {}
        }

        controller.poll_tick(Instant::now());
    }
}
