use std::fs::{self, File};
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::data_dir;
use crate::controller::{Snapshot, StateEvent, StateObserver};
use crate::error::Result;
use crate::game::{GameStatus, StepOutcome};

const LOG_FILE_NAME: &str = "snake-arcade.log";

/// Returns the default log file location.
#[must_use]
pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

/// Routes the `log` facade into a file.
///
/// The terminal is in raw mode on the alternate screen while playing, so
/// writing to stderr would corrupt the frame.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, File::create(path)?)?;

    log::info!("logging to {}", path.display());
    Ok(())
}

/// Logs how each run ends.
#[derive(Debug, Default)]
pub struct LogObserver {
    games: u32,
}

impl StateObserver for LogObserver {
    fn notify(&mut self, event: StateEvent, snapshot: &Snapshot<'_>) {
        match event {
            StateEvent::Stepped(StepOutcome::Collided(_) | StepOutcome::Filled) => {
                self.games += 1;
                let verdict = match snapshot.status {
                    GameStatus::Victory => "won",
                    _ => "lost",
                };
                log::info!(
                    "game {} {verdict}: score {}, length {}",
                    self.games,
                    snapshot.score,
                    snapshot.snake.len()
                );
            }
            StateEvent::DirectionQueued(direction) => log::debug!("queued {direction:?}"),
            StateEvent::Stepped(_) | StateEvent::Reset => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::GridSize;
    use crate::controller::GameController;
    use crate::input::Direction;

    use super::{default_log_path, LogObserver};

    #[test]
    fn default_log_path_names_the_log_file() {
        assert!(default_log_path().ends_with("snake-arcade/snake-arcade.log"));
    }

    #[test]
    fn log_observer_handles_a_full_run() {
        let mut controller = GameController::with_seed(
            GridSize {
                width: 6,
                height: 6,
            },
            Duration::from_millis(100),
            9,
        );
        controller.subscribe(LogObserver::default());

        controller.request_direction(Direction::Up);
        for _ in 0..10 {
            controller.tick();
        }
        controller.reset(Instant::now());

        assert!(!controller.snapshot().terminal);
    }
}
