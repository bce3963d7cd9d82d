use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{Result, SnakeError};

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest accepted grid edge; below this the start and food cells collide.
pub const MIN_GRID_DIMENSION: u16 = 4;

/// Largest accepted grid edge.
pub const MAX_GRID_DIMENSION: u16 = 200;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Score granted for every food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Random food draws attempted before falling back to a row-major scan.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

const APP_DIR_NAME: &str = "snake-arcade";
const CONFIG_FILE_NAME: &str = "config.json";

/// Glyphs used by the renderer; each logical cell is two columns wide.
pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_FOOD: &str = "()";

/// Fixed color palette for the board.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub game_over: Color,
    pub victory: Color,
}

pub const PALETTE: Palette = Palette {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    border: Color::White,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    game_over: Color::Red,
    victory: Color::Yellow,
};

/// Runtime settings, read from an optional JSON file.
///
/// Missing fields fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
    pub log_level: LogLevel,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            log_level: LogLevel::Info,
        }
    }
}

impl GameConfig {
    /// Loads the config at `path`, or the platform default location.
    ///
    /// A missing default file yields the defaults; a missing explicit path is
    /// an error since the user asked for it.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => match Self::load_from_path(&config_path()) {
                Err(SnakeError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
                    Ok(Self::default())
                }
                other => other,
            },
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&raw).map_err(|source| {
            SnakeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges; called after every merge of overrides.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("grid_width", self.grid_width), ("grid_height", self.grid_height)] {
            if !(MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).contains(&value) {
                return Err(SnakeError::InvalidConfig(format!(
                    "{name} must be between {MIN_GRID_DIMENSION} and {MAX_GRID_DIMENSION}, got {value}"
                )));
            }
        }

        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(SnakeError::InvalidConfig(format!(
                "tick_interval_ms must be at least {MIN_TICK_INTERVAL_MS}, got {}",
                self.tick_interval_ms
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }
}

/// Log verbosity accepted in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Returns the per-user data directory for logs.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}
