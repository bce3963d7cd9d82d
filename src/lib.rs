pub mod config;
pub mod controller;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use controller::{GameController, Snapshot, StateEvent, StateObserver, TickDriver};
pub use error::{Result, SnakeError};
pub use game::{DeathReason, GameState, GameStatus, StepOutcome};
pub use input::Direction;
pub use snake::{Cell, Snake};
