use rand::Rng;

use crate::config::{GridSize, FOOD_REWARD};
use crate::food::{initial_food, spawn_position};
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Why a run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver(DeathReason),
    /// The snake covers the whole grid, leaving nowhere to place food.
    Victory,
}

/// What a single [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// Head advanced, tail followed.
    Moved,
    /// Head landed on food; the snake grew and new food was placed.
    Ate,
    /// Head would leave the grid or hit the body; state is now terminal.
    Collided(DeathReason),
    /// The snake ate the last food and fills the grid.
    Filled,
    /// State was already terminal; nothing changed.
    Frozen,
}

/// Complete game state for one run.
///
/// Plain data: randomness for food placement is passed into [`step`](Self::step).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub active_direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    bounds: GridSize,
}

impl GameState {
    /// Creates the canonical starting state for `bounds`.
    #[must_use]
    pub fn initial(bounds: GridSize) -> Self {
        let start = Cell::new(i32::from(bounds.width / 2), i32::from(bounds.height / 2));

        Self {
            snake: Snake::new(start),
            food: initial_food(bounds, start),
            active_direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            status: GameStatus::Running,
            bounds,
        }
    }

    /// Builds a running state from explicit parts, for scenarios and tests.
    #[must_use]
    pub fn with_layout(bounds: GridSize, snake: Snake, food: Cell, direction: Direction) -> Self {
        Self {
            snake,
            food,
            active_direction: direction,
            pending_direction: direction,
            score: 0,
            status: GameStatus::Running,
            bounds,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// True once the run has ended by collision or by filling the grid.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Running
    }

    /// Advances simulation by one tick.
    ///
    /// Self-collision is checked against the body before it moves, so the
    /// tail cell about to be vacated still blocks the head.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        if self.is_terminal() {
            return StepOutcome::Frozen;
        }

        self.active_direction = self.pending_direction;
        let new_head = self.snake.head().offset(self.active_direction);

        if !new_head.is_within(self.bounds) {
            return self.end(DeathReason::WallCollision);
        }

        if self.snake.occupies(new_head) {
            return self.end(DeathReason::SelfCollision);
        }

        if new_head != self.food {
            self.snake.slide(new_head);
            return StepOutcome::Moved;
        }

        self.snake.grow(new_head);
        self.score += FOOD_REWARD;

        match spawn_position(rng, self.bounds, &self.snake) {
            Some(food) => {
                self.food = food;
                StepOutcome::Ate
            }
            None => {
                // Food stays under the head; nothing renders it once terminal.
                self.status = GameStatus::Victory;
                StepOutcome::Filled
            }
        }
    }

    fn end(&mut self, reason: DeathReason) -> StepOutcome {
        self.status = GameStatus::GameOver(reason);
        StepOutcome::Collided(reason)
    }
}
