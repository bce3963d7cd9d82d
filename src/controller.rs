use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::game::{GameState, GameStatus, StepOutcome};
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Fixed-period tick scheduler.
///
/// Holds no thread or timer of its own: the loop asks [`due`](Self::due)
/// and the driver answers from the last fire time. A disarmed driver never
/// reports a tick due, so nothing fires between a stop and the next `arm`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickDriver {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickDriver {
    /// Creates a disarmed driver.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Starts the cadence: the first tick is due one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true at most once per elapsed interval.
    ///
    /// Missed periods are not replayed; a late loop gets one tick and the
    /// next deadline is rescheduled from `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(deadline) if now >= deadline => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

/// Read-only view handed to renderers and observers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub food: Cell,
    pub score: u32,
    pub terminal: bool,
    pub status: GameStatus,
    pub direction: Direction,
    pub bounds: GridSize,
}

/// Mutation reported to observers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StateEvent {
    Stepped(StepOutcome),
    DirectionQueued(Direction),
    Reset,
}

/// Hook notified after every state change.
pub trait StateObserver {
    fn notify(&mut self, event: StateEvent, snapshot: &Snapshot<'_>);
}

/// Owns the game state and is its only writer.
///
/// Direction requests, ticks and resets all take `&mut self`, so they are
/// sequenced on the caller's single timeline and a tick always commits a
/// whole request.
pub struct GameController<R = StdRng> {
    state: GameState,
    rng: R,
    driver: TickDriver,
    revision: u64,
    observers: Vec<Box<dyn StateObserver>>,
}

impl GameController<StdRng> {
    /// Creates a controller whose food placement is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(bounds: GridSize, tick_interval: Duration, seed: u64) -> Self {
        Self::new(bounds, tick_interval, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameController<R> {
    /// Creates a controller in the canonical initial state, driver disarmed.
    #[must_use]
    pub fn new(bounds: GridSize, tick_interval: Duration, rng: R) -> Self {
        Self::from_state(GameState::initial(bounds), tick_interval, rng)
    }

    /// Wraps an existing state; used to replay specific layouts.
    #[must_use]
    pub fn from_state(state: GameState, tick_interval: Duration, rng: R) -> Self {
        Self {
            state,
            rng,
            driver: TickDriver::new(tick_interval),
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Registers a hook called after every change.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Queues `direction` for the next tick.
    ///
    /// Ignored when it reverses the active direction or the run has ended.
    /// An accepted request replaces any earlier one not yet committed.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state.is_terminal() || direction == self.state.active_direction.opposite() {
            log::trace!(
                "ignored direction {direction:?} (active {:?})",
                self.state.active_direction
            );
            return false;
        }

        if self.state.pending_direction != direction {
            self.state.pending_direction = direction;
            self.changed(StateEvent::DirectionQueued(direction));
        }
        true
    }

    /// Advances the game by one step; a no-op once terminal.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.state.step(&mut self.rng);

        match outcome {
            StepOutcome::Frozen => return outcome,
            StepOutcome::Moved => {}
            StepOutcome::Ate => log::debug!(
                "ate food at {:?}, score {}, length {}",
                self.state.snake.head(),
                self.state.score,
                self.state.snake.len()
            ),
            StepOutcome::Collided(reason) => {
                log::info!("game over: {reason:?}, final score {}", self.state.score);
                self.driver.disarm();
            }
            StepOutcome::Filled => {
                log::info!("grid filled, final score {}", self.state.score);
                self.driver.disarm();
            }
        }

        self.changed(StateEvent::Stepped(outcome));
        outcome
    }

    /// Fires a tick when the driver says one is due. Returns whether it did.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if !self.driver.due(now) {
            return false;
        }

        self.tick();
        true
    }

    /// Starts the tick cadence if it is not already running.
    pub fn start(&mut self, now: Instant) {
        if !self.driver.is_armed() && !self.state.is_terminal() {
            self.driver.arm(now);
        }
    }

    /// Stops the tick cadence; no tick fires until `start` or `reset`.
    pub fn stop(&mut self) {
        self.driver.disarm();
    }

    /// Replaces the state with the canonical initial one and re-arms the
    /// driver from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.state = GameState::initial(self.state.bounds());
        self.driver.disarm();
        self.driver.arm(now);
        log::info!("game reset");
        self.changed(StateEvent::Reset);
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        snapshot_of(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }

    /// Counter bumped on every change; lets a renderer skip idle frames.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn changed(&mut self, event: StateEvent) {
        self.revision += 1;
        let snapshot = snapshot_of(&self.state);
        for observer in &mut self.observers {
            observer.notify(event, &snapshot);
        }
    }
}

fn snapshot_of(state: &GameState) -> Snapshot<'_> {
    Snapshot {
        snake: &state.snake,
        food: state.food,
        score: state.score,
        terminal: state.is_terminal(),
        status: state.status,
        direction: state.active_direction,
        bounds: state.bounds(),
    }
}
