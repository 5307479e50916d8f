use std::time::Duration;

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::apple::Apple;
use crate::config::TICK_INTERVAL;
use crate::grid::GridGeometry;
use crate::input::HeldDirections;
use crate::score::RecordStore;
use crate::snake::{Outcome, Snake};

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Final tally of an ended session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOver {
    pub reason: DeathReason,
    pub score: u32,
    /// Record as it stood before this session ended.
    pub previous_record: u32,
    pub new_record: bool,
}

impl GameOver {
    /// The best score including this session.
    #[must_use]
    pub fn record(self) -> u32 {
        self.score.max(self.previous_record)
    }
}

/// Current high-level session state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    Playing,
    Over(GameOver),
}

/// One play session: the snake, the apple, timing and scoring.
#[derive(Debug)]
pub struct GameSession<S, R = StdRng> {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    accumulated: Duration,
    last_outcome: Option<Outcome>,
    status: SessionStatus,
    geometry: GridGeometry,
    records: S,
    rng: R,
}

impl<S: RecordStore> GameSession<S, StdRng> {
    /// Creates a session with an entropy-seeded random source.
    #[must_use]
    pub fn new(geometry: GridGeometry, records: S) -> Self {
        Self::with_rng(geometry, records, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(geometry: GridGeometry, records: S, seed: u64) -> Self {
        Self::with_rng(geometry, records, StdRng::seed_from_u64(seed))
    }
}

impl<S: RecordStore, R: Rng> GameSession<S, R> {
    /// Creates a session drawing apple positions from `rng`.
    #[must_use]
    pub fn with_rng(geometry: GridGeometry, records: S, mut rng: R) -> Self {
        let snake = Snake::new();
        let apple = Apple::spawn(&mut rng, geometry);
        info!(
            "new session on {}x{} grid, apple at {:?}",
            geometry.cols(),
            geometry.rows(),
            apple.position()
        );

        Self {
            snake,
            apple,
            score: 0,
            accumulated: Duration::ZERO,
            last_outcome: None,
            status: SessionStatus::Playing,
            geometry,
            records,
            rng,
        }
    }

    /// Feeds one frame into the session.
    ///
    /// Adds `elapsed` to the tick accumulator and moves the snake at most once
    /// when the accumulator exceeds [`TICK_INTERVAL`]. Held directions are
    /// offered to the snake afterwards, so they take effect on the next move.
    /// Once the session is over every call returns the same status.
    pub fn tick(&mut self, elapsed: Duration, held: HeldDirections) -> SessionStatus {
        if self.is_over() {
            return self.status;
        }

        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated > TICK_INTERVAL {
            self.accumulated = Duration::ZERO;
            if let Some(game_over) = self.advance() {
                self.status = SessionStatus::Over(game_over);
                return self.status;
            }
        }

        for direction in held.iter() {
            self.snake.set_direction(direction);
        }

        self.status
    }

    fn advance(&mut self) -> Option<GameOver> {
        let outcome = self.snake.update(self.apple.position(), self.geometry);
        self.last_outcome = outcome;

        match outcome? {
            Outcome::AppleEaten => {
                self.score += 1;
                self.apple.relocate(&mut self.rng, self.geometry);
                debug!(
                    "apple eaten, score {}, apple moved to {:?}",
                    self.score,
                    self.apple.position()
                );
                None
            }
            Outcome::HitWall => Some(self.finish(DeathReason::WallCollision)),
            Outcome::HitSelf => Some(self.finish(DeathReason::SelfCollision)),
        }
    }

    fn finish(&mut self, reason: DeathReason) -> GameOver {
        let previous_record = match self.records.load() {
            Ok(record) => record,
            Err(e) => {
                warn!("treating record as 0: {e}");
                0
            }
        };

        let new_record = self.score > previous_record;
        if new_record {
            match self.records.save(self.score) {
                Ok(()) => info!("new record {} (was {previous_record})", self.score),
                Err(e) => error!("failed to save record {}: {e}", self.score),
            }
        }

        info!("session over: {reason:?} with score {}", self.score);
        GameOver {
            reason,
            score: self.score,
            previous_record,
            new_record,
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, SessionStatus::Over(_))
    }

    /// Outcome of the most recent snake move.
    #[must_use]
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    #[must_use]
    pub fn records(&self) -> &S {
        &self.records
    }
}
