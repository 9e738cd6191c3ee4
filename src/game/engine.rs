use rand::rngs::StdRng;
use rand::SeedableRng;

use super::collision;
use super::config::{GameConfig, GameMode};
use super::direction::Direction;
use super::events::{GameEvent, GameOverReason, GameSnapshot};
use super::food;
use super::grid::{Grid, Position};
use super::snake::Snake;

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Constructed but no game started yet
    Idle,
    Running,
    Paused,
    /// Terminal until the next reset
    Over,
}

/// The game state machine.
///
/// Owns the snake, food, score, speed and status, and advances them one
/// discrete step per [`tick`](GameEngine::tick). The engine holds no timer
/// and does no I/O; the embedding loop drives it and reacts to the events
/// each tick returns.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    mode: GameMode,
    snake: Snake,
    food: Option<Position>,
    /// Direction committed at the last tick
    heading: Option<Direction>,
    /// Direction buffered by input, committed on the next tick
    pending: Option<Direction>,
    score: u32,
    interval_ms: u64,
    status: GameStatus,
    rng: StdRng,
}

impl GameEngine {
    /// Create an idle engine; call [`reset`](GameEngine::reset) to start a game
    pub fn new(config: GameConfig, mode: GameMode) -> Self {
        Self::with_rng(config, mode, StdRng::from_entropy())
    }

    /// Deterministic engine for tests and reproducible simulations
    pub fn with_seed(config: GameConfig, mode: GameMode, seed: u64) -> Self {
        Self::with_rng(config, mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mode: GameMode, rng: StdRng) -> Self {
        let grid = config.grid();
        Self {
            snake: Snake::new(grid.center()),
            food: None,
            heading: None,
            pending: None,
            score: 0,
            interval_ms: mode.base_interval_ms(),
            status: GameStatus::Idle,
            grid,
            config,
            mode,
            rng,
        }
    }

    /// Start a fresh game in the given mode. Valid from any state.
    pub fn reset(&mut self, mode: GameMode) {
        self.mode = mode;
        self.snake = Snake::new(self.grid.center());
        self.heading = None;
        self.pending = None;
        self.score = 0;
        self.interval_ms = mode.base_interval_ms();
        self.food = food::spawn(&mut self.rng, self.grid, self.snake.segments());
        self.status = GameStatus::Running;
    }

    /// Buffer a steering intent; it takes effect on the next tick.
    ///
    /// Ignored outside Running/Paused. The reversal guard compares against
    /// the committed heading, not the buffered one, so rapid multi-key input
    /// between ticks cannot fold the snake back onto itself.
    pub fn set_direction(&mut self, direction: Direction) {
        if !matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            return;
        }

        if let Some(current) = self.heading {
            if direction.is_opposite(current) {
                return;
            }
        }

        self.pending = Some(direction);
    }

    /// Advance the simulation one step.
    ///
    /// Returns the events of this tick, empty when nothing happened (not
    /// running, or not steered yet since the last reset).
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.status != GameStatus::Running {
            return events;
        }

        if let Some(direction) = self.pending.take() {
            self.heading = Some(direction);
        }
        let Some(direction) = self.heading else {
            return events;
        };

        let proposed = self.snake.head().step(direction);
        let grow = self.food == Some(proposed);

        if let Some(hit) =
            collision::check(proposed, self.grid, self.snake.body_for_collision(grow))
        {
            self.status = GameStatus::Over;
            events.push(GameEvent::GameOver {
                score: self.score,
                reason: hit.into(),
            });
            return events;
        }

        self.snake.advance(direction, grow);

        if grow {
            self.score += self.config.food_points;
            events.push(GameEvent::FoodEaten { position: proposed });

            match food::spawn(&mut self.rng, self.grid, self.snake.segments()) {
                Some(pos) => self.food = Some(pos),
                None => {
                    // The snake covers the board; won by eating everything.
                    self.food = None;
                    self.status = GameStatus::Over;
                    events.push(GameEvent::GameOver {
                        score: self.score,
                        reason: GameOverReason::BoardFilled,
                    });
                    return events;
                }
            }

            if self.score % self.config.points_per_speedup == 0
                && self.interval_ms > self.config.min_interval_ms
            {
                self.interval_ms -= self.config.speedup_step_ms;
                events.push(GameEvent::SpeedChanged {
                    interval_ms: self.interval_ms,
                });
            }
        }

        events.push(GameEvent::Moved(self.snapshot()));
        events
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.status = GameStatus::Paused,
            GameStatus::Paused => self.status = GameStatus::Running,
            GameStatus::Idle | GameStatus::Over => {}
        }
    }

    /// Immutable view of the current state for the presentation layer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            snake: self.snake.segments().to_vec(),
            food: self.food,
            score: self.score,
            status: self.status,
            interval_ms: self.interval_ms,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current tick interval in milliseconds
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}
