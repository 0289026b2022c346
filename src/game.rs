use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, WallMode, INITIAL_SNAKE_LEN};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
    /// The snake covers every cell; there is nowhere left to place food.
    Victory,
}

/// What ended the round, for the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
///
/// The state is pure with respect to time and I/O: it only changes through
/// `tick` and `apply_input`, and two states built with the same seed and fed
/// the same inputs stay identical. Rendering and the tick clock live in the
/// host loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    wall_mode: WallMode,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, wall_mode: WallMode) -> Self {
        Self::new_with_seed(bounds, wall_mode, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, wall_mode: WallMode, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let len = u16::min(INITIAL_SNAKE_LEN, bounds.width / 2).max(1);
        let snake = Snake::new(start, Direction::Right, len);

        // A board the starting snake already fills counts as won.
        let (food, status) = match Food::spawn(&mut rng, bounds, &snake) {
            Ok(food) => (food, GameStatus::Playing),
            Err(_) => (Food::at(start), GameStatus::Victory),
        };

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status,
            death_reason: None,
            bounds,
            wall_mode,
            rng,
        }
    }

    /// Advances the simulation by exactly one gameplay tick.
    ///
    /// A tick that ends the round leaves the snake at its pre-step value so
    /// the terminal frame can be rendered.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;

        let mut next_head = self.snake.commit_direction();
        match self.wall_mode {
            WallMode::Wrap => next_head = next_head.wrapped(self.bounds),
            WallMode::Walled => {
                if !next_head.is_within_bounds(self.bounds) {
                    self.status = GameStatus::GameOver;
                    self.death_reason = Some(DeathReason::WallCollision);
                    return;
                }
            }
        }

        if self.snake.occupies(next_head) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
            return;
        }

        let ate = next_head == self.food.position;
        self.snake.advance(next_head, ate);

        if ate {
            self.score += 1;
            match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
                Ok(food) => self.food = food,
                Err(_) => self.status = GameStatus::Victory,
            }
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Playing {
                    self.snake.buffer_direction(direction);
                }
            }
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                    other => other,
                };
            }
            // Quit and restart are host-loop concerns.
            GameInput::Quit | GameInput::Restart => {}
        }
    }

    /// Returns true while the round can still be resumed or advanced.
    #[must_use]
    pub fn is_round_active(&self) -> bool {
        matches!(self.status, GameStatus::Playing | GameStatus::Paused)
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the boundary policy for this session.
    #[must_use]
    pub fn wall_mode(&self) -> WallMode {
        self.wall_mode
    }
}
