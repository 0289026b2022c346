//! Self-driving snake shown behind the start menu.
//!
//! A wrap-mode snake of fixed length wanders the LCD, changing direction at
//! random every so often. It is purely cosmetic: nothing checks collisions
//! and it never grows, so it may cross itself the way the old screensaver
//! did.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::{Position, Snake};

/// Segments in the wandering snake.
const ATTRACT_SNAKE_LEN: u16 = 10;

/// Chance per tick of picking a new direction.
const TURN_PROBABILITY: f64 = 0.15;

/// A decorative snake wandering a toroidal grid.
#[derive(Debug, Clone)]
pub struct AttractSnake {
    snake: Snake,
    bounds: GridSize,
    rng: StdRng,
}

impl AttractSnake {
    /// Creates a wanderer starting along the top edge, moving right.
    #[must_use]
    pub fn new(bounds: GridSize, seed: u64) -> Self {
        let len = u16::min(ATTRACT_SNAKE_LEN, bounds.width).max(1);
        let head = Position {
            x: i32::from(len) - 1,
            y: 0,
        };

        Self {
            snake: Snake::new(head, Direction::Right, len),
            bounds,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Moves the wanderer one cell, occasionally turning.
    pub fn tick(&mut self) {
        if self.rng.gen_bool(TURN_PROBABILITY) {
            let candidates = [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ];
            let pick = candidates[self.rng.gen_range(0..candidates.len())];
            // Reversals are filtered so the snake keeps flowing instead of
            // folding onto its neck.
            if direction_change_is_valid(self.snake.direction(), pick) {
                self.snake.buffer_direction(pick);
            }
        }

        let next_head = self.snake.commit_direction().wrapped(self.bounds);
        self.snake.advance(next_head, false);
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.snake.segments()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;

    use super::AttractSnake;

    #[test]
    fn wanderer_stays_inside_bounds() {
        let bounds = GridSize {
            width: 22,
            height: 12,
        };
        let mut wanderer = AttractSnake::new(bounds, 11);

        for _ in 0..500 {
            wanderer.tick();
            for segment in wanderer.segments() {
                assert!(segment.is_within_bounds(bounds));
            }
        }
    }

    #[test]
    fn wanderer_keeps_constant_length() {
        let bounds = GridSize {
            width: 22,
            height: 12,
        };
        let mut wanderer = AttractSnake::new(bounds, 12);
        let initial_len = wanderer.segments().count();

        for _ in 0..100 {
            wanderer.tick();
        }

        assert_eq!(wanderer.segments().count(), initial_len);
    }

    #[test]
    fn same_seed_gives_same_walk() {
        let bounds = GridSize {
            width: 22,
            height: 12,
        };
        let mut a = AttractSnake::new(bounds, 42);
        let mut b = AttractSnake::new(bounds, 42);

        for _ in 0..100 {
            a.tick();
            b.tick();
        }

        let path_a: Vec<_> = a.segments().copied().collect();
        let path_b: Vec<_> = b.segments().copied().collect();
        assert_eq!(path_a, path_b);
    }
}
