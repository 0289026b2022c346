use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Raised when food placement is requested on a board with no empty cell.
///
/// The snake covering every cell is the degenerate win condition; callers
/// translate this error into a victory rather than aborting.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("no free cell left on the {width}x{height} board")]
pub struct NoFreeCellError {
    pub width: u16,
    pub height: u16,
}

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell not occupied by the snake, chosen uniformly
    /// among the free cells.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, NoFreeCellError> {
        spawn_position(rng, bounds, snake).map(Self::at)
    }
}

/// Picks a uniformly random position not currently occupied by the snake.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, NoFreeCellError> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(NoFreeCellError {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
