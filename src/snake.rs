use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighboring position one cell in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Mutable snake state and direction buffering behavior.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
}

impl Snake {
    /// Creates a snake of `len` segments with the head at `head`, extending
    /// opposite to `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, len: u16) -> Self {
        debug_assert!(len > 0);

        let (dx, dy) = direction.delta();
        let body = (0..i32::from(len))
            .map(|i| Position {
                x: head.x - dx * i,
                y: head.y - dy * i,
            })
            .collect();

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
        }
    }

    /// Buffers a direction change for the next movement tick.
    ///
    /// At most one change is held per tick (last input wins). A request to
    /// reverse straight into the body is silently ignored; this is the rule
    /// that makes the head never able to collide with its own neck.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Commits the buffered direction, if any, and returns the cell the head
    /// will enter. Does not move the snake.
    pub fn commit_direction(&mut self) -> Position {
        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }
        self.head().step(self.direction)
    }

    /// Advances the head to `next_head`, keeping the tail when `grow` is set.
    ///
    /// Callers decide collision and wrapping; the snake itself only records
    /// the movement.
    pub fn advance(&mut self, next_head: Position, grow: bool) {
        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if any two segments share a cell.
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.body.len());
        self.body.iter().any(|segment| !seen.insert(*segment))
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(bounds);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(bounds);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
    }

    #[test]
    fn new_snake_extends_behind_the_head() {
        let snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 3, y: 5 },
            ]
        );
    }

    #[test]
    fn advance_moves_one_cell_and_keeps_length() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        let next = snake.commit_direction();
        snake.advance(next, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn advance_with_grow_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 1);

        let next = snake.commit_direction();
        snake.advance(next, true);

        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn direction_buffer_rejects_reverse() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        snake.buffer_direction(Direction::Left);
        let next = snake.commit_direction();

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(next, Position { x: 6, y: 5 });
    }

    #[test]
    fn direction_buffer_last_input_wins() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Down);
        let next = snake.commit_direction();

        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(next, Position { x: 5, y: 6 });
    }

    #[test]
    fn occupies_reports_every_segment() {
        let snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);

        assert!(snake.occupies(Position { x: 5, y: 5 }));
        assert!(snake.occupies(Position { x: 3, y: 5 }));
        assert!(!snake.occupies(Position { x: 6, y: 5 }));
    }

    #[test]
    fn overlap_detection() {
        let clean = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 3);
        assert!(!clean.has_overlap());

        let folded = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 4, y: 5 },
                Position { x: 5, y: 5 },
            ],
            Direction::Right,
        );
        assert!(folded.has_overlap());
    }
}
