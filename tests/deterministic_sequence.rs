use phone_snake::config::{GridSize, WallMode};
use phone_snake::food::Food;
use phone_snake::game::{DeathReason, GameState, GameStatus};
use phone_snake::input::{Direction, GameInput};
use phone_snake::snake::{Position, Snake};

fn bounds(width: u16, height: u16) -> GridSize {
    GridSize { width, height }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(bounds(6, 4), WallMode::Walled, 42);
    state.snake = Snake::from_segments(
        vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
        Direction::Right,
    );
    state.food = Food::at(Position { x: 2, y: 1 });

    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
}

#[test]
fn wrap_mode_carries_the_head_across_the_edge() {
    let mut state = GameState::new_with_seed(bounds(10, 10), WallMode::Wrap, 7);
    state.snake = Snake::from_segments(
        vec![Position { x: 9, y: 5 }, Position { x: 8, y: 5 }],
        Direction::Right,
    );
    state.food = Food::at(Position { x: 3, y: 3 });

    state.tick();

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { x: 0, y: 5 });
}

#[test]
fn walled_mode_ends_the_round_on_the_same_move() {
    let mut state = GameState::new_with_seed(bounds(10, 10), WallMode::Walled, 7);
    state.snake = Snake::from_segments(
        vec![Position { x: 9, y: 5 }, Position { x: 8, y: 5 }],
        Direction::Right,
    );
    state.food = Food::at(Position { x: 3, y: 3 });

    state.tick();

    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.snake.head(), Position { x: 9, y: 5 });
}

#[test]
fn identical_seeds_and_inputs_replay_identically() {
    let inputs = [
        GameInput::Direction(Direction::Down),
        GameInput::Direction(Direction::Left),
        GameInput::Direction(Direction::Up),
        GameInput::Direction(Direction::Right),
    ];

    let mut a = GameState::new_with_seed(bounds(12, 12), WallMode::Wrap, 99);
    let mut b = GameState::new_with_seed(bounds(12, 12), WallMode::Wrap, 99);

    for round in 0..40 {
        let input = inputs[round % inputs.len()];
        a.apply_input(input);
        b.apply_input(input);
        a.tick();
        b.tick();

        assert_eq!(a.status, b.status);
        assert_eq!(a.score, b.score);
        assert_eq!(a.snake.head(), b.snake.head());
        assert_eq!(a.food.position, b.food.position);
    }
}

#[test]
fn long_wrap_session_preserves_invariants() {
    let mut state = GameState::new_with_seed(bounds(9, 7), WallMode::Wrap, 5);
    let steer = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    for round in 0..500 {
        // Steer in a rotating pattern so the snake covers the board.
        if round % 3 == 0 {
            state.apply_input(GameInput::Direction(steer[(round / 3) % steer.len()]));
        }
        let score_before = state.score;
        let len_before = state.snake.len();

        state.tick();

        match state.status {
            GameStatus::Playing => {
                assert!(!state.snake.has_overlap());
                assert!(!state.snake.occupies(state.food.position));
                // Eating grows score and length together, by exactly one.
                let ate = state.score != score_before;
                assert_eq!(state.score, score_before + u32::from(ate));
                assert_eq!(state.snake.len(), len_before + usize::from(ate));
            }
            GameStatus::GameOver => {
                assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
                break;
            }
            GameStatus::Victory => break,
            GameStatus::Paused => unreachable!("nothing pauses this session"),
        }
    }
}
