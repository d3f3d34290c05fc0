use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::apple::{Apple, random_point};
use crate::config::BoardMetric;
use crate::geometry::{Direction, Point};
use crate::input::GameInput;
use crate::snake::Snake;

/// Whether ticks currently move the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Paused,
}

/// Complete world for one session.
///
/// The RNG lives here so that apple relocation during a tick is reproducible
/// for a seeded game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub status: GameStatus,
    pub tick_count: u64,
    board: BoardMetric,
    rng: StdRng,
}

impl GameState {
    /// Creates a game with a one-segment snake and an apple at random cells.
    #[must_use]
    pub fn create_random(board: BoardMetric) -> Self {
        Self::from_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(board: BoardMetric, seed: u64) -> Self {
        Self::from_rng(board, StdRng::seed_from_u64(seed))
    }

    fn from_rng(board: BoardMetric, mut rng: StdRng) -> Self {
        let heading = Direction::random(&mut rng);
        let start = random_point(&mut rng, board);
        let snake = Snake::new(start, heading);
        let apple = Apple::spawn(&mut rng, board);

        info!(
            width = board.width(),
            height = board.height(),
            ?heading,
            head = ?start,
            apple = ?apple.position,
            "created game"
        );

        Self {
            snake,
            apple,
            status: GameStatus::Playing,
            tick_count: 0,
            board,
            rng,
        }
    }

    /// Grows the snake `segments` times without moving it.
    pub fn extend_snake(&mut self, segments: usize) {
        for _ in 0..segments {
            self.snake = self.snake.grow(self.board);
        }
    }

    /// Returns the successor state after one tick.
    #[must_use]
    pub fn advance(mut self) -> Self {
        self.tick();
        self
    }

    /// Advances the simulation by one tick in place.
    ///
    /// The apple is checked against the head position reached on the previous
    /// tick; a hit grows the snake and relocates the apple before everything
    /// moves.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.consume_apple();
        self.snake = self.snake.slither(self.board);
        self.tick_count += 1;
    }

    fn consume_apple(&mut self) {
        let head = self.snake.head_location();
        if head != self.apple.position {
            return;
        }

        self.snake = self.snake.grow(self.board);
        self.apple = Apple::spawn(&mut self.rng, self.board);

        debug!(
            tick = self.tick_count,
            eaten_at = ?head,
            length = self.snake.len(),
            apple = ?self.apple.position,
            "apple consumed"
        );
    }

    /// Sets the snake's intended heading. `Invalid` is ignored.
    pub fn turn(&mut self, direction: Direction) {
        self.snake = self.snake.turn(direction);
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Turn(direction) => self.turn(direction),
            GameInput::Pause => {
                self.status = match self.status {
                    GameStatus::Playing => GameStatus::Paused,
                    GameStatus::Paused => GameStatus::Playing,
                };
            }
            GameInput::Quit => {}
        }
    }

    pub fn board(&self) -> BoardMetric {
        self.board
    }

    pub fn apple_position(&self) -> Point {
        self.apple.position
    }
}

#[cfg(test)]
mod tests {
    use crate::apple::{Apple, random_point};
    use crate::config::BoardMetric;
    use crate::geometry::{Direction, Point};
    use crate::input::GameInput;
    use crate::snake::{Snake, SnakePart};

    use super::{GameState, GameStatus};

    fn board(width: u16, height: u16) -> BoardMetric {
        BoardMetric::new(width, height).expect("test board should be valid")
    }

    #[test]
    fn random_game_starts_with_one_segment_on_the_board() {
        let bounds = board(20, 20);
        let state = GameState::create_random(bounds);

        assert_eq!(state.snake.len(), 1);
        assert!(state.snake.direction().is_valid());
        assert_eq!(state.snake.head().direction, state.snake.direction());
        assert!(state.snake.head_location().is_within(bounds));
        assert!(state.apple_position().is_within(bounds));
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let first = GameState::new_with_seed(board(30, 30), 99);
        let second = GameState::new_with_seed(board(30, 30), 99);

        assert_eq!(first.snake, second.snake);
        assert_eq!(first.apple, second.apple);
    }

    #[test]
    fn snake_grows_only_when_head_starts_tick_on_apple() {
        let mut state = GameState::new_with_seed(board(10, 10), 1);
        state.snake = Snake::new(Point::new(1, 1), Direction::East);
        state.apple = Apple::new(Point::new(2, 1));

        state.tick();
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head_location(), Point::new(2, 1));

        state.tick();
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn consumption_grows_then_moves_the_longer_snake() {
        let mut state = GameState::new_with_seed(board(10, 10), 2);
        state.snake = Snake::new(Point::new(4, 4), Direction::East).turn(Direction::South);
        state.apple = Apple::new(Point::new(4, 4));

        state.tick();

        // Growth follows the head's east heading, then the new head turns south.
        assert_eq!(
            state.snake.body(),
            &[
                SnakePart::new(Direction::South, Point::new(5, 5)),
                SnakePart::new(Direction::East, Point::new(5, 4)),
            ]
        );
    }

    #[test]
    fn exactly_one_growth_per_consumption() {
        let mut state = GameState::new_with_seed(board(50, 50), 3);
        state.snake = Snake::new(Point::new(0, 0), Direction::South);
        state.apple = Apple::new(Point::new(0, 0));

        let mut replay = state.rng.clone();
        let relocated = random_point(&mut replay, state.board());

        state.tick();
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.apple_position(), relocated);

        // With the apple elsewhere neither the length nor the apple changes.
        state.apple = Apple::new(Point::new(40, 40));
        state.tick();
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.apple_position(), Point::new(40, 40));
    }

    #[test]
    fn each_consumption_draws_the_next_apple_from_the_game_rng() {
        let mut state = GameState::new_with_seed(board(12, 9), 21);
        let mut replay = state.rng.clone();
        state.snake = Snake::new(Point::new(3, 3), Direction::East);

        for _ in 0..5 {
            // Park the apple on the head so the next tick eats it.
            state.apple = Apple::new(state.snake.head_location());
            let expected = random_point(&mut replay, state.board());

            state.tick();

            assert_eq!(state.apple_position(), expected);
        }
        assert_eq!(state.snake.len(), 6);
    }

    #[test]
    fn advance_returns_successor_with_same_board() {
        let bounds = board(5, 5);
        let state = GameState::new_with_seed(bounds, 4);
        let head = state.snake.head_location();
        let heading = state.snake.direction();

        let next = state.advance();

        assert_eq!(next.board(), bounds);
        assert_eq!(next.tick_count, 1);
        assert_ne!(next.snake.head_location(), head, "snake heading {heading:?} did not move");
    }

    #[test]
    fn length_never_shrinks_over_many_ticks() {
        let bounds = board(4, 4);
        let mut state = GameState::new_with_seed(bounds, 5);
        let mut previous = state.snake.len();

        for tick in 0..500 {
            if tick % 7 == 0 {
                state.turn(Direction::MOVING[tick % 4]);
            }
            state.tick();

            assert!(state.snake.len() >= previous);
            assert!(state.snake.body().iter().all(|part| part.location.is_within(bounds)));
            previous = state.snake.len();
        }
    }

    #[test]
    fn extend_snake_stacks_segments_ahead_of_head() {
        let mut state = GameState::new_with_seed(board(20, 20), 6);
        state.snake = Snake::new(Point::new(5, 5), Direction::West);

        state.extend_snake(3);

        let locations: Vec<Point> = state.snake.body().iter().map(|part| part.location).collect();
        assert_eq!(
            locations,
            vec![
                Point::new(2, 5),
                Point::new(3, 5),
                Point::new(4, 5),
                Point::new(5, 5)
            ]
        );
    }

    #[test]
    fn last_turn_before_tick_wins() {
        let mut state = GameState::new_with_seed(board(10, 10), 7);
        state.snake = Snake::new(Point::new(5, 5), Direction::East);
        state.apple = Apple::new(Point::new(0, 0));

        state.apply_input(GameInput::Turn(Direction::North));
        state.apply_input(GameInput::Turn(Direction::South));
        state.apply_input(GameInput::Turn(Direction::Invalid));
        state.tick();

        assert_eq!(state.snake.head_location(), Point::new(5, 6));
    }

    #[test]
    fn paused_game_ignores_ticks_but_accepts_turns() {
        let mut state = GameState::new_with_seed(board(10, 10), 8);
        state.snake = Snake::new(Point::new(5, 5), Direction::East);

        state.apply_input(GameInput::Pause);
        state.apply_input(GameInput::Turn(Direction::West));
        state.tick();

        assert_eq!(state.status, GameStatus::Paused);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.snake.head_location(), Point::new(5, 5));
        assert_eq!(state.snake.direction(), Direction::West);

        state.apply_input(GameInput::Pause);
        state.tick();
        assert_eq!(state.snake.head_location(), Point::new(4, 5));
    }
}
