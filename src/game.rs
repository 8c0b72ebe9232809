use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_SNAKE_LENGTH};
use crate::food::Food;
use crate::input::GameInput;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
///
/// There are only two lifecycle states; a collision moves the game to
/// `GameOver` and a restart tap replaces the whole state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the game. Both causes share the same terminal transition and
/// only differ in the game-over flavor text.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh running state with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::new_with_seed(bounds, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(start, crate::input::Direction::Right, INITIAL_SNAKE_LENGTH);
        let food = Food::spawn(&mut rng, bounds, &snake)
            .expect("a fresh board always has free cells");

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            death_reason: None,
            bounds,
            rng,
        }
    }

    /// Returns the grid bounds.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the simulation by one tick.
    ///
    /// Order matters: the pending direction is applied first, then the next
    /// head cell is checked against the walls and the full snake body before
    /// anything moves. A terminal tick therefore leaves the snake exactly as
    /// it was when it died.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        self.snake.apply_pending();

        let next_head = self.snake.next_head();
        if !next_head.is_within_bounds(self.bounds) {
            self.set_game_over(DeathReason::WallCollision);
            return;
        }
        if self.snake.occupies(next_head) {
            self.set_game_over(DeathReason::SelfCollision);
            return;
        }

        let ate = next_head == self.food.position;
        self.snake.advance(next_head, ate);

        if ate {
            self.score += 1;
            match Food::spawn(&mut self.rng, self.bounds, &self.snake) {
                Some(food) => self.food = food,
                // Board is full; nothing left to play for.
                None => self.set_game_over(DeathReason::SelfCollision),
            }
        }
    }

    /// Applies one external input event.
    ///
    /// Direction inputs only write the pending direction; they never move the
    /// snake. Restart and quit are decided by the outer loop.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.snake.set_pending(direction);
                }
            }
            GameInput::PointerDown | GameInput::Confirm | GameInput::Quit => {}
        }
    }

    fn set_game_over(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};

    use super::{DeathReason, GameState, GameStatus};
    use crate::snake::{Position, Snake};

    fn grid(width: u16, height: u16) -> GridSize {
        GridSize { width, height }
    }

    #[test]
    fn tick_moves_the_snake_without_changing_length() {
        let mut state = GameState::new_with_seed(grid(20, 28), 1);
        state.food = Food::at(Position { x: 5, y: 5 });

        state.tick();

        let segments: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 11, y: 14 },
                Position { x: 10, y: 14 },
                Position { x: 9, y: 14 },
            ]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn eating_food_grows_snake_and_increments_score() {
        let mut state = GameState::new_with_seed(grid(20, 28), 2);
        let head = state.snake.head();
        state.food = Food::at(Position {
            x: head.x + 1,
            y: head.y,
        });

        state.tick();

        assert_eq!(state.snake.head(), Position { x: head.x + 1, y: head.y });
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        // Replacement food spawned somewhere else.
        assert!(!state.snake.occupies(state.food.position));
        assert_ne!(state.food.position, state.snake.head());
    }

    #[test]
    fn wall_collision_is_terminal_and_leaves_state_unchanged() {
        let mut state = GameState::new_with_seed(grid(20, 28), 3);
        state.snake = Snake::new(Position { x: 0, y: 7 }, Direction::Left, 3);
        state.food = Food::at(Position { x: 5, y: 5 });

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        // The snake did not move and the score is untouched.
        assert_eq!(state.snake.head(), Position { x: 0, y: 7 });
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn self_collision_is_terminal() {
        let mut state = GameState::new_with_seed(grid(6, 6), 4);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Left,
        );
        state.food = Food::at(Position { x: 5, y: 5 });

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn moving_into_the_vacating_tail_cell_is_a_collision() {
        // Head at (2,2) turning into a tight loop whose tail cell (2,3)
        // would be vacated this very tick; the rule counts it as occupied.
        let mut state = GameState::new_with_seed(grid(8, 8), 5);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Left,
        );
        state.food = Food::at(Position { x: 6, y: 6 });
        state.apply_input(GameInput::Direction(Direction::Down));

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn reversal_input_is_ignored_at_tick_time() {
        let mut state = GameState::new_with_seed(grid(20, 28), 6);
        state.food = Food::at(Position { x: 0, y: 0 });
        let head = state.snake.head();

        state.apply_input(GameInput::Direction(Direction::Left));
        state.tick();

        // Still moving right.
        assert_eq!(state.snake.head(), Position { x: head.x + 1, y: head.y });
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn no_duplicate_cells_while_running() {
        let mut state = GameState::new_with_seed(grid(20, 28), 7);
        for _ in 0..200 {
            state.tick();
            if state.status != GameStatus::Running {
                break;
            }
            let mut seen: Vec<Position> = state.snake.segments().copied().collect();
            let len = seen.len();
            seen.sort_by_key(|p| (p.x, p.y));
            seen.dedup();
            assert_eq!(seen.len(), len);
        }
    }

    #[test]
    fn direction_input_is_ignored_once_terminal() {
        let mut state = GameState::new_with_seed(grid(20, 28), 8);
        state.snake = Snake::new(Position { x: 0, y: 7 }, Direction::Left, 3);
        state.food = Food::at(Position { x: 5, y: 5 });
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        let ticks_before = state.tick_count;
        state.apply_input(GameInput::Direction(Direction::Down));
        state.tick();

        // Terminal state is immutable except for restart.
        assert_eq!(state.tick_count, ticks_before);
        assert_eq!(state.snake.head(), Position { x: 0, y: 7 });
    }
}
