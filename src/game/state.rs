use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::grid::{Direction, Position};
use super::snake::Snake;

/// Complete simulation state for one session.
///
/// Both grid dimensions must be even; `config::Config::validate` rejects
/// anything else before a state is constructed.
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    pub wrap_around: bool,
    pub snake: Snake,
    pub food: Option<Position>,
    /// Always equals the snake length
    pub score: usize,
    pub game_over: bool,
    pub win: bool,
}

impl GameState {
    pub fn new(width: i32, height: i32, wrap_around: bool, rng: &mut impl Rng) -> Self {
        let mut state = Self {
            width,
            height,
            wrap_around,
            snake: Snake::new(Position::new(width / 2, height / 2), Direction::Right),
            food: None,
            score: 1,
            game_over: false,
            win: false,
        };
        state.reset(rng);
        state
    }

    /// Re-center the snake (length 1, heading right), respawn the food and
    /// clear the end-of-game flags
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.snake = Snake::new(
            Position::new(self.width / 2, self.height / 2),
            Direction::Right,
        );
        self.food = self.random_free_cell(rng);
        self.score = self.snake.len();
        self.game_over = false;
        self.win = false;
    }

    /// Advance the simulation by one step in `direction`. No-op once the game
    /// has ended.
    pub fn update(&mut self, direction: Direction, rng: &mut impl Rng) {
        if self.game_over {
            return;
        }

        self.snake.direction = direction;
        let mut new_head = self.snake.head().step(direction);

        if self.wrap_around {
            new_head = new_head.wrapped(self.width, self.height);
        } else if !new_head.in_bounds(self.width, self.height) {
            self.end(false);
            return;
        }

        // Resolved against the full body, tail included; takes precedence
        // over eating
        if self.snake.contains(new_head) {
            self.end(false);
            return;
        }

        if self.food == Some(new_head) {
            self.snake.grow(new_head);
            self.score = self.snake.len();
            self.food = self.random_free_cell(rng);
            debug!(score = self.score, "ate food");
        } else {
            self.snake.advance(new_head);
        }

        if self.snake.len() == (self.width * self.height) as usize {
            self.end(true);
        }
    }

    /// Flip wrap-around. Only affects bounds handling from the next step on.
    pub fn toggle_wrap_around(&mut self) {
        self.wrap_around = !self.wrap_around;
    }

    fn end(&mut self, win: bool) {
        self.game_over = true;
        self.win = win;
        info!(win, score = self.score, "game over");
    }

    /// Uniformly random cell not covered by the snake, `None` when the snake
    /// fills the grid
    fn random_free_cell(&self, rng: &mut impl Rng) -> Option<Position> {
        let free: Vec<Position> = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .filter(|cell| !self.snake.contains(*cell))
            .collect();
        free.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_reset_centers_snake() {
        let mut rng = rng();
        let state = GameState::new(4, 4, false, &mut rng);

        assert_eq!(state.snake.head(), Position::new(2, 2));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.direction, Direction::Right);
        assert!(!state.game_over);
        let food = state.food.expect("fresh game has food");
        assert_ne!(food, state.snake.head());
    }

    #[test]
    fn test_wall_collision_ends_game() {
        // 4x4, no wrap, snake at (2,2) heading right: one step lands on
        // (3,2), the next leaves the grid
        let mut rng = rng();
        let mut state = GameState::new(4, 4, false, &mut rng);
        state.food = Some(Position::new(0, 0));

        state.update(Direction::Right, &mut rng);
        assert_eq!(state.snake.head(), Position::new(3, 2));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 1);
        assert!(!state.game_over);

        state.update(Direction::Right, &mut rng);
        assert!(state.game_over);
        assert!(!state.win);
    }

    #[test]
    fn test_wrap_around_crosses_edges() {
        let mut rng = rng();
        let mut state = GameState::new(4, 4, true, &mut rng);
        state.food = Some(Position::new(0, 0));

        state.update(Direction::Right, &mut rng);
        state.update(Direction::Right, &mut rng);
        assert_eq!(state.snake.head(), Position::new(0, 2));
        assert!(!state.game_over);

        state.food = Some(Position::new(3, 3));
        state.update(Direction::Up, &mut rng);
        state.update(Direction::Up, &mut rng);
        state.update(Direction::Up, &mut rng);
        assert_eq!(state.snake.head(), Position::new(0, 3));
        assert!(!state.game_over);
    }

    #[test]
    fn test_eating_grows_and_rescores() {
        let mut rng = rng();
        let mut state = GameState::new(4, 4, false, &mut rng);
        state.food = Some(Position::new(3, 2));

        state.update(Direction::Right, &mut rng);

        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 2);
        let food = state.food.expect("free cells remain");
        assert!(!state.snake.contains(food));
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut rng = rng();
        let mut state = GameState::new(4, 4, false, &mut rng);
        state.snake.body = vec![
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 2),
            Position::new(2, 1),
        ];
        state.food = Some(Position::new(3, 3));

        state.update(Direction::Down, &mut rng);

        assert!(state.game_over);
        assert!(!state.win);
    }

    #[test]
    fn test_filling_the_grid_wins() {
        let mut rng = rng();
        let mut state = GameState::new(2, 2, false, &mut rng);
        state.snake.body = vec![
            Position::new(0, 1),
            Position::new(0, 0),
            Position::new(1, 0),
        ];
        state.food = Some(Position::new(1, 1));

        state.update(Direction::Right, &mut rng);

        assert!(state.game_over);
        assert!(state.win);
        assert_eq!(state.score, 4);
        assert_eq!(state.food, None);
    }

    #[test]
    fn test_update_is_noop_after_game_over() {
        let mut rng = rng();
        let mut state = GameState::new(4, 4, false, &mut rng);
        state.food = Some(Position::new(0, 0));
        state.update(Direction::Right, &mut rng);
        state.update(Direction::Right, &mut rng);
        assert!(state.game_over);

        let snapshot = state.snake.clone();
        state.update(Direction::Left, &mut rng);
        assert_eq!(state.snake.body, snapshot.body);
    }

    #[test]
    fn test_toggle_wrap_around_only_flips_flag() {
        let mut rng = rng();
        let mut state = GameState::new(4, 4, false, &mut rng);
        let snake = state.snake.clone();

        state.toggle_wrap_around();
        assert!(state.wrap_around);
        assert_eq!(state.snake, snake);

        state.toggle_wrap_around();
        assert!(!state.wrap_around);
    }

    #[test]
    fn test_body_never_overlaps_while_running() {
        // Random walk on a torus; however it goes, a live snake never holds
        // the same cell twice
        let mut rng = rng();
        let mut state = GameState::new(4, 4, true, &mut rng);

        for _ in 0..500 {
            if state.game_over {
                break;
            }
            let direction = Direction::ALL[rng.gen_range(0..4)];
            state.update(direction, &mut rng);
            if !state.game_over {
                let unique: HashSet<_> = state.snake.body.iter().collect();
                assert_eq!(unique.len(), state.snake.len());
            }
        }
    }

    #[test]
    fn test_food_respawns_off_the_body() {
        let mut rng = rng();
        let mut state = GameState::new(2, 2, true, &mut rng);

        for _ in 0..50 {
            state.reset(&mut rng);
            let food = state.food.expect("free cells remain");
            assert!(!state.snake.contains(food));
            assert!(food.in_bounds(2, 2));
        }
    }
}
