use super::MovementStrategy;
use crate::game::{Direction, Position};

/// Naive chaser: walks straight at the food, x axis first, with no regard
/// for its own body beyond refusing a half-turn. Traps itself constantly.
#[derive(Debug, Clone)]
pub struct DummyStrategy {
    last_move: Direction,
}

impl DummyStrategy {
    pub fn new() -> Self {
        Self {
            last_move: Direction::Right,
        }
    }
}

impl Default for DummyStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementStrategy for DummyStrategy {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn get_move(&mut self, body: &[Position], food: Option<Position>) -> Direction {
        let Some(&head) = body.first() else {
            return self.last_move;
        };
        let Some(food) = food else {
            return self.last_move;
        };

        let toward_y = if head.y < food.y {
            Some(Direction::Down)
        } else if head.y > food.y {
            Some(Direction::Up)
        } else {
            None
        };
        let mut step = if head.x < food.x {
            Some(Direction::Right)
        } else if head.x > food.x {
            Some(Direction::Left)
        } else {
            toward_y
        };

        // Never fold back onto the neck: retry on the y axis, and failing
        // that keep going
        if body.len() > 1 && step == Some(self.last_move.opposite()) {
            step = toward_y;
            if step == Some(self.last_move.opposite()) {
                step = None;
            }
        }

        self.last_move = step.unwrap_or(self.last_move);
        self.last_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn test_closes_x_gap_first() {
        let mut chaser = DummyStrategy::new();
        let snake = body(&[(2, 2)]);

        assert_eq!(
            chaser.get_move(&snake, Some(Position::new(0, 0))),
            Direction::Left
        );
    }

    #[test]
    fn test_steps_on_y_when_x_aligned() {
        let mut chaser = DummyStrategy::new();
        let snake = body(&[(2, 2)]);

        assert_eq!(
            chaser.get_move(&snake, Some(Position::new(2, 0))),
            Direction::Up
        );
    }

    #[test]
    fn test_half_turn_retries_on_y_axis() {
        let mut chaser = DummyStrategy::new();
        // last move starts out Right; food to the left and below
        let snake = body(&[(2, 2), (1, 2)]);

        assert_eq!(
            chaser.get_move(&snake, Some(Position::new(0, 3))),
            Direction::Down
        );
    }

    #[test]
    fn test_half_turn_with_no_y_gap_keeps_heading() {
        let mut chaser = DummyStrategy::new();
        // food dead behind on the same row: the x step reverses and there is
        // no y component to fall back to
        let snake = body(&[(2, 2), (1, 2)]);

        assert_eq!(
            chaser.get_move(&snake, Some(Position::new(0, 2))),
            Direction::Right
        );
    }

    #[test]
    fn test_single_segment_may_reverse() {
        let mut chaser = DummyStrategy::new();
        let snake = body(&[(2, 2)]);

        assert_eq!(
            chaser.get_move(&snake, Some(Position::new(0, 2))),
            Direction::Left
        );
    }

    #[test]
    fn test_no_food_repeats_last_move() {
        let mut chaser = DummyStrategy::new();
        let snake = body(&[(2, 2)]);

        assert_eq!(chaser.get_move(&snake, None), Direction::Right);

        chaser.get_move(&snake, Some(Position::new(2, 5)));
        assert_eq!(chaser.get_move(&snake, None), Direction::Down);
    }

    #[test]
    fn test_on_food_repeats_last_move() {
        let mut chaser = DummyStrategy::new();
        let snake = body(&[(2, 2)]);

        assert_eq!(
            chaser.get_move(&snake, Some(Position::new(2, 2))),
            Direction::Right
        );
    }
}
