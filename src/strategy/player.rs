use super::MovementStrategy;
use crate::game::{Direction, Position};

/// Keyboard-driven strategy: the UI queues a heading between ticks and each
/// tick consumes it
#[derive(Debug, Clone)]
pub struct PlayerStrategy {
    pending: Direction,
    current: Direction,
}

impl PlayerStrategy {
    pub fn new() -> Self {
        Self {
            pending: Direction::Right,
            current: Direction::Right,
        }
    }

    /// Queue the next heading. A reversal of the heading most recently handed
    /// to the game is ignored while the snake is longer than one segment.
    pub fn set_pending_direction(&mut self, direction: Direction, snake_len: usize) {
        if snake_len > 1 && direction == self.current.opposite() {
            return;
        }
        self.pending = direction;
    }
}

impl Default for PlayerStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementStrategy for PlayerStrategy {
    fn name(&self) -> &'static str {
        "Player"
    }

    fn get_move(&mut self, _body: &[Position], _food: Option<Position>) -> Direction {
        self.current = self.pending;
        self.current
    }
}
