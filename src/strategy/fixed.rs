use super::MovementStrategy;
use crate::cycle::HamiltonianCycle;
use crate::game::{Direction, Position};

/// Follows the boustrophedon tour verbatim. Slow, but it can never trap
/// itself and eventually fills the grid.
pub struct FixedCycleStrategy {
    cycle: HamiltonianCycle,
}

impl FixedCycleStrategy {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            cycle: HamiltonianCycle::boustrophedon(width, height),
        }
    }
}

impl MovementStrategy for FixedCycleStrategy {
    fn name(&self) -> &'static str {
        "Cycle"
    }

    fn get_move(&mut self, body: &[Position], _food: Option<Position>) -> Direction {
        let Some(&head) = body.first() else {
            return Direction::Right;
        };
        // Head off the tour (possible right after an external reset):
        // degrade to a default heading instead of failing
        let Some(index) = self.cycle.index_of(head) else {
            return Direction::Right;
        };

        let next = self.cycle.cell(index + 1);
        Direction::from_step(head, next).unwrap_or(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_moves_to_its_successor() {
        let mut strategy = FixedCycleStrategy::new(4, 4);
        let cycle = HamiltonianCycle::boustrophedon(4, 4);

        for index in 0..cycle.len() {
            let head = cycle.cell(index);
            let next = cycle.cell(index + 1);
            let direction = strategy.get_move(&[head], None);
            assert_eq!(head.step(direction), next);
        }
    }

    #[test]
    fn test_off_tour_head_gets_default_heading() {
        let mut strategy = FixedCycleStrategy::new(4, 4);
        let direction = strategy.get_move(&[Position::new(9, 9)], None);
        assert_eq!(direction, Direction::Right);
    }
}
