use rand::Rng;

use super::MovementStrategy;
use crate::cycle::HamiltonianCycle;
use crate::game::{Direction, Position};

/// Fill ratio above which shortcuts are disabled and the tour is followed
/// strictly
const SHORTCUT_FILL_LIMIT: f64 = 0.5;

/// Minimum number of tour steps a shortcut must leave between its landing
/// cell and the tail
const TAIL_MARGIN: usize = 5;

/// Follows the tour like [`super::FixedCycleStrategy`], but cuts across it
/// toward the food while the grid is empty enough that the detour cannot trap
/// the snake.
///
/// The body always occupies a contiguous arc of tour indices from tail to
/// head, so any neighbor of the head whose index lies outside that arc is
/// reachable without crossing the body; the tail margin then keeps the head
/// from landing right behind the tail.
pub struct AdaptiveCycleStrategy {
    cycle: HamiltonianCycle,
    width: i32,
    height: i32,
}

impl AdaptiveCycleStrategy {
    /// `random_cycle` selects the maze-walk tour; the boustrophedon tour is
    /// used otherwise, and for odd dimensions regardless
    pub fn new(width: i32, height: i32, random_cycle: bool, rng: &mut impl Rng) -> Self {
        let cycle = if random_cycle {
            HamiltonianCycle::randomized(width, height, rng)
        } else {
            HamiltonianCycle::boustrophedon(width, height)
        };
        Self {
            cycle,
            width,
            height,
        }
    }

    /// In-bounds neighbors of `cell` with their tour indices
    fn neighbors(&self, cell: Position) -> Vec<(Position, usize)> {
        Direction::ALL
            .iter()
            .map(|&direction| cell.step(direction))
            .filter(|next| next.in_bounds(self.width, self.height))
            .filter_map(|next| self.cycle.index_of(next).map(|index| (next, index)))
            .collect()
    }
}

impl MovementStrategy for AdaptiveCycleStrategy {
    fn name(&self) -> &'static str {
        "Cycle+Skip"
    }

    fn get_move(&mut self, body: &[Position], food: Option<Position>) -> Direction {
        let (Some(&head), Some(&tail)) = (body.first(), body.last()) else {
            return Direction::Right;
        };
        let Some(h) = self.cycle.index_of(head) else {
            return Direction::Right;
        };
        let next_on_tour = self.cycle.cell(h + 1);

        // Without a tail and a food index there is nothing to aim for; stay
        // on the tour
        let (Some(t), Some(a)) = (
            self.cycle.index_of(tail),
            food.and_then(|food| self.cycle.index_of(food)),
        ) else {
            return Direction::from_step(head, next_on_tour).unwrap_or(Direction::Right);
        };

        let occupancy = body.len() as f64 / (self.width * self.height) as f64;
        let mut candidates = self.neighbors(head);

        let shortcut = if h > t && occupancy < SHORTCUT_FILL_LIMIT {
            // Body sits on indices t..=h; only cells outside that arc are
            // open
            candidates.retain(|&(_, index)| index < t || index > h);
            candidates.sort_by_key(|&(_, index)| self.cycle.distance(index, a));
            candidates.retain(|&(_, index)| self.cycle.distance(index, t) > TAIL_MARGIN);
            candidates.first().map(|&(cell, _)| cell)
        } else if h < t && occupancy < SHORTCUT_FILL_LIMIT {
            // Mirror case: the open arc is strictly between head and tail
            candidates.retain(|&(_, index)| index > h && index < t);
            candidates.sort_by_key(|&(_, index)| self.cycle.distance(index, a));
            candidates.retain(|&(_, index)| self.cycle.distance(index, t) > TAIL_MARGIN);
            candidates.first().map(|&(cell, _)| cell)
        } else if h == t {
            // Single segment: nothing to trap, head straight for the food
            candidates.sort_by_key(|&(_, index)| self.cycle.distance(index, a));
            candidates.first().map(|&(cell, _)| cell)
        } else {
            None
        };

        let next = shortcut.unwrap_or(next_on_tour);
        Direction::from_step(head, next).unwrap_or(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // The 4x4 boustrophedon tour, for reference:
    //   0 (0,0)  1 (1,0)  2 (1,1)  3 (1,2)  4 (2,2)  5 (2,1)  6 (2,0)
    //   7 (3,0)  8 (3,1)  9 (3,2) 10 (3,3) 11 (2,3) 12 (1,3) 13 (0,3)
    //  14 (0,2) 15 (0,1)
    fn strategy() -> AdaptiveCycleStrategy {
        let mut rng = StdRng::seed_from_u64(0);
        AdaptiveCycleStrategy::new(4, 4, false, &mut rng)
    }

    fn body(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn test_single_segment_heads_for_food() {
        let mut strategy = strategy();
        // Head at tour index 0; food one step down at index 15. Strict
        // following would go right.
        let direction = strategy.get_move(&body(&[(0, 0)]), Some(Position::new(0, 1)));
        assert_eq!(direction, Direction::Down);
    }

    #[test]
    fn test_shortcut_jumps_the_tour_toward_food() {
        let mut strategy = strategy();
        // Head index 2, tail index 0; the neighbor (2,1) at index 5 is the
        // food itself, far enough from the tail to take
        let snake = body(&[(1, 1), (1, 0), (0, 0)]);
        let direction = strategy.get_move(&snake, Some(Position::new(2, 1)));
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn test_tail_margin_rejects_the_nearest_candidate() {
        let mut strategy = strategy();
        // The food sits on neighbor (0,1), tour index 15, one step ahead of
        // the tail at index 0. That cell is inside the safety margin, so the
        // pick falls through to the next-closest safe neighbor (2,1).
        let snake = body(&[(1, 1), (1, 0), (0, 0)]);
        let direction = strategy.get_move(&snake, Some(Position::new(0, 1)));
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn test_wrapped_arc_shortcut() {
        let mut strategy = strategy();
        // Head index 2, tail index 12: the body wraps past index 0, so the
        // open arc is strictly between the two. The food at index 5 is a
        // neighbor inside that arc.
        let snake = body(&[
            (1, 1),
            (1, 0),
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
        ]);
        let direction = strategy.get_move(&snake, Some(Position::new(2, 1)));
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn test_half_full_grid_follows_tour_strictly() {
        let mut strategy = strategy();
        // Same shape as the wrapped-arc case plus one more segment: 8 of 16
        // cells hits the fill limit and the shortcut is refused
        let snake = body(&[
            (1, 1),
            (1, 0),
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (2, 3),
        ]);
        let direction = strategy.get_move(&snake, Some(Position::new(2, 1)));
        assert_eq!(direction, Direction::Down);
    }

    #[test]
    fn test_no_food_follows_tour() {
        let mut strategy = strategy();
        let snake = body(&[(1, 1), (1, 0), (0, 0)]);
        let direction = strategy.get_move(&snake, None);
        assert_eq!(direction, Direction::Down);
    }

    #[test]
    fn test_off_tour_head_gets_default_heading() {
        let mut strategy = strategy();
        let direction = strategy.get_move(&body(&[(9, 9)]), Some(Position::new(0, 0)));
        assert_eq!(direction, Direction::Right);
    }

    #[test]
    fn test_randomized_tour_still_yields_adjacent_moves() {
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut strategy = AdaptiveCycleStrategy::new(6, 6, true, &mut rng);

            let head = Position::new(3, 3);
            let direction = strategy.get_move(&[head], Some(Position::new(0, 0)));
            assert!(head.step(direction).in_bounds(6, 6));
        }
    }
}
