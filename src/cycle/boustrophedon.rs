use std::collections::HashSet;

use crate::game::{Direction, Position};

/// Column-serpentine tour: even columns run toward the top of the grid, odd
/// columns back down, and the bottom row is kept free as the return corridor
/// to the start.
///
/// The rule below reasons in a frame where `original_y` counts up from the
/// visual bottom (`original_y = height - 1 - y`), which keeps the corridor
/// condition readable: the corridor is `original_y == 0`.
///
/// Only closes into a full tour when both dimensions are even; the walk stops
/// defensively if it ever runs out of legal steps.
pub(super) fn generate(width: i32, height: i32) -> Vec<Position> {
    let mut cycle = Vec::with_capacity((width * height) as usize);
    let mut visited = HashSet::new();
    let mut pos = Position::new(0, 0);
    let start = Position::new(0, 0);
    let last_col = width - 1;
    let max_y = height - 1;

    loop {
        if visited.contains(&pos) && pos != start {
            break;
        }
        cycle.push(pos);
        visited.insert(pos);

        let going_up = pos.x % 2 == 0;
        let original_y = max_y - pos.y;

        let step = if going_up && original_y != max_y && (original_y != 0 || pos.x == 0) {
            // Climb the even column, except into the corridor
            Some(Direction::Up)
        } else if (going_up && original_y == max_y)
            || (!going_up && original_y == 1 && pos.x != last_col)
        {
            // Top of an up column, or the row above the corridor in a down
            // column: cross to the next column
            Some(Direction::Right)
        } else if original_y == 0 && pos.x != 0 {
            // The corridor itself runs back toward column 0
            Some(Direction::Left)
        } else if !going_up && original_y != 0 && (original_y > 1 || pos.x == last_col) {
            // Descend the odd column; the last column continues into the
            // corridor
            Some(Direction::Down)
        } else {
            None
        };

        let Some(step) = step else { break };
        let next = pos.step(step);
        if !next.in_bounds(width, height) {
            break;
        }
        if next == start && cycle.len() > 1 {
            break;
        }
        pos = next;
    }

    cycle
}
