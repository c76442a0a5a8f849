use std::collections::HashSet;

use rand::Rng;

use crate::game::{Direction, Position};

use super::boustrophedon;

/// Cell of the half-resolution maze grid; each super-cell covers a 2x2 block
/// of the real grid
type SuperCell = (i32, i32);

/// Randomized tour: build a spanning tree over the super-cell grid, then walk
/// the real grid along the tree's walls. Odd dimensions fall back to the
/// deterministic tour.
pub(super) fn generate(width: i32, height: i32, rng: &mut impl Rng) -> Vec<Position> {
    if width % 2 != 0 || height % 2 != 0 {
        return boustrophedon::generate(width, height);
    }

    let tree = spanning_tree(width / 2, height / 2, rng);
    wall_walk(width, height, &tree)
}

/// Randomized Prim: grow the tree by knocking down a uniformly random
/// frontier wall until every super-cell is reached
fn spanning_tree(
    maze_width: i32,
    maze_height: i32,
    rng: &mut impl Rng,
) -> HashSet<(SuperCell, SuperCell)> {
    let mut tree = HashSet::new();
    let mut visited = HashSet::new();
    let mut frontier: Vec<(SuperCell, SuperCell)> = Vec::new();

    let start = (
        rng.gen_range(0..maze_width),
        rng.gen_range(0..maze_height),
    );
    visited.insert(start);
    push_walls(start, maze_width, maze_height, &visited, &mut frontier);

    while !frontier.is_empty() {
        let (a, b) = frontier.swap_remove(rng.gen_range(0..frontier.len()));

        // A frontier wall is only still worth breaking while exactly one of
        // its sides has been reached
        if visited.contains(&a) != visited.contains(&b) {
            tree.insert(edge(a, b));
            let fresh = if visited.contains(&a) { b } else { a };
            visited.insert(fresh);
            push_walls(fresh, maze_width, maze_height, &visited, &mut frontier);
        }
    }

    tree
}

fn push_walls(
    cell: SuperCell,
    maze_width: i32,
    maze_height: i32,
    visited: &HashSet<SuperCell>,
    frontier: &mut Vec<(SuperCell, SuperCell)>,
) {
    for (dx, dy) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
        let neighbor = (cell.0 + dx, cell.1 + dy);
        let in_maze = neighbor.0 >= 0
            && neighbor.0 < maze_width
            && neighbor.1 >= 0
            && neighbor.1 < maze_height;
        if in_maze && !visited.contains(&neighbor) {
            frontier.push((cell, neighbor));
        }
    }
}

/// Normalized edge key so (a, b) and (b, a) compare equal
fn edge(a: SuperCell, b: SuperCell) -> (SuperCell, SuperCell) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Trace the real grid with the left hand on the maze walls: prefer a left
/// turn, then straight, then right. One lap of `width * height` steps visits
/// every cell and returns to the start.
fn wall_walk(width: i32, height: i32, tree: &HashSet<(SuperCell, SuperCell)>) -> Vec<Position> {
    let passable = |from: Position, to: Position| -> bool {
        if !to.in_bounds(width, height) {
            return false;
        }
        let super_from = (from.x / 2, from.y / 2);
        let super_to = (to.x / 2, to.y / 2);
        super_from == super_to || tree.contains(&edge(super_from, super_to))
    };

    let mut cycle = Vec::with_capacity((width * height) as usize);
    let mut pos = Position::new(0, 0);
    let mut heading = Direction::Right;

    for _ in 0..width * height {
        cycle.push(pos);

        let left = heading.turned_left();
        heading = if passable(pos, pos.step(left)) {
            left
        } else if passable(pos, pos.step(heading)) {
            heading
        } else {
            // With left and straight walled off, right is open by
            // construction
            heading.turned_right()
        };
        pos = pos.step(heading);
    }

    cycle
}
