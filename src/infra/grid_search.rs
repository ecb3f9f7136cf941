//! Breadth-first shortest-path search over a walled grid

use std::collections::{HashSet, VecDeque};

use crate::infra::{GhostPos, Position, legal_neighbors};
use crate::state::Grid;

/// Offsets at which a ghost coordinate counts as occupying a grid cell.
///
/// Ghosts move in half-unit steps while the search runs on integer cells,
/// so a cell is "hit" by the exact coordinate and these half-unit
/// displacements around it.
const SCARED_GHOST_OFFSETS: [(f64, f64); 7] = [
    (0.0, 0.0),
    (-0.5, -0.5),
    (0.5, 0.5),
    (0.5, 0.0),
    (0.0, 0.5),
    (0.0, -0.5),
    (-0.5, 0.0),
];

pub struct GridSearch;

impl GridSearch {
    /// BFS from `start` to the nearest cell satisfying `is_target`.
    ///
    /// Returns the minimum number of wall-free steps, or `None` when no
    /// satisfying cell is reachable — a normal outcome, not an error.
    /// `start` is expected to be an in-bounds, non-wall cell; that is the
    /// caller's responsibility and is not validated here.
    #[tracing::instrument(level = "trace", skip(walls, is_target), fields(start_x = start.x, start_y = start.y))]
    pub fn shortest_distance<F>(walls: &Grid, start: Position, is_target: F) -> Option<i32>
    where
        F: Fn(Position) -> bool,
    {
        let mut frontier: VecDeque<(Position, i32)> = VecDeque::new();
        let mut expanded: HashSet<Position> = HashSet::new();
        frontier.push_back((start, 0));

        while let Some((pos, dist)) = frontier.pop_front() {
            // Neighbors are enqueued without a seen check, so a cell can sit
            // in the frontier more than once; the first pop wins.
            if !expanded.insert(pos) {
                continue;
            }
            if is_target(pos) {
                tracing::trace!(dist, "target found");
                return Some(dist);
            }
            for neighbor in legal_neighbors(pos, walls) {
                frontier.push_back((neighbor, dist + 1));
            }
        }

        tracing::trace!("no target reachable");
        None
    }

    /// Distance to the nearest cell containing food.
    pub fn distance_to_food(walls: &Grid, food: &Grid, start: Position) -> Option<i32> {
        Self::shortest_distance(walls, start, |pos| food.get(pos))
    }

    /// Distance to the nearest cell the given scared ghost occupies.
    pub fn distance_to_scared_ghost(walls: &Grid, ghost: GhostPos, start: Position) -> Option<i32> {
        Self::shortest_distance(walls, start, |pos| Self::scared_ghost_at(ghost, pos))
    }

    fn scared_ghost_at(ghost: GhostPos, cell: Position) -> bool {
        SCARED_GHOST_OFFSETS
            .iter()
            .any(|&(dx, dy)| ghost.x == cell.x as f64 + dx && ghost.y == cell.y as f64 + dy)
    }
}
