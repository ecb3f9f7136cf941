mod grid_search;
mod types;

pub use grid_search::GridSearch;
pub use types::{Direction, GhostPos, Position};

use crate::state::Grid;

// ============================================================================
// Helper functions
// ============================================================================

/// All cells reachable from `pos` in one movement action.
///
/// `Stop` is a movement action too, so a non-wall cell is a member of its
/// own legal-neighbor set. Out-of-bounds cells are never legal, which makes
/// grid edges act as walls even on wall-free grids.
pub fn legal_neighbors(pos: Position, walls: &Grid) -> Vec<Position> {
    let mut neighbors = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let next = pos.step(direction);
        if !walls.in_bounds(next) || walls.get(next) {
            continue;
        }
        neighbors.push(next);
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_cell_is_its_own_neighbor() {
        let walls = Grid::new(3, 3);
        let neighbors = legal_neighbors(Position::new(1, 1), &walls);
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.contains(&Position::new(1, 1)));
    }

    #[test]
    fn test_corner_is_clipped_by_bounds() {
        let walls = Grid::new(3, 3);
        let neighbors = legal_neighbors(Position::new(0, 0), &walls);
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.contains(&Position::new(0, 0)));
        assert!(neighbors.contains(&Position::new(1, 0)));
        assert!(neighbors.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_walls_are_excluded() {
        let mut walls = Grid::new(3, 3);
        walls.set(Position::new(1, 2), true);
        let neighbors = legal_neighbors(Position::new(1, 1), &walls);
        assert_eq!(neighbors.len(), 4);
        assert!(!neighbors.contains(&Position::new(1, 2)));
    }
}
