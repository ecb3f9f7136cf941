//! Feature extraction for (state, action) pairs
//!
//! Each extractor maps the current game state plus a candidate action to a
//! named numeric vector, the basis a linear value-function approximator
//! updates its weights against. Three variants ship here:
//! - [`IdentityExtractor`]: one indicator per (state, action) pair, no
//!   generalization, useful as a baseline
//! - [`SimpleExtractor`]: reflex signals (food ahead, ghost adjacency,
//!   distance to the nearest food)
//! - [`ExtendedExtractor`]: the simple signals plus scared-ghost handling
//!   and absolute entity coordinates

mod extended;
mod features;
mod identity;
mod simple;

pub use extended::ExtendedExtractor;
pub use features::FeatureVector;
pub use identity::IdentityExtractor;
pub use simple::SimpleExtractor;

use crate::infra::{Direction, GhostPos, Position, legal_neighbors};
use crate::state::{GameStateView, Grid};

/// Uniform divisor applied after composition; keeps feature magnitudes
/// small enough that the linear update rule stays stable.
pub const FEATURE_SCALE: f64 = 10.0;

/// Names of the features the bundled extractors emit.
pub mod names {
    pub const BIAS: &str = "bias";
    pub const GHOSTS_ONE_STEP_AWAY: &str = "ghosts-one-step-away";
    pub const EATS_FOOD: &str = "eats-food";
    pub const CLOSEST_FOOD: &str = "closest-food";
    pub const CLOSEST_SCARED_GHOST: &str = "closest-scared-ghost";
    pub const PACMAN_X: &str = "pacman-x";
    pub const PACMAN_Y: &str = "pacman-y";
    pub const GHOST1_X: &str = "ghost1-x";
    pub const GHOST1_Y: &str = "ghost1-y";
    pub const GHOST2_X: &str = "ghost2-x";
    pub const GHOST2_Y: &str = "ghost2-y";
}

/// Maps a (state, action) pair to a named numeric vector.
///
/// Implementations are stateless across calls and build a fresh vector
/// every time; failures of the underlying state accessors propagate
/// unchanged.
pub trait FeatureExtractor {
    fn get_features(&self, state: &dyn GameStateView, action: Direction) -> FeatureVector;
}

/// Number of ghosts whose legal-neighbor set contains `cell`.
///
/// A ghost's neighbor set includes the cell it stands on, so a ghost
/// already sitting on `cell` counts as one step away. Ghost coordinates
/// round to their nearest cell first.
pub(crate) fn ghosts_one_step_away(ghosts: &[GhostPos], cell: Position, walls: &Grid) -> usize {
    ghosts
        .iter()
        .filter(|ghost| legal_neighbors(ghost.nearest_cell(), walls).contains(&cell))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghost_on_the_cell_counts_as_adjacent() {
        let walls = Grid::new(3, 3);
        let ghosts = vec![GhostPos::new(1.0, 1.0)];
        assert_eq!(ghosts_one_step_away(&ghosts, Position::new(1, 1), &walls), 1);
    }

    #[test]
    fn test_half_step_ghost_rounds_before_adjacency() {
        let walls = Grid::new(4, 3);
        // Rounds to (2,1); (1,1) is in that cell's neighbor set.
        let ghosts = vec![GhostPos::new(1.5, 1.0)];
        assert_eq!(ghosts_one_step_away(&ghosts, Position::new(1, 1), &walls), 1);
        assert_eq!(ghosts_one_step_away(&ghosts, Position::new(0, 0), &walls), 0);
    }

    #[test]
    fn test_wall_between_ghost_and_cell_blocks_adjacency() {
        let mut walls = Grid::new(3, 3);
        walls.set(Position::new(1, 1), true);
        let ghosts = vec![GhostPos::new(1.0, 0.0)];
        // The cell north of the ghost is a wall, so (1,2) is not in its
        // legal-neighbor set.
        assert_eq!(ghosts_one_step_away(&ghosts, Position::new(1, 2), &walls), 0);
    }
}
