//! Read-only capability view over a game state

use crate::infra::{GhostPos, Position};
use crate::state::Grid;

/// Snapshot of a single ghost: where it is and how long it stays scared.
#[derive(Debug, Clone, Copy, PartialEq, Hash)]
pub struct GhostState {
    pub position: GhostPos,
    pub scared_timer: i32,
}

impl GhostState {
    pub fn new(position: GhostPos) -> Self {
        Self {
            position,
            scared_timer: 0,
        }
    }

    /// A timer of one or more means the ghost is edible, not a threat.
    pub fn is_scared(&self) -> bool {
        self.scared_timer >= 1
    }
}

/// The narrow accessor set feature extraction needs from the live game.
///
/// Extractors never see more of the state than this, which keeps them
/// testable against [`GameSnapshot`](crate::state::GameSnapshot) fixtures
/// and safe to run concurrently over a shared read-only state.
pub trait GameStateView {
    fn walls(&self) -> &Grid;

    fn food(&self) -> &Grid;

    fn pacman_position(&self) -> Position;

    /// Positions of every ghost, in ghost-id order.
    fn ghost_positions(&self) -> Vec<GhostPos>;

    /// State of the ghost with the given 1-based id. Asking for a ghost the
    /// state does not have is the accessor's failure to raise; no recovery
    /// happens on this side.
    fn ghost_state(&self, id: usize) -> GhostState;
}
