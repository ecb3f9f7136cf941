mod grid;
mod snapshot;
mod view;

pub use grid::Grid;
pub use snapshot::{GameSnapshot, LayoutError};
pub use view::{GameStateView, GhostState};
