pub mod extractors;
pub mod infra;
pub mod state;

// Re-export commonly used types for convenience
pub use extractors::{
    ExtendedExtractor, FeatureExtractor, FeatureVector, IdentityExtractor, SimpleExtractor,
};
pub use infra::{Direction, GhostPos, GridSearch, Position, legal_neighbors};
pub use state::{GameSnapshot, GameStateView, GhostState, Grid, LayoutError};
