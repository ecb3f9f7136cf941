use crate::extractors::{
    FEATURE_SCALE, FeatureExtractor, FeatureVector, ghosts_one_step_away, names,
};
use crate::infra::{Direction, GridSearch};
use crate::state::GameStateView;

/// Reflex features for a basic agent:
/// - whether food will be eaten
/// - how far away the next food is
/// - whether a ghost is one step away
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleExtractor;

impl FeatureExtractor for SimpleExtractor {
    fn get_features(&self, state: &dyn GameStateView, action: Direction) -> FeatureVector {
        let food = state.food();
        let walls = state.walls();
        let ghosts = state.ghost_positions();

        let mut features = FeatureVector::new();
        features.set(names::BIAS, 1.0);

        // Where the agent ends up after taking the action.
        let next = state.pacman_position().step(action);

        let adjacent = ghosts_one_step_away(&ghosts, next, walls);
        features.set(names::GHOSTS_ONE_STEP_AWAY, adjacent as f64);

        // Only claim the food when no ghost threatens the destination.
        if adjacent == 0 && food.get(next) {
            features.set(names::EATS_FOOD, 1.0);
        }

        if let Some(dist) = GridSearch::distance_to_food(walls, food, next) {
            // Normalized by grid area so the value stays below one and the
            // linear update does not diverge.
            features.set(names::CLOSEST_FOOD, dist as f64 / walls.area());
        }

        features.divide_all(FEATURE_SCALE);
        features
    }
}
