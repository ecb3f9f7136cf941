use crate::extractors::{
    FEATURE_SCALE, FeatureExtractor, FeatureVector, ghosts_one_step_away, names,
};
use crate::infra::{Direction, GridSearch};
use crate::state::{GameStateView, GhostState};

/// Scared status of the two named ghosts.
///
/// Only `BothScared` changes behavior today: a lone scared ghost is still
/// treated as a threat, the same as no scared ghost at all. The one-scared
/// case is kept as its own tag so that changing that policy is a one-arm
/// edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScaredStatus {
    NoneScared,
    OneScared,
    BothScared,
}

impl ScaredStatus {
    fn classify(ghost1: &GhostState, ghost2: &GhostState) -> Self {
        match (ghost1.is_scared(), ghost2.is_scared()) {
            (true, true) => ScaredStatus::BothScared,
            (false, false) => ScaredStatus::NoneScared,
            _ => ScaredStatus::OneScared,
        }
    }
}

/// The simple reflex signals plus scared-ghost awareness and absolute
/// coordinates of the agent and the two named ghosts.
///
/// While both ghosts are scared they stop registering as danger and become
/// search targets themselves; stepping onto one scores like the strongest
/// food signal. Requires a state with at least two ghosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedExtractor;

impl FeatureExtractor for ExtendedExtractor {
    fn get_features(&self, state: &dyn GameStateView, action: Direction) -> FeatureVector {
        let food = state.food();
        let walls = state.walls();
        let ghosts = state.ghost_positions();
        let pacman = state.pacman_position();
        let ghost1 = state.ghost_state(1);
        let ghost2 = state.ghost_state(2);

        let mut features = FeatureVector::new();
        features.set(names::BIAS, 1.0);
        features.set(names::GHOSTS_ONE_STEP_AWAY, 0.0);
        features.set(names::EATS_FOOD, 0.0);
        features.set(names::CLOSEST_FOOD, 0.0);
        features.set(names::CLOSEST_SCARED_GHOST, 0.0);

        features.set(names::PACMAN_X, pacman.x as f64);
        features.set(names::PACMAN_Y, pacman.y as f64);
        features.set(names::GHOST1_X, ghost1.position.x);
        features.set(names::GHOST1_Y, ghost1.position.y);
        features.set(names::GHOST2_X, ghost2.position.x);
        features.set(names::GHOST2_Y, ghost2.position.y);

        let next = pacman.step(action);

        match ScaredStatus::classify(&ghost1, &ghost2) {
            ScaredStatus::BothScared => {
                // Neither ghost is a threat; the nearer one is the target.
                let dist1 = GridSearch::distance_to_scared_ghost(walls, ghost1.position, next);
                let dist2 = GridSearch::distance_to_scared_ghost(walls, ghost2.position, next);
                if let (Some(dist1), Some(dist2)) = (dist1, dist2) {
                    features.set(
                        names::CLOSEST_SCARED_GHOST,
                        dist1.min(dist2) as f64 / walls.area(),
                    );
                }
                // Stepping onto a scared ghost scores like the strongest
                // food signal.
                if ghost1.position.is_at_cell(next) || ghost2.position.is_at_cell(next) {
                    features.set(names::CLOSEST_FOOD, 1.0);
                }
            }
            ScaredStatus::NoneScared | ScaredStatus::OneScared => {
                if ghost1.is_scared() && ghost1.position.is_at_cell(next) {
                    features.set(names::CLOSEST_FOOD, 1.0);
                }
                if ghost2.is_scared() && ghost2.position.is_at_cell(next) {
                    features.set(names::CLOSEST_FOOD, 1.0);
                }

                let adjacent = ghosts_one_step_away(&ghosts, next, walls);
                features.set(names::GHOSTS_ONE_STEP_AWAY, adjacent as f64);
                if adjacent == 0 && food.get(next) {
                    features.set(names::EATS_FOOD, 1.0);
                }
                // Runs after the scared-capture checks above and overwrites
                // their forced value whenever any food is reachable.
                if let Some(dist) = GridSearch::distance_to_food(walls, food, next) {
                    features.set(names::CLOSEST_FOOD, dist as f64 / walls.area());
                }
            }
        }

        features.divide_all(FEATURE_SCALE);
        features
    }
}
