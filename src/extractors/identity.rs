use std::hash::{DefaultHasher, Hash, Hasher};

use crate::extractors::{FeatureExtractor, FeatureVector};
use crate::infra::Direction;
use crate::state::GameStateView;

/// Baseline extractor: a single indicator keyed by the (state, action)
/// pair itself.
///
/// There is no generalization across states and no search; two calls
/// produce the same key only when every observable accessor agrees. The
/// indicator keeps its raw value of 1.0, no rescaling is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor;

impl IdentityExtractor {
    fn state_action_key(state: &dyn GameStateView, action: Direction) -> String {
        let mut hasher = DefaultHasher::new();
        state.walls().hash(&mut hasher);
        state.food().hash(&mut hasher);
        state.pacman_position().hash(&mut hasher);
        let ghosts = state.ghost_positions();
        for id in 1..=ghosts.len() {
            state.ghost_state(id).hash(&mut hasher);
        }
        format!("{:016x}:{action}", hasher.finish())
    }
}

impl FeatureExtractor for IdentityExtractor {
    fn get_features(&self, state: &dyn GameStateView, action: Direction) -> FeatureVector {
        let mut features = FeatureVector::new();
        features.set(Self::state_action_key(state, action), 1.0);
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Position;
    use crate::state::GameSnapshot;

    fn snapshot() -> GameSnapshot {
        GameSnapshot::parse(
            "%%%%%\n\
             %P..%\n\
             %  G%\n\
             %%%%%",
        )
        .unwrap()
    }

    #[test]
    fn test_single_unit_entry() {
        let features = IdentityExtractor.get_features(&snapshot(), Direction::East);
        assert_eq!(features.len(), 1);
        let (_, value) = features.iter().next().unwrap();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_same_pair_is_deterministic() {
        let state = snapshot();
        let first = IdentityExtractor.get_features(&state, Direction::East);
        let second = IdentityExtractor.get_features(&state, Direction::East);
        assert_eq!(first, second);
    }

    #[test]
    fn test_actions_get_distinct_keys() {
        let state = snapshot();
        let east = IdentityExtractor.get_features(&state, Direction::East);
        let west = IdentityExtractor.get_features(&state, Direction::West);
        assert_ne!(east, west);
    }

    #[test]
    fn test_state_change_changes_the_key() {
        let before = IdentityExtractor.get_features(&snapshot(), Direction::East);
        let mut changed = snapshot();
        changed.set_food(Position::new(2, 2), false);
        let after = IdentityExtractor.get_features(&changed, Direction::East);
        assert_ne!(before, after);
    }

    #[test]
    fn test_scared_timer_is_part_of_the_key() {
        let before = IdentityExtractor.get_features(&snapshot(), Direction::East);
        let mut scared = snapshot();
        scared.set_scared_timer(1, 10);
        let after = IdentityExtractor.get_features(&scared, Direction::East);
        assert_ne!(before, after);
    }
}
