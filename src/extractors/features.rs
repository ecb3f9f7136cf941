//! Named numeric feature vectors

use std::collections::HashMap;

/// A mapping from feature name to value.
///
/// Missing names read as zero, so callers can treat "not set" and "zero"
/// identically. A fresh vector is built per extraction call and is owned
/// exclusively by the caller afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    values: HashMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Uniformly rescales every entry that has been set.
    pub fn divide_all(&mut self, divisor: f64) {
        for value in self.values.values_mut() {
            *value /= divisor;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_reads_zero() {
        let features = FeatureVector::new();
        assert_eq!(features.get("bias"), 0.0);
        assert!(!features.contains("bias"));
    }

    #[test]
    fn test_set_then_get() {
        let mut features = FeatureVector::new();
        features.set("bias", 1.0);
        assert_eq!(features.get("bias"), 1.0);
        assert_eq!(features.len(), 1);
    }

    #[test]
    fn test_divide_all_rescales_set_entries() {
        let mut features = FeatureVector::new();
        features.set("bias", 1.0);
        features.set("closest-food", 0.5);
        features.divide_all(10.0);
        assert_eq!(features.get("bias"), 0.1);
        assert_eq!(features.get("closest-food"), 0.05);
        assert_eq!(features.get("unset"), 0.0);
    }
}
