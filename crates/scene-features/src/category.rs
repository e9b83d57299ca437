//! Coarse object categories

use serde::{Deserialize, Serialize};

/// Coarse object class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Pedestrian,
    Vehicle,
    TrafficCone,
    Barrier,
    Human,
    Animal,
    Other,
}

impl ObjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectCategory::Pedestrian => "pedestrian",
            ObjectCategory::Vehicle => "vehicle",
            ObjectCategory::TrafficCone => "traffic_cone",
            ObjectCategory::Barrier => "barrier",
            ObjectCategory::Human => "human",
            ObjectCategory::Animal => "animal",
            ObjectCategory::Other => "other",
        }
    }
}

/// Maps raw category names starting with `prefix` to `category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub prefix: String,
    pub category: ObjectCategory,
}

impl CategoryRule {
    pub fn new(prefix: impl Into<String>, category: ObjectCategory) -> Self {
        Self {
            prefix: prefix.into(),
            category,
        }
    }
}

/// Ordered prefix table collapsing a fine-grained taxonomy.
///
/// The first matching rule wins; unmatched names map to
/// [`ObjectCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    rules: Vec<CategoryRule>,
}

impl CategoryMap {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Map a raw category name
    pub fn classify(&self, raw: &str) -> ObjectCategory {
        self.rules
            .iter()
            .find(|rule| raw.starts_with(rule.prefix.as_str()))
            .map(|rule| rule.category)
            .unwrap_or(ObjectCategory::Other)
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

impl Default for CategoryMap {
    /// nuScenes-style taxonomy
    fn default() -> Self {
        Self::new(vec![
            CategoryRule::new("human.pedestrian", ObjectCategory::Pedestrian),
            CategoryRule::new("human.", ObjectCategory::Human),
            CategoryRule::new("vehicle.", ObjectCategory::Vehicle),
            CategoryRule::new("movable_object.trafficcone", ObjectCategory::TrafficCone),
            CategoryRule::new("movable_object.barrier", ObjectCategory::Barrier),
            CategoryRule::new("animal", ObjectCategory::Animal),
        ])
    }
}
