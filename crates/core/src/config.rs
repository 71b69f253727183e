//! Tuning knobs for board generation and traversal.
//!
//! Both structs deserialize with per-field defaults so a partial config file
//! only overrides what it names. Call `validate` before use; generation does
//! this itself.

use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Chance that an off-route cell becomes a tree.
    #[serde(default = "GenerationConfig::default_tree_ratio")]
    pub tree_ratio: f64,
    /// Chance that a ground cell hides food.
    #[serde(default = "GenerationConfig::default_ground_food_ratio")]
    pub ground_food_ratio: f64,
    /// Chance that a tree's food is poisoned.
    #[serde(default = "GenerationConfig::default_poisonous_tree_food_ratio")]
    pub poisonous_tree_food_ratio: f64,
}

impl GenerationConfig {
    const fn default_tree_ratio() -> f64 {
        0.05
    }

    const fn default_ground_food_ratio() -> f64 {
        0.5
    }

    const fn default_poisonous_tree_food_ratio() -> f64 {
        0.1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("tree_ratio", self.tree_ratio)?;
        check_ratio("ground_food_ratio", self.ground_food_ratio)?;
        check_ratio("poisonous_tree_food_ratio", self.poisonous_tree_food_ratio)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tree_ratio: Self::default_tree_ratio(),
            ground_food_ratio: Self::default_ground_food_ratio(),
            poisonous_tree_food_ratio: Self::default_poisonous_tree_food_ratio(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Starting resource as a share of the route length.
    #[serde(default = "TraversalConfig::default_starting_resource_fraction")]
    pub starting_resource_fraction: f64,
}

impl TraversalConfig {
    const fn default_starting_resource_fraction() -> f64 {
        0.9
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("starting_resource_fraction", self.starting_resource_fraction)
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self { starting_resource_fraction: Self::default_starting_resource_fraction() }
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { field, value })
    }
}
